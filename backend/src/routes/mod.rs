//! Route definitions for the FertiSense backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop name list for autocomplete
        .route("/crops", get(handlers::list_crops))
        // NPK recommendation
        .route("/recommendation", post(handlers::recommend))
        // Latest sensor snapshot
        .route("/readings/latest", get(handlers::latest_readings))
}
