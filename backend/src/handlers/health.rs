//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog: String,
    pub sensor_feed: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_status = if state.catalog.is_available().await {
        "available".to_string()
    } else {
        "unavailable".to_string()
    };

    let feed_status = if !state.config.sensor_feed.enabled {
        "disabled".to_string()
    } else if state.sensors.latest().online {
        "online".to_string()
    } else {
        "offline".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: catalog_status,
        sensor_feed: feed_status,
    })
}
