//! HTTP handler for the recommendation endpoint

use axum::{extract::State, Json};
use shared::RecommendationResult;

use crate::error::AppResult;
use crate::services::recommendation::{RecommendationInput, RecommendationService};
use crate::AppState;

/// Compute an NPK recommendation for a crop.
///
/// Readings supplied in the body take precedence; when the body carries
/// none, the latest feed snapshot is used best-effort.
pub async fn recommend(
    State(state): State<AppState>,
    Json(input): Json<RecommendationInput>,
) -> AppResult<Json<RecommendationResult>> {
    let fallback = state
        .config
        .sensor_feed
        .enabled
        .then(|| state.sensors.latest().readings);

    let service = RecommendationService::new(state.catalog.clone());
    let result = service.recommend(input, fallback).await?;
    Ok(Json(result))
}
