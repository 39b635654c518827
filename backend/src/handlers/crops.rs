//! HTTP handler for the crop list endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::AppState;

#[derive(Serialize)]
pub struct CropListResponse {
    pub crops: Vec<String>,
}

/// List catalog crop names, sorted and deduplicated, for autocomplete
pub async fn list_crops(State(state): State<AppState>) -> AppResult<Json<CropListResponse>> {
    let crops = state.catalog.list_crop_names().await?;
    Ok(Json(CropListResponse { crops }))
}
