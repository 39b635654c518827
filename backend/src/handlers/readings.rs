//! HTTP handler for the latest sensor readings

use axum::{extract::State, Json};

use crate::external::sensor_feed::LatestReadings;
use crate::AppState;

/// Latest normalized sensor snapshot with its online/offline verdict.
///
/// Always responds: before the first successful poll (or with the feed
/// disabled) the snapshot is empty, the timestamp null and the feed
/// reported offline.
pub async fn latest_readings(State(state): State<AppState>) -> Json<LatestReadings> {
    Json(state.sensors.latest())
}
