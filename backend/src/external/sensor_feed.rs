//! Realtime sensor feed client
//!
//! Polls the field sensors' realtime database over its REST endpoint
//! and keeps the latest normalized snapshot in memory. Sensor nodes
//! publish under inconsistent field names and with units embedded in
//! values, so every document goes through the shared normalization
//! before anything downstream sees it. A snapshot that has not been
//! refreshed within the configured window is reported as offline; the
//! recommendation path still consumes it best-effort.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use shared::{canonical_field, parse_numeric, SensorField, SensorSnapshot};

use crate::error::{AppError, AppResult};

/// One normalized feed document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeedReadings {
    pub snapshot: SensorSnapshot,
    /// Total dissolved solids, carried through but never used by the
    /// adjustment engine.
    pub tds: Option<f64>,
}

/// Realtime database REST client
#[derive(Debug, Clone)]
pub struct SensorFeedClient {
    client: Client,
    base_url: String,
    readings_path: String,
}

impl SensorFeedClient {
    /// Create a new SensorFeedClient
    pub fn new(base_url: String, readings_path: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            readings_path,
        }
    }

    /// Fetch and normalize the latest readings document
    pub async fn fetch_latest(&self) -> AppResult<FeedReadings> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.readings_path
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::SensorFeedError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SensorFeedError(format!(
                "{} - {}",
                status, body
            )));
        }

        let document: Value = response
            .json()
            .await
            .map_err(|e| AppError::SensorFeedError(format!("invalid response body: {}", e)))?;

        Ok(normalize_feed_document(&document))
    }
}

/// Normalize a raw feed document into canonical readings.
///
/// Unknown keys are ignored; for duplicate variants of the same field
/// the first key encountered wins. Values may be numbers or unit-laden
/// strings.
pub fn normalize_feed_document(document: &Value) -> FeedReadings {
    let mut readings = FeedReadings::default();

    let Some(map) = document.as_object() else {
        return readings;
    };

    for (key, value) in map {
        let Some(field) = canonical_field(key) else {
            continue;
        };
        let Some(number) = numeric_value(value) else {
            continue;
        };
        let slot = match field {
            SensorField::Ph => &mut readings.snapshot.ph,
            SensorField::Moisture => &mut readings.snapshot.moisture,
            SensorField::Temperature => &mut readings.snapshot.temperature,
            SensorField::Tds => &mut readings.tds,
        };
        if slot.is_none() {
            *slot = Some(number);
        }
    }

    readings
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

/// Latest feed state exposed to handlers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatestReadings {
    pub readings: SensorSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tds: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
    pub online: bool,
}

#[derive(Debug, Default)]
struct FeedState {
    readings: FeedReadings,
    updated_at: Option<DateTime<Utc>>,
}

/// Shared handle to the latest sensor snapshot
#[derive(Debug, Clone)]
pub struct SensorFeed {
    state: Arc<RwLock<FeedState>>,
    stale_after: chrono::Duration,
}

impl SensorFeed {
    pub fn new(stale_after_secs: i64) -> Self {
        Self {
            state: Arc::new(RwLock::new(FeedState::default())),
            stale_after: chrono::Duration::seconds(stale_after_secs),
        }
    }

    /// Store a freshly fetched document and stamp it
    pub fn record(&self, readings: FeedReadings) {
        // the state is a plain value overwrite, so a poisoned lock
        // holds nothing torn; recover instead of failing every caller
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.readings = readings;
        state.updated_at = Some(Utc::now());
    }

    /// The latest snapshot with its staleness verdict
    pub fn latest(&self) -> LatestReadings {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let online = state
            .updated_at
            .map(|t| Utc::now() - t <= self.stale_after)
            .unwrap_or(false);
        LatestReadings {
            readings: state.readings.snapshot,
            tds: state.readings.tds,
            updated_at: state.updated_at,
            online,
        }
    }
}

/// Spawn the background poller.
///
/// Failed polls are logged and skipped; the snapshot simply ages until
/// the staleness window flags it offline.
pub fn spawn_poller(
    feed: SensorFeed,
    client: SensorFeedClient,
    poll_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_interval);
        loop {
            interval.tick().await;
            match client.fetch_latest().await {
                Ok(readings) => feed.record(readings),
                Err(e) => tracing::warn!("sensor feed poll failed: {}", e),
            }
        }
    })
}
