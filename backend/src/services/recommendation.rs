//! Recommendation orchestration
//!
//! Ties the catalog lookup to the dose adjustment engine: resolve the
//! crop record, normalize the caller's readings (falling back to the
//! latest feed snapshot when the request carries none), adjust, and
//! assemble the response.

use serde::Deserialize;
use shared::{
    adjust_doses, RawSnapshot, RecommendationResult, SensorSnapshot, ADVISORY_NOTE,
};

use crate::error::{AppError, AppResult};
use crate::services::catalog::CatalogService;

/// A recommendation request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationInput {
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub readings: Option<RawSnapshot>,
}

/// Recommendation service
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: CatalogService,
}

impl RecommendationService {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }

    /// Compute a recommendation for one request.
    ///
    /// `fallback` is the latest feed snapshot, consulted only when the
    /// request itself carries no usable readings. Validation runs
    /// before any catalog access.
    pub async fn recommend(
        &self,
        input: RecommendationInput,
        fallback: Option<SensorSnapshot>,
    ) -> AppResult<RecommendationResult> {
        let crop = input.crop.trim().to_string();
        if crop.is_empty() {
            return Err(AppError::ValidationError(
                "missing crop in request".to_string(),
            ));
        }

        let record = self.catalog.find_crop(&crop).await?;

        let mut snapshot = input
            .readings
            .as_ref()
            .map(RawSnapshot::normalize)
            .unwrap_or_default();
        if snapshot.is_empty() {
            if let Some(latest) = fallback {
                snapshot = latest;
            }
        }

        let base = record.base_doses();
        let optimal = record.optimal_ranges();
        let adjusted = adjust_doses(&base, &optimal, &snapshot);

        let stage = input
            .stage
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(RecommendationResult {
            crop,
            stage,
            base,
            optimal,
            adjusted,
            note: ADVISORY_NOTE.to_string(),
        })
    }
}
