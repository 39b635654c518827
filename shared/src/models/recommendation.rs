//! Recommendation result model and the dose adjustment engine

use serde::{Deserialize, Serialize};

use crate::models::crop::{BaseDoses, OptimalRanges};
use crate::models::sensor::SensorSnapshot;

/// Advisory attached to every recommendation.
pub const ADVISORY_NOTE: &str = "Values are adjusted conservatively using sensor pH and soil \
     moisture relative to optimal ranges from the crop catalog. Tune the algorithm for local \
     agronomy.";

/// Adjusted NPK doses plus the normalized readings that produced them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustedDoses {
    /// Adjusted nitrogen dose, kg/ha.
    pub n: u64,
    /// Adjusted phosphorus dose, kg/ha.
    pub p: u64,
    /// Potassium dose, kg/ha. Never adjusted, only rounded.
    pub k: u64,
    /// The pH value the engine actually used, for explainability.
    pub ph: Option<f64>,
    /// The moisture value the engine actually used.
    pub moisture: Option<f64>,
}

/// The full response for a recommendation request. A value object:
/// computed per request, discarded after the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub crop: String,
    pub stage: Option<String>,
    pub base: BaseDoses,
    pub optimal: OptimalRanges,
    pub adjusted: AdjustedDoses,
    pub note: String,
}

/// Compute adjusted NPK doses from base values, optimal bands and live
/// readings.
///
/// Rules, applied in order and compounding on the same running N:
/// - pH below the optimal band: N +10%, P +5% (acidic soil).
/// - pH above the optimal band: N -10% (alkaline soil).
/// - moisture below the optimal band: N +5% (dry soil).
/// - moisture above the optimal band: N -5% (waterlogged).
///
/// A rule only fires when both the reading and the band are present.
/// Potassium is never adjusted. Missing base values are treated as 0.
/// Doses are rounded half-away-from-zero (`f64::round`); inputs are
/// non-negative by construction so the tie direction cannot go below
/// zero. This is a total function: it always returns a result.
pub fn adjust_doses(
    base: &BaseDoses,
    optimal: &OptimalRanges,
    readings: &SensorSnapshot,
) -> AdjustedDoses {
    let mut n = base.n.unwrap_or(0.0);
    let mut p = base.p.unwrap_or(0.0);
    let k = base.k.unwrap_or(0.0);

    if let (Some(ph), Some(band)) = (readings.ph, optimal.ph) {
        if ph < band.low {
            n *= 1.10;
            p *= 1.05;
        } else if ph > band.high {
            n *= 0.90;
        }
    }

    // Compounds onto whatever N the pH rule produced.
    if let (Some(moisture), Some(band)) = (readings.moisture, optimal.moisture) {
        if moisture < band.low {
            n *= 1.05;
        } else if moisture > band.high {
            n *= 0.95;
        }
    }

    AdjustedDoses {
        n: n.round() as u64,
        p: p.round() as u64,
        k: k.round() as u64,
        ph: readings.ph,
        moisture: readings.moisture,
    }
}
