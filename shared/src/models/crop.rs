//! Crop catalog models

use serde::{Deserialize, Serialize};

use crate::types::Range;

/// One row of the crop catalog, resolved from the tabular source.
///
/// A record is rebuilt from the backing table on every lookup and is
/// never mutated. Any base dose or optimal range may be absent when the
/// source cell is missing or unparsable; downstream computation treats
/// absence as "rule disabled", never as a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecord {
    /// Catalog-unique crop name, matched case-insensitively and trimmed.
    pub name: String,
    /// Base nitrogen dose in kg/ha.
    pub base_n: Option<f64>,
    /// Base phosphorus dose in kg/ha.
    pub base_p: Option<f64>,
    /// Base potassium dose in kg/ha.
    pub base_k: Option<f64>,
    /// Optimal soil pH band.
    pub optimal_ph: Option<Range>,
    /// Optimal soil moisture band, percent.
    pub optimal_moisture: Option<Range>,
    /// Optimal temperature band, degrees Celsius.
    pub optimal_temperature: Option<Range>,
}

impl CropRecord {
    /// Base doses in the shape the adjustment engine consumes.
    pub fn base_doses(&self) -> BaseDoses {
        BaseDoses {
            n: self.base_n,
            p: self.base_p,
            k: self.base_k,
        }
    }

    /// Optimal ranges in the shape the adjustment engine consumes.
    pub fn optimal_ranges(&self) -> OptimalRanges {
        OptimalRanges {
            ph: self.optimal_ph,
            moisture: self.optimal_moisture,
            temperature: self.optimal_temperature,
        }
    }
}

/// Base NPK doses as read from the catalog, kg/ha.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BaseDoses {
    pub n: Option<f64>,
    pub p: Option<f64>,
    pub k: Option<f64>,
}

/// Optimal environment bands for a crop.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct OptimalRanges {
    pub ph: Option<Range>,
    pub moisture: Option<Range>,
    pub temperature: Option<Range>,
}
