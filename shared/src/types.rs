//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// A closed numeric interval, e.g. an optimal soil pH band of 6.0-7.5.
///
/// Constructed through [`crate::numeric::parse_range`], which guarantees
/// both bounds are finite and `low <= high`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether a value falls inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}
