//! Sensor reading models and field-name normalization

use serde::{Deserialize, Serialize};

use crate::numeric::parse_numeric;

/// A sensor value as it arrives from the outside: either already a
/// number or free text with embedded units ("45%", "28°C").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawReading {
    Number(f64),
    Text(String),
}

impl RawReading {
    /// Normalize to a finite number; unparsable text is absent.
    pub fn normalize(&self) -> Option<f64> {
        match self {
            RawReading::Number(v) if v.is_finite() => Some(*v),
            RawReading::Number(_) => None,
            RawReading::Text(s) => parse_numeric(s),
        }
    }
}

/// Caller-supplied current readings, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshot {
    pub ph: Option<RawReading>,
    pub moisture: Option<RawReading>,
    pub temperature: Option<RawReading>,
}

impl RawSnapshot {
    pub fn normalize(&self) -> SensorSnapshot {
        SensorSnapshot {
            ph: self.ph.as_ref().and_then(RawReading::normalize),
            moisture: self.moisture.as_ref().and_then(RawReading::normalize),
            temperature: self.temperature.as_ref().and_then(RawReading::normalize),
        }
    }
}

/// The normalized readings the adjustment engine consumes. Best-effort
/// and possibly stale; any field may be absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SensorSnapshot {
    pub ph: Option<f64>,
    pub moisture: Option<f64>,
    pub temperature: Option<f64>,
}

impl SensorSnapshot {
    pub fn is_empty(&self) -> bool {
        self.ph.is_none() && self.moisture.is_none() && self.temperature.is_none()
    }
}

/// Canonical sensor fields delivered by the realtime feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorField {
    Ph,
    Moisture,
    Temperature,
    Tds,
}

/// Map a feed field name to its canonical sensor field.
///
/// Sensor nodes publish under inconsistent keys (`ph`/`pH`,
/// `humidity`/`hum`, `soil-moisture`/`soilMoisture`/`soil`, `tds`/`TDS`,
/// `temperature`/`temp`); matching is case-insensitive substring over
/// the lowercased key, most specific variant first.
pub fn canonical_field(name: &str) -> Option<SensorField> {
    let key = name.trim().to_lowercase();
    if key.contains("ph") && !key.contains("phos") {
        return Some(SensorField::Ph);
    }
    if key.contains("moisture") || key.contains("soil") || key.contains("hum") {
        return Some(SensorField::Moisture);
    }
    if key.contains("temp") {
        return Some(SensorField::Temperature);
    }
    if key.contains("tds") {
        return Some(SensorField::Tds);
    }
    None
}
