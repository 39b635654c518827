//! Tolerant numeric normalization for external values
//!
//! Sensor readings and catalog cells arrive as free text with embedded
//! units ("45%", "28°C") or stray whitespace. Every numeric value that
//! enters the core goes through these two functions; a value that cannot
//! be normalized becomes `None`, never an error.

use crate::types::Range;

/// Parse a possibly unit-laden value into a finite number.
///
/// Strips every character except ASCII digits, `.` and `-` before
/// parsing, so `"45%"` becomes 45.0 and `"28°C"` becomes 28.0.
/// Returns `None` when nothing parseable is left or the result is not
/// finite.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a range cell such as `"6.0 - 7.5"` or `"6.0–7.5"`.
///
/// En and em dashes are normalized to a hyphen before splitting; both
/// halves must parse as finite numbers with `low <= high`, otherwise the
/// range is considered absent.
pub fn parse_range(raw: &str) -> Option<Range> {
    let normalized = raw.replace(['\u{2013}', '\u{2014}'], "-");
    let mut parts = normalized.split('-');
    let low: f64 = parts.next()?.trim().parse().ok()?;
    let high: f64 = parts.next()?.trim().parse().ok()?;
    if !low.is_finite() || !high.is_finite() || low > high {
        return None;
    }
    Some(Range { low, high })
}
