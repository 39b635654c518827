//! Crop catalog lookup over a tabular source
//!
//! The catalog is a table with one header row and one row per crop, but
//! header names are free text that varies between files ("N (kg/ha)",
//! "Nitrogen", "n"). Each field resolves its column through an ordered
//! synonym table: fragments are tried in listed order and the first
//! header containing a fragment wins (case-insensitive substring).

use thiserror::Error;

use crate::models::crop::CropRecord;
use crate::numeric::{parse_numeric, parse_range};
use crate::types::Range;

/// Accepted header fragments for the crop name column.
pub const NAME_SYNONYMS: &[&str] = &["crop name", "crop", "name", "crop_name"];

/// Ordered synonym fragments for the nitrogen column.
pub const NITROGEN_SYNONYMS: &[&str] = &["n (kg/ha)", "n(kg/ha)", "n", "nitrogen"];

/// Ordered synonym fragments for the phosphorus column.
pub const PHOSPHORUS_SYNONYMS: &[&str] = &["p (kg/ha)", "p(kg/ha)", "p", "phosphorus"];

/// Ordered synonym fragments for the potassium column.
pub const POTASSIUM_SYNONYMS: &[&str] = &["k (kg/ha)", "k(kg/ha)", "k", "potassium"];

/// Ordered synonym fragments for the temperature range column.
pub const TEMPERATURE_SYNONYMS: &[&str] = &[
    "temperature range",
    "temperature range (in °c)",
    "temperature",
    "opt temp",
    "optimal temp",
];

/// Fallback fragments when the temperature column is empty or missing.
pub const OPTIMAL_TEMP_SYNONYMS: &[&str] =
    &["optimal temp", "optimal temperature", "optimal temp range"];

/// Ordered synonym fragments for the soil moisture column.
pub const MOISTURE_SYNONYMS: &[&str] = &["soil moisture", "soil moisture (in %)", "moisture"];

/// Ordered synonym fragments for the soil pH column.
pub const PH_SYNONYMS: &[&str] = &["soil ph", "ph"];

/// No row's name column matches the requested crop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("crop '{0}' not found in catalog")]
pub struct CropNotFound(pub String);

/// An in-memory view of the catalog: one header row plus data rows.
/// Cells are raw text; rows shorter than the header read as empty cells.
#[derive(Debug, Clone, Default)]
pub struct CatalogTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CatalogTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cell<'a>(&'a self, row: usize, col: Option<usize>) -> &'a str {
        col.and_then(|c| self.rows[row].get(c))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Resolve a column index from an ordered synonym table.
///
/// Fragments are tried in listed order; for each fragment the headers
/// are scanned left to right and the first header whose lowercased text
/// contains the fragment wins.
pub fn resolve_column(headers: &[String], synonyms: &[&str]) -> Option<usize> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    synonyms
        .iter()
        .find_map(|fragment| lowered.iter().position(|h| h.contains(fragment)))
}

/// Locate a crop row by name and extract its record.
///
/// Name matching is exact after trimming and lowercasing both sides.
/// Numeric and range cells degrade to absent when unparsable; only a
/// missing row is an error.
pub fn find_crop(table: &CatalogTable, crop_name: &str) -> Result<CropRecord, CropNotFound> {
    let wanted = crop_name.trim().to_lowercase();
    let name_col = resolve_column(&table.headers, NAME_SYNONYMS)
        .ok_or_else(|| CropNotFound(crop_name.trim().to_string()))?;

    let row = (0..table.rows.len())
        .find(|&i| table.cell(i, Some(name_col)).trim().to_lowercase() == wanted)
        .ok_or_else(|| CropNotFound(crop_name.trim().to_string()))?;

    let n_col = resolve_column(&table.headers, NITROGEN_SYNONYMS);
    let p_col = resolve_column(&table.headers, PHOSPHORUS_SYNONYMS);
    let k_col = resolve_column(&table.headers, POTASSIUM_SYNONYMS);
    let moisture_col = resolve_column(&table.headers, MOISTURE_SYNONYMS);
    let ph_col = resolve_column(&table.headers, PH_SYNONYMS);

    Ok(CropRecord {
        name: table.cell(row, Some(name_col)).trim().to_string(),
        base_n: parse_dose(table.cell(row, n_col)),
        base_p: parse_dose(table.cell(row, p_col)),
        base_k: parse_dose(table.cell(row, k_col)),
        optimal_ph: parse_range(table.cell(row, ph_col)),
        optimal_moisture: parse_range(table.cell(row, moisture_col)),
        optimal_temperature: temperature_range(table, row),
    })
}

/// Base doses are non-negative by contract; a stray negative catalog
/// cell clamps to zero rather than relying on downstream rounding.
fn parse_dose(cell: &str) -> Option<f64> {
    parse_numeric(cell).map(|v| v.max(0.0))
}

/// Temperature lives under more header variants than the other bands;
/// when the primary column is empty the fallback column is consulted.
fn temperature_range(table: &CatalogTable, row: usize) -> Option<Range> {
    let primary = table.cell(row, resolve_column(&table.headers, TEMPERATURE_SYNONYMS));
    if !primary.trim().is_empty() {
        return parse_range(primary);
    }
    parse_range(table.cell(row, resolve_column(&table.headers, OPTIMAL_TEMP_SYNONYMS)))
}

/// Project the sorted, deduplicated set of crop names out of raw rows.
///
/// Operates positionally on the first column, including the header row:
/// when the first row's first cell is one of the recognized name
/// headers it is skipped. Deduplication is case-sensitive; the result
/// is sorted lexicographically.
pub fn crop_names(raw_rows: &[Vec<String>]) -> Vec<String> {
    let mut start = 0;
    if let Some(first) = raw_rows.first().and_then(|r| r.first()) {
        if is_name_header(first.trim()) {
            start = 1;
        }
    }

    let mut names: Vec<String> = raw_rows[start.min(raw_rows.len())..]
        .iter()
        .filter_map(|r| r.first())
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

fn is_name_header(cell: &str) -> bool {
    ["name", "crop", "crop name", "crop_name"]
        .iter()
        .any(|h| cell.eq_ignore_ascii_case(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CatalogTable {
        CatalogTable::new(
            vec![
                "Crop Name".into(),
                "N (kg/ha)".into(),
                "P (kg/ha)".into(),
                "K (kg/ha)".into(),
                "Soil pH".into(),
                "Soil Moisture (in %)".into(),
                "Temperature Range (in °C)".into(),
            ],
            vec![
                vec![
                    "Tomato".into(),
                    "120".into(),
                    "60".into(),
                    "80".into(),
                    "6.0 - 7.0".into(),
                    "40 - 70".into(),
                    "20 - 30".into(),
                ],
                vec![
                    "Rice".into(),
                    "100".into(),
                    "50".into(),
                    "50".into(),
                    "5.5\u{2013}6.5".into(),
                    "".into(),
                    "".into(),
                ],
            ],
        )
    }

    #[test]
    fn resolves_columns_through_synonym_fragments() {
        let t = table();
        assert_eq!(resolve_column(&t.headers, NAME_SYNONYMS), Some(0));
        assert_eq!(resolve_column(&t.headers, NITROGEN_SYNONYMS), Some(1));
        assert_eq!(resolve_column(&t.headers, PHOSPHORUS_SYNONYMS), Some(2));
        assert_eq!(resolve_column(&t.headers, POTASSIUM_SYNONYMS), Some(3));
        assert_eq!(resolve_column(&t.headers, PH_SYNONYMS), Some(4));
        assert_eq!(resolve_column(&t.headers, MOISTURE_SYNONYMS), Some(5));
    }

    #[test]
    fn earlier_fragments_win_over_later_ones() {
        let headers = vec!["Nitrogen".into(), "N (kg/ha)".into()];
        // "n (kg/ha)" is tried before the bare "n" fragment
        assert_eq!(resolve_column(&headers, NITROGEN_SYNONYMS), Some(1));
    }

    #[test]
    fn terse_headers_still_resolve() {
        let headers: Vec<String> = ["crop", "nitrogen", "potassium", "ph"]
            .map(String::from)
            .to_vec();
        assert_eq!(resolve_column(&headers, NAME_SYNONYMS), Some(0));
        assert_eq!(resolve_column(&headers, NITROGEN_SYNONYMS), Some(1));
        assert_eq!(resolve_column(&headers, POTASSIUM_SYNONYMS), Some(2));
        assert_eq!(resolve_column(&headers, PH_SYNONYMS), Some(3));
    }

    #[test]
    fn bare_fragments_bind_to_the_leftmost_containing_header() {
        // substring matching is deliberately greedy: the bare "n"
        // fragment hits "Crop Name" before a later "Nitrogen" header
        let headers: Vec<String> = ["Crop Name", "Nitrogen"].map(String::from).to_vec();
        assert_eq!(resolve_column(&headers, NITROGEN_SYNONYMS), Some(0));
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let record = find_crop(&table(), "  tomato ").unwrap();
        assert_eq!(record.name, "Tomato");
        assert_eq!(record.base_n, Some(120.0));
        assert_eq!(record.base_p, Some(60.0));
        assert_eq!(record.base_k, Some(80.0));
        assert_eq!(record.optimal_ph, Some(Range::new(6.0, 7.0)));
        assert_eq!(record.optimal_moisture, Some(Range::new(40.0, 70.0)));
        assert_eq!(record.optimal_temperature, Some(Range::new(20.0, 30.0)));
    }

    #[test]
    fn missing_cells_degrade_to_absent() {
        let record = find_crop(&table(), "rice").unwrap();
        assert_eq!(record.optimal_ph, Some(Range::new(5.5, 6.5)));
        assert_eq!(record.optimal_moisture, None);
        assert_eq!(record.optimal_temperature, None);
    }

    #[test]
    fn negative_dose_cells_clamp_to_zero() {
        let t = CatalogTable::new(
            vec!["Crop Name".into(), "N (kg/ha)".into(), "P (kg/ha)".into()],
            vec![vec!["Tomato".into(), "-5".into(), "60".into()]],
        );
        let record = find_crop(&t, "tomato").unwrap();
        assert_eq!(record.base_n, Some(0.0));
        assert_eq!(record.base_p, Some(60.0));
    }

    #[test]
    fn unknown_crop_is_not_found_not_zero_filled() {
        let err = find_crop(&table(), "durian").unwrap_err();
        assert_eq!(err, CropNotFound("durian".to_string()));
    }

    #[test]
    fn crop_names_skips_header_dedups_and_sorts() {
        let raw = vec![
            vec!["Crop Name".to_string()],
            vec!["Tomato".to_string()],
            vec!["Rice".to_string()],
            vec!["Tomato".to_string()],
            vec!["".to_string()],
            vec!["Maize".to_string()],
        ];
        assert_eq!(crop_names(&raw), vec!["Maize", "Rice", "Tomato"]);
    }

    #[test]
    fn crop_names_keeps_first_row_without_recognized_header() {
        let raw = vec![vec!["Tomato".to_string()], vec!["Rice".to_string()]];
        assert_eq!(crop_names(&raw), vec!["Rice", "Tomato"]);
    }

    #[test]
    fn crop_names_dedup_is_case_sensitive() {
        let raw = vec![
            vec!["name".to_string()],
            vec!["tomato".to_string()],
            vec!["Tomato".to_string()],
        ];
        assert_eq!(crop_names(&raw), vec!["Tomato", "tomato"]);
    }
}
