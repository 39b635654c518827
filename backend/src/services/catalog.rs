//! Crop catalog service backed by a CSV file
//!
//! The catalog file has one header row and one row per crop. The
//! service reads the file fresh on every request; there is no cache or
//! write path, so concurrent requests need no coordination. Resolution
//! of fuzzy headers and the name match itself live in the shared crate.

use std::path::PathBuf;

use shared::{crop_names, find_crop, CatalogTable, CropRecord};

use crate::error::{AppError, AppResult};

/// Catalog service for crop lookups and name listings
#[derive(Debug, Clone)]
pub struct CatalogService {
    path: PathBuf,
}

impl CatalogService {
    /// Create a new CatalogService reading from the given CSV file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether the backing file currently holds a readable, non-empty table
    pub async fn is_available(&self) -> bool {
        self.load_table().await.is_ok()
    }

    /// Resolve a crop record by name
    pub async fn find_crop(&self, crop_name: &str) -> AppResult<CropRecord> {
        let table = self.load_table().await?;
        find_crop(&table, crop_name).map_err(|e| AppError::CropNotFound(e.0))
    }

    /// The sorted, deduplicated list of crop names for autocomplete
    pub async fn list_crop_names(&self) -> AppResult<Vec<String>> {
        let rows = self.load_raw_rows().await?;
        Ok(crop_names(&rows))
    }

    /// Read the file into a header-resolved table
    async fn load_table(&self) -> AppResult<CatalogTable> {
        let bytes = self.read_file().await?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes.as_slice());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::CatalogUnavailable(format!("invalid catalog header: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                AppError::CatalogUnavailable(format!("invalid catalog row: {}", e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        if rows.is_empty() {
            return Err(AppError::CatalogUnavailable(
                "no crop rows found in catalog".to_string(),
            ));
        }

        Ok(CatalogTable::new(headers, rows))
    }

    /// Read the file as raw positional rows, header row included
    async fn load_raw_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let bytes = self.read_file().await?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                AppError::CatalogUnavailable(format!("invalid catalog row: {}", e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        if rows.is_empty() {
            return Err(AppError::CatalogUnavailable(
                "no crop rows found in catalog".to_string(),
            ));
        }

        Ok(rows)
    }

    async fn read_file(&self) -> AppResult<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::CatalogUnavailable(format!(
                "catalog file {} unreadable: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const CATALOG: &str = "\
Crop Name,N (kg/ha),P (kg/ha),K (kg/ha),Soil pH,Soil Moisture (in %),Temperature Range (in °C)
Tomato,120,60,80,6.0 - 7.0,40 - 70,20 - 30
Rice,100,50,50,5.5\u{2013}6.5,,
Maize,90,45,40,not a range,30 - 60,18 - 27
";

    #[tokio::test]
    async fn finds_a_crop_through_fuzzy_headers() {
        let file = catalog_file(CATALOG);
        let service = CatalogService::new(file.path());

        let record = service.find_crop("  tomato ").await.unwrap();
        assert_eq!(record.name, "Tomato");
        assert_eq!(record.base_n, Some(120.0));
        assert_eq!(record.base_p, Some(60.0));
        assert_eq!(record.base_k, Some(80.0));
        assert!(record.optimal_ph.is_some());
        assert!(record.optimal_temperature.is_some());
    }

    #[tokio::test]
    async fn en_dash_ranges_parse_like_hyphens() {
        let file = catalog_file(CATALOG);
        let service = CatalogService::new(file.path());

        let rice = service.find_crop("rice").await.unwrap();
        let band = rice.optimal_ph.unwrap();
        assert_eq!(band.low, 5.5);
        assert_eq!(band.high, 6.5);
        assert_eq!(rice.optimal_moisture, None);
    }

    #[tokio::test]
    async fn malformed_range_cell_degrades_to_absent() {
        let file = catalog_file(CATALOG);
        let service = CatalogService::new(file.path());

        let maize = service.find_crop("Maize").await.unwrap();
        assert_eq!(maize.optimal_ph, None);
        assert!(maize.optimal_moisture.is_some());
    }

    #[tokio::test]
    async fn unknown_crop_is_crop_not_found() {
        let file = catalog_file(CATALOG);
        let service = CatalogService::new(file.path());

        let err = service.find_crop("durian").await.unwrap_err();
        assert!(matches!(err, AppError::CropNotFound(name) if name == "durian"));
    }

    #[tokio::test]
    async fn missing_file_is_catalog_unavailable() {
        let service = CatalogService::new("/nonexistent/crops.csv");

        let err = service.find_crop("tomato").await.unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable(_)));
        let err = service.list_crop_names().await.unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn header_only_file_has_no_rows() {
        let file = catalog_file("Crop Name,N,P,K\n");
        let service = CatalogService::new(file.path());

        let err = service.find_crop("tomato").await.unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable(_)));
        // the name listing degrades to an empty list instead
        assert_eq!(service.list_crop_names().await.unwrap(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn empty_file_is_catalog_unavailable() {
        let file = catalog_file("");
        let service = CatalogService::new(file.path());

        let err = service.list_crop_names().await.unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn crop_list_is_sorted_and_deduplicated() {
        let file = catalog_file("Crop Name,N\nTomato,120\nRice,100\nTomato,120\n");
        let service = CatalogService::new(file.path());

        assert_eq!(service.list_crop_names().await.unwrap(), vec!["Rice", "Tomato"]);
    }
}
