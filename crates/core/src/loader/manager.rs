use std::io::Read;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use crate::errors::CoreError;
use crate::models::dataset::SalesDataset;
use crate::models::sale::SalesRecord;

use super::format;

/// Loads the sales CSV into an immutable `SalesDataset`.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Parse a dataset from any reader.
    ///
    /// Flow: header row → required-column check → typed rows → value checks → dataset
    pub fn load_from_reader<R: Read>(reader: R) -> Result<SalesDataset, CoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // 1. Header
        let headers = csv_reader.headers()?.clone();
        format::validate_headers(&headers)?;

        // 2. Rows
        let mut records = Vec::new();
        let mut raw = csv::StringRecord::new();
        while csv_reader.read_record(&mut raw)? {
            let line = raw.position().map_or(0, |p| p.line());
            let record: SalesRecord =
                raw.deserialize(Some(&headers))
                    .map_err(|e| CoreError::InvalidRecord {
                        line,
                        message: e.to_string(),
                    })?;
            format::validate_record(&record, line)?;
            records.push(record);
        }

        let dataset = SalesDataset::new(records);
        log::info!(
            "loaded {} sales records ({} categories, {} genders)",
            dataset.len(),
            dataset.categories().len(),
            dataset.genders().len()
        );
        Ok(dataset)
    }

    /// Parse a dataset from raw CSV bytes (e.g., an uploaded file).
    pub fn load_from_bytes(data: &[u8]) -> Result<SalesDataset, CoreError> {
        Self::load_from_reader(data)
    }

    /// Load a dataset from a CSV file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<SalesDataset, CoreError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::load_from_reader(std::io::BufReader::new(file))
    }
}
