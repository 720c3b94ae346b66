//! Dataset sources.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::{DatasetError, RawDataset};

/// Trait for providing the raw dataset.
///
/// This abstraction allows the planner to be driven from a file, from
/// memory in tests, or through [`CachedSource`](crate::cache::CachedSource).
/// A source is asked once per search; the returned dataset is treated as
/// immutable for the duration of that search.
pub trait DatasetSource {
    fn load(&self) -> Result<Arc<RawDataset>, DatasetError>;
}

/// Serves a dataset held in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    dataset: Arc<RawDataset>,
}

impl InMemorySource {
    pub fn new(dataset: RawDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

impl DatasetSource for InMemorySource {
    fn load(&self) -> Result<Arc<RawDataset>, DatasetError> {
        Ok(Arc::clone(&self.dataset))
    }
}

/// Reads the dataset from a JSON file on every load.
///
/// Wrap in a [`CachedSource`](crate::cache::CachedSource) to avoid
/// re-reading the file for every search.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for JsonFileSource {
    fn load(&self) -> Result<Arc<RawDataset>, DatasetError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;

        let dataset = RawDataset::from_json(&json)?;

        debug!(
            path = %self.path.display(),
            sailings = dataset.sailings.len(),
            rates = dataset.rates.len(),
            days = dataset.exchange_rates.len(),
            "Loaded dataset"
        );

        Ok(Arc::new(dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "sailings": [
            {
                "origin_port": "CNSHA",
                "destination_port": "NLRTM",
                "departure_date": "2022-01-30",
                "arrival_date": "2022-03-05",
                "sailing_code": "MNOP"
            }
        ],
        "rates": [
            { "sailing_code": "MNOP", "rate": "456.78", "rate_currency": "USD" }
        ],
        "exchange_rates": { "2022-01-30": { "usd": 1.1138 } }
    }"#;

    #[test]
    fn in_memory_returns_same_dataset() {
        let source = InMemorySource::new(RawDataset::from_json(SAMPLE).unwrap());

        let a = source.load().unwrap();
        let b = source.load().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.sailings[0].sailing_code, "MNOP");
    }

    #[test]
    fn json_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let dataset = source.load().unwrap();

        assert_eq!(dataset.sailings.len(), 1);
        assert_eq!(dataset.rates[0].rate_currency, "USD");
    }

    #[test]
    fn json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("response.json"));

        let result = source.load();
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn json_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"sailings\": [").unwrap();

        let source = JsonFileSource::new(file.path());
        assert!(matches!(source.load(), Err(DatasetError::Json(_))));
    }

    #[test]
    fn fixture_loads() {
        let source = JsonFileSource::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/data/response.json"
        ));
        let dataset = source.load().unwrap();

        assert!(!dataset.sailings.is_empty());
        assert!(!dataset.exchange_rates.is_empty());
    }
}
