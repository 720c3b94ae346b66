//! Dataset loading errors.

use std::path::PathBuf;

/// Errors from loading a raw dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or doesn't match the dataset shape
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DatasetError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset missing.json: not found"
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DatasetError::from(json_err);
        assert!(err.to_string().starts_with("invalid dataset JSON"));
    }
}
