//! Error types for the csvjson library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV reader, including rows whose column count
    /// does not match the header.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header row, so there is no key column.
    #[error("Missing key column: {0}")]
    MissingKeyColumn(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
