//! Error handling for college data processing operations.
//!
//! Provides error types with context for source loading, configuration,
//! record conversion and export failures. Validation findings are not errors:
//! they are reported through [`crate::validation::ValidationReport`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollegeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Data source unavailable: {location} - {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("Malformed data source: {reason}")]
    MalformedSource { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Record {index} could not be converted: {reason}")]
    RecordConversion { index: usize, reason: String },

    #[error("Export failed for {path}: {reason}")]
    Export { path: PathBuf, reason: String },
}

impl CollegeError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an export error for the given output path
    pub fn export(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CollegeError>;
