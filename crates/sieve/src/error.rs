//! Error types for the Sieve library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Sieve operations.
///
/// Classification itself never fails: every variant here describes a problem
/// with getting the input into a table, or with writing results back out.
#[derive(Debug, Error)]
pub enum SieveError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The byte buffer is not valid text in the selected encoding.
    #[error("Decode error at byte {offset}: {message}")]
    Decode { offset: usize, message: String },

    /// Structural error in the delimited text.
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Error from the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A table could not be written back out as delimited text.
    #[error("Failed to write CSV output: {0}")]
    Write(#[source] csv::Error),

    /// Empty input or no columns to parse.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SieveError {
    /// True when the input could not be turned into a table.
    ///
    /// These errors are raised before any row is classified, so there is
    /// never a partial result to go with them.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SieveError::Decode { .. }
                | SieveError::Parse { .. }
                | SieveError::Csv(_)
                | SieveError::EmptyData(_)
        )
    }
}

/// Result type alias for Sieve operations.
pub type Result<T> = std::result::Result<T, SieveError>;
