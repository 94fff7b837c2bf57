//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File starts with a byte-order mark for an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has no valid rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row is missing or blank.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// A header cell is blank.
    #[error("empty column name in {path}")]
    EmptyColumnName { path: PathBuf },

    /// Two columns share a name.
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },

    // === Table Errors ===
    /// Column not found in table.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// Column holds text where numbers are required.
    #[error("column '{column}' is not numeric")]
    NotNumeric { column: String },

    /// A numeric column has an empty or unparseable cell.
    #[error("invalid number in column '{column}' at data row {row}")]
    InvalidNumber { column: String, row: usize },

    /// Columns of one table differ in length.
    #[error("column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/SRC_stats_2012.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/SRC_stats_2012.csv");
    }

    #[test]
    fn test_invalid_number_display() {
        let err = IngestError::InvalidNumber {
            column: "pool M".to_string(),
            row: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid number in column 'pool M' at data row 3"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
