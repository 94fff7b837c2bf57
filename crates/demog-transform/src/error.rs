//! Error types for dataset selection and flattening.

use demog_ingest::IngestError;
use demog_model::Variant;
use thiserror::Error;

/// Errors raised by [`CategoryDataset`](crate::CategoryDataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Category key is not in the variant's whitelist.
    #[error("invalid category '{key}' for {variant}; must be one of: {allowed}")]
    InvalidCategory {
        variant: Variant,
        key: String,
        allowed: String,
    },

    /// `flatten` called before any successful `select`.
    #[error("no category selected for {variant}")]
    NotSelected { variant: Variant },

    /// A column template resolved to a column the table does not have.
    #[error("{variant} category '{key}' needs column '{column}', which is missing")]
    MissingColumn {
        variant: Variant,
        key: String,
        column: String,
    },

    /// The label column for the primary axis is missing.
    #[error("{variant} primary axis needs label column '{column}', which is missing")]
    MissingLabelColumn { variant: Variant, column: String },

    /// Table height differs from the primary axis length.
    #[error("{variant} table has {actual} rows but the primary axis has {expected} entries")]
    LengthMismatch {
        variant: Variant,
        expected: usize,
        actual: usize,
    },

    /// Reading a column failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_display() {
        let err = DatasetError::InvalidCategory {
            variant: Variant::Hiring,
            key: "bogus".to_string(),
            allowed: "pool, long-list, short-list, hire".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid category 'bogus' for hiring; must be one of: pool, long-list, short-list, hire"
        );
    }

    #[test]
    fn test_from_ingest() {
        let err: DatasetError = IngestError::ColumnNotFound {
            column: "pool M".to_string(),
        }
        .into();
        assert!(matches!(err, DatasetError::Ingest(_)));
        assert_eq!(err.to_string(), "column 'pool M' not found in table");
    }
}
