//! Error types for model parsing.

use thiserror::Error;

/// Errors raised when parsing model vocabulary from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Variant name not recognized.
    #[error("unknown dataset variant '{name}' (expected one of: {expected})")]
    UnknownVariant { name: String, expected: String },

    /// Gender label not on the secondary axis.
    #[error("unknown gender '{label}'")]
    UnknownGender { label: String },
}
