//! Error types for dashboard assembly and configuration.

use std::path::PathBuf;

use demog_model::Variant;
use demog_transform::DatasetError;
use thiserror::Error;

use crate::panel::PanelKind;

/// Errors raised while assembling or driving the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A data-backed panel could not load or validate its table.
    #[error("failed to load {variant} data: {source}")]
    Load {
        variant: Variant,
        #[source]
        source: DatasetError,
    },

    /// A panel refused a category key.
    #[error("panel '{panel}' rejected the selection: {source}")]
    Category {
        panel: PanelKind,
        #[source]
        source: DatasetError,
    },

    /// The configuration file is not valid TOML for [`DashboardConfig`](crate::DashboardConfig).
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selection change was routed to a panel without a dropdown.
    #[error("panel '{panel}' has no category selector")]
    NotReactive { panel: PanelKind },

    /// Panel name did not match any tab.
    #[error("unknown panel '{name}'; expected one of: {expected}")]
    UnknownPanel { name: String, expected: String },
}

impl DashboardError {
    pub(crate) fn load(variant: Variant, source: impl Into<DatasetError>) -> Self {
        Self::Load {
            variant,
            source: source.into(),
        }
    }
}

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
