//! Demographics dashboard assembly.
//!
//! Builds the seven tab panels, each owning a [`Chart`] handle and, when
//! data-backed, a [`CategoryDataset`](demog_transform::CategoryDataset). The
//! Hiring panel carries a [`CategoryBinding`] that updates its chart in place
//! when the "Hiring Stage" dropdown changes.
//!
//! # Example
//!
//! ```ignore
//! use demog_dashboard::{Dashboard, DashboardConfig, PanelKind};
//!
//! let config = DashboardConfig::default();
//! let mut dashboard = Dashboard::assemble(&config)?;
//! let outcome = dashboard.on_category_changed(PanelKind::Hiring, "hire")?;
//! ```

mod binding;
mod chart;
pub mod config;
mod dashboard;
mod error;
mod panel;
pub mod placeholder;

pub use binding::{BindingOutcome, CategoryBinding};
pub use chart::{Chart, ChartId, LegendEntry, gender_legend};
pub use config::{CONFIG_ENV_VAR, DashboardConfig, DisplaySettings, FileOverrides, HiringSettings};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use panel::{Panel, PanelKind};
