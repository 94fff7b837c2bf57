//! Reactive category binding.
//!
//! Connects a category dropdown to a chart: each selection change re-runs
//! `select` and `flatten` on the bound dataset and swaps the result into the
//! chart in place. A rejected key leaves both untouched.

use demog_model::VariantSpec;
use demog_transform::{CategoryDataset, DatasetError};
use tracing::{info, warn};

use crate::chart::Chart;

/// Result of one selection-change event.
#[derive(Debug)]
pub enum BindingOutcome {
    /// The chart now shows `key`; `revision` is the chart's new revision.
    Updated { key: String, revision: u64 },
    /// The key was refused; chart and dataset are unchanged.
    Rejected(DatasetError),
}

impl BindingOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Dropdown settings for one data-backed panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBinding {
    title: &'static str,
    options: &'static [&'static str],
    ratio: bool,
}

impl CategoryBinding {
    /// Binding using the variant's dropdown title, whitelist, and ratio default.
    pub fn for_spec(spec: &VariantSpec) -> Self {
        Self {
            title: spec.selector_title,
            options: spec.categories,
            ratio: spec.ratio,
        }
    }

    /// Dropdown title.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Dropdown options, in display order.
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    pub fn ratio(&self) -> bool {
        self.ratio
    }

    /// Handle a selection change.
    pub fn apply(&self, dataset: &mut CategoryDataset, chart: &mut Chart, key: &str) -> BindingOutcome {
        let flattened = match dataset.select(key, self.ratio) {
            Ok(_) => dataset.flatten(),
            Err(error) => Err(error),
        };
        match flattened {
            Ok(series) => {
                chart.replace_data(series, self.ratio);
                info!(chart = %chart.id(), key, revision = chart.revision(), "chart data replaced");
                BindingOutcome::Updated {
                    key: key.to_string(),
                    revision: chart.revision(),
                }
            }
            Err(error) => {
                warn!(chart = %chart.id(), key, %error, "category change rejected");
                BindingOutcome::Rejected(error)
            }
        }
    }
}
