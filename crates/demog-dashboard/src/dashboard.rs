//! Dashboard assembly and event routing.

use demog_ingest::{IngestError, Table, read_table};
use demog_model::Variant;
use demog_transform::CategoryDataset;
use tracing::info;

use crate::binding::{BindingOutcome, CategoryBinding};
use crate::chart::{Chart, ChartId};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::panel::{Panel, PanelKind};
use crate::placeholder::sample_chart;

/// All tabs of the dashboard, one panel per [`PanelKind`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    panels: Vec<Panel>,
    active: PanelKind,
}

impl Dashboard {
    /// Load every input file named by `config` and build the panels.
    ///
    /// Any load or validation failure aborts assembly.
    pub fn assemble(config: &DashboardConfig) -> Result<Self> {
        info!(data_dir = %config.data_dir.display(), "assembling dashboard");
        Self::assemble_from(
            |variant| read_table(&config.file_path(variant)),
            &config.hiring.default_stage,
        )
    }

    /// Build the panels from tables supplied by `load`.
    ///
    /// `hiring_stage` is the initial value of the hiring dropdown.
    pub fn assemble_from<F>(mut load: F, hiring_stage: &str) -> Result<Self>
    where
        F: FnMut(Variant) -> std::result::Result<Table, IngestError>,
    {
        let mut panels = Vec::with_capacity(PanelKind::ALL.len());
        for (idx, kind) in PanelKind::ALL.into_iter().enumerate() {
            let id = ChartId::new(u32::try_from(idx).unwrap_or(u32::MAX));
            let panel = match kind.variant() {
                None => Panel::placeholder(kind, sample_chart(id, kind.label())),
                Some(variant) => {
                    let table = load(variant).map_err(|e| DashboardError::load(variant, e))?;
                    let mut dataset = CategoryDataset::new(variant, table)
                        .map_err(|e| DashboardError::load(variant, e))?;
                    let binding = if kind.is_reactive() {
                        let spec = dataset.spec().clone();
                        if hiring_stage != spec.default_key {
                            dataset
                                .select(hiring_stage, spec.ratio)
                                .map_err(|e| DashboardError::load(variant, e))?;
                        }
                        Some(CategoryBinding::for_spec(&spec))
                    } else {
                        None
                    };
                    Panel::with_dataset(kind, id, dataset, binding)?
                }
            };
            panels.push(panel);
        }
        info!(panels = panels.len(), "dashboard assembled");
        Ok(Self {
            panels,
            active: PanelKind::default(),
        })
    }

    /// Panels in tab order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, kind: PanelKind) -> &Panel {
        &self.panels[kind.index()]
    }

    /// Charts in tab order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> + '_ {
        self.panels.iter().map(Panel::chart)
    }

    pub fn active_tab(&self) -> PanelKind {
        self.active
    }

    pub fn select_tab(&mut self, kind: PanelKind) {
        if self.active != kind {
            tracing::debug!(tab = %kind, "tab selected");
        }
        self.active = kind;
    }

    /// Deliver a dropdown change to the panel's binding.
    ///
    /// Fails with `NotReactive` for panels without a dropdown. A refused key
    /// is reported as [`BindingOutcome::Rejected`], not as an error.
    pub fn on_category_changed(&mut self, kind: PanelKind, key: &str) -> Result<BindingOutcome> {
        self.panels[kind.index()].on_category_changed(key)
    }
}
