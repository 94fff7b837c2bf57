//! JSON export of every chart for external charting libraries.

use serde::Serialize;

use demog_dashboard::{Chart, Dashboard, Panel};

#[derive(Debug, Serialize)]
pub struct DashboardExport<'a> {
    pub panels: Vec<PanelExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PanelExport<'a> {
    pub tab: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<SelectorExport<'a>>,
    pub chart: &'a Chart,
}

/// Dropdown state of a reactive panel.
#[derive(Debug, Serialize)]
pub struct SelectorExport<'a> {
    pub title: &'static str,
    pub options: &'static [&'static str],
    pub value: Option<&'a str>,
}

impl<'a> PanelExport<'a> {
    fn from_panel(panel: &'a Panel) -> Self {
        let selector = panel.binding().map(|binding| SelectorExport {
            title: binding.title(),
            options: binding.options(),
            value: panel.dataset().and_then(|dataset| dataset.current_key()),
        });
        Self {
            tab: panel.kind().label(),
            name: panel.kind().name(),
            selector,
            chart: panel.chart(),
        }
    }
}

impl<'a> DashboardExport<'a> {
    pub fn new(dashboard: &'a Dashboard) -> Self {
        Self {
            panels: dashboard.panels().iter().map(PanelExport::from_panel).collect(),
        }
    }
}

/// Pretty JSON for the whole dashboard.
pub fn export_json(dashboard: &Dashboard) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DashboardExport::new(dashboard))
}
