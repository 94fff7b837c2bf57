//! Tab bar, category selector, and active chart.

use demog_dashboard::PanelKind;
use egui::{RichText, Ui};

use crate::state::AppState;
use crate::theme::spacing;
use crate::views::ChartView;

/// Main dashboard view
pub struct DashboardView;

impl DashboardView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let active = state.active_tab();

        ui.horizontal(|ui| {
            for kind in PanelKind::ALL {
                let is_active = kind == active;
                let text = if is_active {
                    RichText::new(kind.label()).strong()
                } else {
                    RichText::new(kind.label())
                };
                if ui.selectable_label(is_active, text).clicked() {
                    state.select_tab(kind);
                }
            }
        });
        ui.separator();
        ui.add_space(spacing::SM);

        Self::selector(ui, state, active);

        let plot_height = state.config.display.chart_height;
        if let Some(dashboard) = &state.dashboard {
            ChartView::show(ui, dashboard.panel(active).chart(), plot_height);
        }
    }

    /// Dropdown for reactive panels.
    fn selector(ui: &mut Ui, state: &mut AppState, active: PanelKind) {
        let Some(panel) = state.dashboard.as_ref().map(|dashboard| dashboard.panel(active)) else {
            return;
        };
        let Some(binding) = panel.binding() else {
            return;
        };
        let current = panel
            .dataset()
            .and_then(|dataset| dataset.current_key())
            .unwrap_or_default()
            .to_string();
        let title = binding.title();
        let options = binding.options();

        let mut selected = current.clone();
        ui.horizontal(|ui| {
            egui::ComboBox::from_label(title)
                .width(140.0)
                .selected_text(&selected)
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.selectable_value(&mut selected, (*option).to_string(), *option);
                    }
                });
        });
        if selected != current {
            state.change_category(active, &selected);
        }
        if let Some(message) = &state.rejection {
            ui.label(RichText::new(message).color(ui.visuals().warn_fg_color));
        }
        ui.add_space(spacing::SM);
    }
}
