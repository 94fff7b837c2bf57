//! Main application struct and eframe::App implementation

use std::path::PathBuf;

use demog_dashboard::DashboardConfig;
use eframe::egui;
use egui::RichText;

use demog_gui::settings::{Preferences, save_preferences};
use demog_gui::state::AppState;
use demog_gui::theme::spacing;

use demog_gui::views::DashboardView;

/// Main application struct
pub struct DemogApp {
    state: AppState,
}

impl DemogApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig, preferences: Preferences) -> Self {
        let mut state = AppState::new(config, preferences);
        state.load();
        apply_visuals(&cc.egui_ctx, state.dark_mode());
        Self { state }
    }
}

impl eframe::App for DemogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(spacing::XS);
            self.toolbar(ui, ctx);
            ui.add_space(spacing::XS);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.state.load_error {
                ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
                ui.add_space(spacing::SM);
            }
            if self.state.dashboard.is_some() {
                DashboardView::show(ui, &mut self.state);
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(spacing::LG);
                    ui.label(RichText::new("No data loaded").weak());
                });
            }
        });
    }
}

impl DemogApp {
    fn toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label("Data directory");
            ui.text_edit_singleline(&mut self.state.data_dir_input);
            if ui.button("Reload").clicked() {
                let dir = PathBuf::from(self.state.data_dir_input.trim());
                tracing::info!(dir = %dir.display(), "reloading data");
                if self.state.reload_from(dir) {
                    self.persist();
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut dark_mode = self.state.dark_mode();
                if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                    self.state.preferences.dark_mode = Some(dark_mode);
                    apply_visuals(ctx, dark_mode);
                    self.persist();
                }
            });
        });
    }
}

impl DemogApp {
    fn persist(&self) {
        if let Err(e) = save_preferences(&self.state.preferences) {
            tracing::error!("Failed to save preferences: {e:#}");
        }
    }
}

fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
