//! Application state

use std::path::PathBuf;

use demog_dashboard::{BindingOutcome, Dashboard, DashboardConfig, PanelKind};

use crate::settings::Preferences;

/// Top-level application state
pub struct AppState {
    pub config: DashboardConfig,
    pub preferences: Preferences,
    /// Assembled dashboard (None until a load succeeds)
    pub dashboard: Option<Dashboard>,
    /// Error of the last failed load
    pub load_error: Option<String>,
    /// Message for the last rejected dropdown change
    pub rejection: Option<String>,
    /// Data directory typed into the reload field
    pub data_dir_input: String,
}

impl AppState {
    pub fn new(config: DashboardConfig, preferences: Preferences) -> Self {
        let data_dir_input = config.data_dir.display().to_string();
        Self {
            config,
            preferences,
            dashboard: None,
            load_error: None,
            rejection: None,
            data_dir_input,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences
            .dark_mode
            .unwrap_or(self.config.display.dark_mode)
    }

    /// Assemble the dashboard from the current configuration.
    ///
    /// Keeps the previous dashboard's active tab. Returns true on success.
    pub fn load(&mut self) -> bool {
        let active = self.active_tab();
        match Dashboard::assemble(&self.config) {
            Ok(mut dashboard) => {
                dashboard.select_tab(active);
                self.dashboard = Some(dashboard);
                self.load_error = None;
                self.rejection = None;
                self.preferences.last_data_dir = Some(self.config.data_dir.clone());
                true
            }
            Err(error) => {
                tracing::error!(%error, "failed to assemble dashboard");
                self.load_error = Some(error.to_string());
                false
            }
        }
    }

    /// Point the configuration at `dir` and reload.
    ///
    /// On failure the previous data directory is restored.
    pub fn reload_from(&mut self, dir: PathBuf) -> bool {
        let previous = std::mem::replace(&mut self.config.data_dir, dir);
        let loaded = self.load();
        if !loaded {
            self.config.data_dir = previous;
        }
        loaded
    }

    pub fn active_tab(&self) -> PanelKind {
        self.dashboard
            .as_ref()
            .map_or_else(PanelKind::default, Dashboard::active_tab)
    }

    pub fn select_tab(&mut self, kind: PanelKind) {
        if let Some(dashboard) = &mut self.dashboard {
            dashboard.select_tab(kind);
        }
    }

    /// Route a dropdown change to the active panel.
    pub fn change_category(&mut self, kind: PanelKind, key: &str) {
        let Some(dashboard) = &mut self.dashboard else {
            return;
        };
        match dashboard.on_category_changed(kind, key) {
            Ok(BindingOutcome::Updated { .. }) => self.rejection = None,
            Ok(BindingOutcome::Rejected(error)) => self.rejection = Some(error.to_string()),
            Err(error) => self.rejection = Some(error.to_string()),
        }
    }
}
