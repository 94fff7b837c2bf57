//! Demographics Dashboard - Desktop GUI Application
//!
//! Tabbed bar charts of gender breakdowns across hiring, evaluation,
//! staffing, and symposium datasets.

mod app;

use std::path::PathBuf;

use clap::Parser;
use demog_dashboard::DashboardConfig;
use demog_gui::settings::load_preferences;
use eframe::egui;

#[derive(Parser, Debug)]
#[command(name = "demog-gui", version, about = "Demographics dashboard")]
struct Args {
    /// Path to a config file (default: $DEMOG_CONFIG or platform config dir)
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the CSV inputs
    #[arg(long = "data-dir", value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let (mut config, config_path) = DashboardConfig::resolve(args.config.as_deref())?;
    if let Some(path) = &config_path {
        tracing::info!(path = %path.display(), "loaded config");
    }

    let preferences = load_preferences();
    match (args.data_dir, &preferences.last_data_dir) {
        (Some(dir), _) => config.data_dir = dir,
        (None, Some(dir)) if config_path.is_none() => config.data_dir = dir.clone(),
        _ => {}
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Demographics Dashboard")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Demographics Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(app::DemogApp::new(cc, config, preferences)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start GUI: {e}"))
}
