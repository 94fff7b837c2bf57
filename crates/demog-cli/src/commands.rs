use std::fs;
use std::io;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use demog_dashboard::{BindingOutcome, Dashboard, DashboardConfig, PanelKind};
use demog_ingest::read_table;
use demog_transform::CategoryDataset;

use demog_cli::export::export_json;
use demog_cli::render::{CheckRow, check_table, panels_table, print_chart};
use demog_cli::watch::{WatchSummary, watch};

use crate::cli::{Cli, ExportArgs, ShowArgs};

/// Resolve the configuration and apply command-line overrides.
pub fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let (mut config, source) =
        DashboardConfig::resolve(cli.config.as_deref()).context("load configuration")?;
    if let Some(path) = source {
        info!(path = %path.display(), "using configuration file");
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    Ok(config)
}

pub fn run_panels() {
    println!("{}", panels_table());
}

pub fn run_show(config: &DashboardConfig, args: &ShowArgs) -> Result<()> {
    let mut dashboard = Dashboard::assemble(config).context("assemble dashboard")?;
    let Some(name) = &args.panel else {
        for chart in dashboard.charts() {
            print_chart(chart);
        }
        return Ok(());
    };

    let kind: PanelKind = name.parse()?;
    dashboard.select_tab(kind);
    let Some(key) = &args.key else {
        let panel = dashboard.panel(kind);
        match args.ratio_override() {
            Some(ratio) if panel.dataset().is_some() => {
                let key = panel
                    .dataset()
                    .and_then(CategoryDataset::current_key)
                    .unwrap_or_default()
                    .to_string();
                print_chart(&panel.preview(&key, ratio)?);
            }
            _ => print_chart(panel.chart()),
        }
        return Ok(());
    };

    let panel = dashboard.panel(kind);
    let uses_binding = panel
        .binding()
        .is_some_and(|binding| args.ratio_override().is_none_or(|ratio| ratio == binding.ratio()));
    if uses_binding {
        match dashboard.on_category_changed(kind, key)? {
            BindingOutcome::Updated { .. } => print_chart(dashboard.panel(kind).chart()),
            BindingOutcome::Rejected(error) => return Err(error.into()),
        }
    } else {
        let ratio = args
            .ratio_override()
            .or_else(|| panel.dataset().map(CategoryDataset::is_ratio))
            .unwrap_or(false);
        print_chart(&panel.preview(key, ratio)?);
    }
    Ok(())
}

pub fn run_export(config: &DashboardConfig, args: &ExportArgs) -> Result<()> {
    let dashboard = Dashboard::assemble(config).context("assemble dashboard")?;
    let json = export_json(&dashboard).context("serialize charts")?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), charts = dashboard.panels().len(), "exported charts");
            println!("Exported {} charts to {}", dashboard.panels().len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn run_watch(config: &DashboardConfig) -> Result<WatchSummary> {
    let mut dashboard = Dashboard::assemble(config).context("assemble dashboard")?;
    dashboard.select_tab(PanelKind::Hiring);
    print_chart(dashboard.panel(PanelKind::Hiring).chart());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    watch(&mut dashboard, stdin.lock(), &mut stdout)
}

/// Load every data-backed panel's file and report per-panel status.
pub fn run_check(config: &DashboardConfig) -> Result<()> {
    let _span = info_span!("check", data_dir = %config.data_dir.display()).entered();
    let mut rows = Vec::new();
    for kind in PanelKind::ALL {
        let Some(variant) = kind.variant() else {
            continue;
        };
        let path = config.file_path(variant);
        let loaded = read_table(&path)
            .map_err(anyhow::Error::from)
            .and_then(|table| {
                let height = table.height();
                CategoryDataset::new(variant, table)
                    .map(|_| height)
                    .map_err(anyhow::Error::from)
            });
        let (rows_loaded, error) = match loaded {
            Ok(height) => (Some(height), None),
            Err(error) => {
                warn!(panel = %kind, %error, "check failed");
                (None, Some(error.to_string()))
            }
        };
        rows.push(CheckRow {
            panel: kind,
            file: path.display().to_string(),
            rows: rows_loaded,
            error,
        });
    }
    println!("{}", check_table(&rows));
    let failed = rows.iter().filter(|row| !row.is_ok()).count();
    if failed > 0 {
        return Err(anyhow!("{failed} of {} datasets failed to load", rows.len()));
    }
    Ok(())
}
