//! Log file output from dashboard events.

use std::fs;

use demog_cli::logging::{LogConfig, LogFormat, init_logging};
use demog_dashboard::{Dashboard, PanelKind};
use demog_ingest::Table;
use demog_model::Variant;
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;

fn fixture(variant: Variant) -> Result<Table, demog_ingest::IngestError> {
    let spec = variant.spec();
    let height = match variant {
        Variant::Hiring => 3,
        Variant::ScienceEvaluation | Variant::RenewalPromotion => 5,
        Variant::ResearchStaff => 38,
        Variant::Symposium => 1,
    };
    let mut columns: Vec<(String, demog_ingest::ColumnData)> = Vec::new();
    if variant == Variant::Symposium {
        columns.push(("Symposium".to_string(), vec!["Spring"].into()));
    }
    for key in spec.categories {
        for column in spec.column_rule.resolve(key).required() {
            columns.push((column.to_string(), vec![1.0; height].into()));
        }
    }
    Table::from_columns(columns)
}

#[test]
fn json_log_file_records_binding_events() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demog.log");
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        log_file: Some(path.clone()),
        ..LogConfig::default()
    };
    init_logging(&config).unwrap();

    let mut dashboard = Dashboard::assemble_from(fixture, "pool").unwrap();
    dashboard
        .on_category_changed(PanelKind::Hiring, "hire")
        .unwrap();
    dashboard
        .on_category_changed(PanelKind::Hiring, "offer")
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let messages: Vec<&str> = lines
        .iter()
        .filter_map(|line| line["fields"]["message"].as_str())
        .collect();

    assert!(messages.contains(&"dashboard assembled"));
    assert!(messages.contains(&"chart data replaced"));
    assert!(messages.contains(&"category change rejected"));
    assert!(lines.iter().any(|line| line["level"] == "WARN"));
}
