//! Reactive binding over a dashboard assembled from CSV files.

use std::fs;
use std::path::Path;

use demog_dashboard::{BindingOutcome, Chart, Dashboard, DashboardConfig, PanelKind};
use demog_transform::DatasetError;
use tempfile::TempDir;

fn write_data_dir(dir: &Path) {
    fs::write(
        dir.join("SRC_stats_2012.csv"),
        "pool M,pool F,long-list M,long-list F,short-list M,short-list F,hire M,hire F\n\
         10,5,6,3,3,2,1,0\n\
         40,20,8,4,3,1,1,1\n\
         25,25,7,5,4,2,1,1\n",
    )
    .unwrap();

    let mut sec = String::from(
        "Level 1 Male,Level 1 Female,Level 2 Male,Level 2 Female,\
         Level 3 Male,Level 3 Female,Level 4 Male,Level 4 Female\n",
    );
    for row in 0..5 {
        sec.push_str(&format!("{},{},2,2,1,3,0,0\n", row + 1, 1));
    }
    fs::write(dir.join("Science_Evals_SEC.csv"), sec).unwrap();

    let mut staff = String::from("Year,Hire male,Hire female,Left male,Left female\n");
    for year in 1980..=2017 {
        staff.push_str(&format!("{year},3,2,1,1\n"));
    }
    fs::write(dir.join("Research_staff_stats.csv"), staff).unwrap();

    let mut spc = String::from(
        "Year,Renewal Male,Renewal Female,Promotion Male,Promotion Female,Cases Male,Cases Female\n",
    );
    for year in 2013..=2017 {
        spc.push_str(&format!("{year},4,3,2,1,6,4\n"));
    }
    fs::write(dir.join("Renewal_Promotion_SPC.csv"), spc).unwrap();

    fs::write(
        dir.join("Symposia.csv"),
        "Symposium,participants,participants female,invited,invited female,contributed,contributed female\n\
         Spring 2017,120,45,10,4,20,9\n\
         Fall 2017,80,30,8,3,12,6\n",
    )
    .unwrap();
}

fn assembled() -> (TempDir, Dashboard) {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());
    let config = DashboardConfig {
        data_dir: dir.path().to_path_buf(),
        ..DashboardConfig::default()
    };
    let dashboard = Dashboard::assemble(&config).unwrap();
    (dir, dashboard)
}

fn snapshot_charts(dashboard: &Dashboard) -> Vec<Chart> {
    dashboard.charts().cloned().collect()
}

#[test]
fn hiring_change_replaces_only_the_hiring_chart() {
    let (_dir, mut dashboard) = assembled();
    let before = snapshot_charts(&dashboard);
    let hiring_id = dashboard.panel(PanelKind::Hiring).chart().id();

    let outcome = dashboard
        .on_category_changed(PanelKind::Hiring, "hire")
        .unwrap();
    assert!(matches!(outcome, BindingOutcome::Updated { revision: 1, .. }));

    let after = snapshot_charts(&dashboard);
    for (old, new) in before.iter().zip(&after) {
        if old.id() == hiring_id {
            assert_ne!(old.series(), new.series());
        } else {
            assert_eq!(old, new, "{} changed", old.title());
        }
    }

    let hiring = dashboard.panel(PanelKind::Hiring).chart();
    assert_eq!(hiring.id(), hiring_id);
    assert_eq!(hiring.series().value_at("2012", "Male"), Some(1.0));
    assert_eq!(hiring.series().value_at("2012", "Female"), Some(0.0));
    assert_eq!(hiring.series().value_at("2016", "Non-Binary"), Some(0.0));
}

#[test]
fn invalid_stage_is_rejected_and_chart_kept() {
    let (_dir, mut dashboard) = assembled();
    let before = dashboard.panel(PanelKind::Hiring).chart().clone();

    let outcome = dashboard
        .on_category_changed(PanelKind::Hiring, "interview")
        .unwrap();

    match outcome {
        BindingOutcome::Rejected(DatasetError::InvalidCategory { key, .. }) => {
            assert_eq!(key, "interview");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(dashboard.panel(PanelKind::Hiring).chart(), &before);
}

#[test]
fn default_charts_are_rendered_at_assembly() {
    let (_dir, dashboard) = assembled();

    let hiring = dashboard.panel(PanelKind::Hiring).chart();
    assert_eq!(hiring.series().value_at("2012", "Male"), Some(10.0));
    assert_eq!(hiring.series().value_at("2012", "Female"), Some(5.0));
    assert_eq!(hiring.revision(), 0);

    let sec = dashboard.panel(PanelKind::SecEvals).chart();
    let male = sec.series().value_at("2013", "Male").unwrap();
    assert!((male - 0.5).abs() < 1e-9);

    let speakers = dashboard.panel(PanelKind::MeetingSpeakers).chart();
    assert_eq!(speakers.series().value_at("Fall 2017", "Male"), Some(50.0));

    let staff = dashboard.panel(PanelKind::StaffComp).chart();
    assert_eq!(staff.series().len(), 38 * 3);
}

#[test]
fn charts_export_as_json() {
    let (_dir, dashboard) = assembled();
    let chart = dashboard.panel(PanelKind::Hiring).chart();
    let json = serde_json::to_value(chart).unwrap();

    insta::assert_json_snapshot!(json["legend"], @r###"
    [
      {
        "color": "#c9d9d3",
        "label": "Male"
      },
      {
        "color": "#718dbf",
        "label": "Female"
      },
      {
        "color": "#e84d60",
        "label": "Non-Binary"
      }
    ]
    "###);
    assert_eq!(json["id"], 1);
    assert_eq!(json["series"]["labels"][0], serde_json::json!(["2012", "Male"]));
}
