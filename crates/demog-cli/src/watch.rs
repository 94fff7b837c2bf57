//! Line-driven selection loop for the Hiring panel.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use demog_dashboard::{BindingOutcome, Dashboard, PanelKind};

use crate::render::chart_table;

/// Counters for one watch session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchSummary {
    pub updated: usize,
    pub rejected: usize,
}

/// Feed each non-blank input line to the Hiring binding.
///
/// Accepted stages reprint the Hiring chart; rejected ones print the error
/// and the loop continues. Ends at end of input.
pub fn watch<R, W>(dashboard: &mut Dashboard, input: R, out: &mut W) -> Result<WatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = WatchSummary::default();
    let binding = dashboard
        .panel(PanelKind::Hiring)
        .binding()
        .map(|binding| (binding.title(), binding.options().join(", ")));
    if let Some((title, options)) = binding {
        writeln!(out, "{title} ({options}); one per line, end input to stop")?;
    }

    for line in input.lines() {
        let line = line.context("read selection")?;
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        match dashboard.on_category_changed(PanelKind::Hiring, key)? {
            BindingOutcome::Updated { revision, .. } => {
                summary.updated += 1;
                let chart = dashboard.panel(PanelKind::Hiring).chart();
                writeln!(out, "{} [{}] {key} (revision {revision})", chart.title(), chart.id())?;
                writeln!(out, "{}", chart_table(chart))?;
            }
            BindingOutcome::Rejected(error) => {
                summary.rejected += 1;
                writeln!(out, "rejected: {error}")?;
            }
        }
    }
    Ok(summary)
}
