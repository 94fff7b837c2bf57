//! Terminal tables for charts, panels, and check results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use demog_dashboard::{Chart, PanelKind};
use demog_ingest::format_numeric;

/// Outcome of loading one data-backed panel.
#[derive(Debug, Clone)]
pub struct CheckRow {
    pub panel: PanelKind,
    pub file: String,
    pub rows: Option<usize>,
    pub error: Option<String>,
}

impl CheckRow {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Chart as a grid: one row per outer group, one column per legend entry.
pub fn chart_table(chart: &Chart) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(
        chart
            .legend()
            .iter()
            .map(|entry| header_cell(&entry.label).fg(legend_color(entry.color))),
    );
    table.set_header(header);
    apply_table_style(&mut table);

    let series = chart.series();
    for factor in chart.factors() {
        let mut row = vec![Cell::new(factor).add_attribute(Attribute::Bold)];
        for entry in chart.legend() {
            let cell = match series.value_at(factor, &entry.label) {
                Some(value) => Cell::new(format_value(value, chart.is_ratio())),
                None => dim_cell("-"),
            };
            row.push(cell);
        }
        table.add_row(row);
    }
    for index in 1..=chart.legend().len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

/// Print a chart with its title.
pub fn print_chart(chart: &Chart) {
    let unit = if chart.is_ratio() { " (fraction)" } else { "" };
    println!("{} [{}]{unit}", chart.title(), chart.id());
    println!("{}", chart_table(chart));
}

/// Tab listing with dataset details.
pub fn panels_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tab"),
        header_cell("Name"),
        header_cell("Dataset"),
        header_cell("Categories"),
        header_cell("Default"),
        header_cell("Ratio"),
    ]);
    apply_table_style(&mut table);
    for kind in PanelKind::ALL {
        match kind.variant() {
            Some(variant) => {
                let spec = variant.spec();
                let categories = if kind.is_reactive() {
                    format!("{}: {}", spec.selector_title, spec.allowed_keys())
                } else {
                    spec.allowed_keys()
                };
                table.add_row(vec![
                    Cell::new(kind.label()).add_attribute(Attribute::Bold),
                    Cell::new(kind.name()),
                    Cell::new(spec.file_name),
                    Cell::new(categories),
                    Cell::new(spec.default_key),
                    Cell::new(if spec.ratio { "yes" } else { "no" }),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new(kind.label()).add_attribute(Attribute::Bold),
                    Cell::new(kind.name()),
                    dim_cell("sample data"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                ]);
            }
        }
    }
    table
}

/// Per-panel load status.
pub fn check_table(rows: &[CheckRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tab"),
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        let status = match &row.error {
            None => Cell::new("ok").fg(Color::Green).add_attribute(Attribute::Bold),
            Some(message) => Cell::new(message).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(row.panel.label()),
            Cell::new(&row.file),
            row.rows.map_or_else(|| dim_cell("-"), Cell::new),
            status,
        ]);
    }
    table
}

/// Counts without trailing zeros; fractions to four decimals.
pub fn format_value(value: f64, ratio: bool) -> String {
    if ratio {
        format!("{value:.4}")
    } else {
        format_numeric(value)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn legend_color(color: demog_model::Rgb) -> Color {
    Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demog_dashboard::ChartId;
    use demog_dashboard::placeholder::sample_chart;

    fn plain(table: &mut Table) -> String {
        table.force_no_tty();
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
        table.to_string()
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(12.0, false), "12");
        assert_eq!(format_value(2.0 / 3.0, true), "0.6667");
        assert_eq!(format_value(0.0, true), "0.0000");
    }

    #[test]
    fn test_chart_table_rows() {
        let chart = sample_chart(ChartId::new(0), "Colloquium");
        let mut table = chart_table(&chart);
        assert_eq!(table.row_iter().count(), 6);
        let text = plain(&mut table);
        assert!(text.contains("Strawberries"));
        assert!(text.contains("2018"));
    }

    #[test]
    fn test_panels_table_lists_every_tab() {
        let mut table = panels_table();
        assert_eq!(table.row_iter().count(), PanelKind::ALL.len());
        let text = plain(&mut table);
        assert!(text.contains("Hiring Stage: pool, long-list, short-list, hire"));
        assert!(text.contains("Symposia.csv"));
    }

    #[test]
    fn test_check_table_status() {
        let rows = vec![
            CheckRow {
                panel: PanelKind::Hiring,
                file: "SRC_stats_2012.csv".to_string(),
                rows: Some(3),
                error: None,
            },
            CheckRow {
                panel: PanelKind::StaffComp,
                file: "Research_staff_stats.csv".to_string(),
                rows: None,
                error: Some("CSV file not found".to_string()),
            },
        ];
        assert!(rows[0].is_ok());
        assert!(!rows[1].is_ok());
        let text = plain(&mut check_table(&rows));
        assert!(text.contains("ok"));
        assert!(text.contains("CSV file not found"));
    }
}
