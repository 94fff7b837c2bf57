//! Sample chart for tabs without a data source yet.

use demog_model::{FlattenedSeries, SAMPLE_PALETTE, interleave};

use crate::chart::{Chart, ChartId, LegendEntry};

/// Outer groups of the sample chart.
pub const SAMPLE_CATEGORIES: [&str; 6] = [
    "Colloquium",
    "Hiring",
    "Workshops",
    "RIAs",
    "Grapes",
    "Strawberries",
];

/// Inner groups of the sample chart.
pub const SAMPLE_YEARS: [&str; 4] = ["2015", "2016", "2017", "2018"];

/// Sample counts per year, indexed by category.
static SAMPLE_COUNTS: [[f64; 6]; 4] = [
    [2.0, 1.0, 4.0, 3.0, 2.0, 4.0],
    [5.0, 3.0, 3.0, 2.0, 4.0, 6.0],
    [3.0, 2.0, 4.0, 4.0, 5.0, 3.0],
    [3.0, 1.0, 1.0, 3.0, 1.0, 3.0],
];

/// Sample series grouped by category, then year.
pub fn sample_series() -> FlattenedSeries {
    let columns = SAMPLE_COUNTS.each_ref().map(|counts| &counts[..]);
    interleave(&SAMPLE_CATEGORIES, &SAMPLE_YEARS, &columns)
}

/// Placeholder chart with one colour per sample year.
pub fn sample_chart(id: ChartId, title: &str) -> Chart {
    let legend = SAMPLE_YEARS
        .iter()
        .zip(SAMPLE_PALETTE)
        .map(|(year, color)| LegendEntry {
            label: (*year).to_string(),
            color,
        })
        .collect();
    let factors = SAMPLE_CATEGORIES.map(String::from).to_vec();
    Chart::new(id, title, factors, legend, sample_series())
}
