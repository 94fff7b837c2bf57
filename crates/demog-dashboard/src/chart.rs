//! Chart handles bound to flattened series.

use std::fmt;

use demog_model::{FlattenedSeries, Gender, Rgb};
use demog_transform::CategoryDataset;
use serde::Serialize;

use crate::error::Result;

/// Stable identity of a chart for the lifetime of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ChartId(u32);

impl ChartId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart-{}", self.0)
    }
}

/// One entry of the colour legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// A nested categorical bar chart.
///
/// `factors` are the outer groups and `legend` the inner members, each with
/// its bar colour. The bound `series` can be swapped in place with
/// [`Chart::replace_data`]; the id never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    id: ChartId,
    title: String,
    factors: Vec<String>,
    legend: Vec<LegendEntry>,
    ratio: bool,
    revision: u64,
    series: FlattenedSeries,
}

impl Chart {
    /// Build a chart with an explicit inner vocabulary.
    pub fn new(
        id: ChartId,
        title: impl Into<String>,
        factors: Vec<String>,
        legend: Vec<LegendEntry>,
        series: FlattenedSeries,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            factors,
            legend,
            ratio: false,
            revision: 0,
            series,
        }
    }

    /// Chart of a dataset's current selection, coloured by gender.
    pub fn from_dataset(id: ChartId, dataset: &CategoryDataset) -> Result<Self> {
        let series = dataset
            .flatten()
            .map_err(|e| crate::DashboardError::load(dataset.variant(), e))?;
        let mut chart = Self::new(
            id,
            dataset.spec().title,
            dataset.primary_axis().to_vec(),
            gender_legend(),
            series,
        );
        chart.ratio = dataset.is_ratio();
        Ok(chart)
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Outer group labels, in axis order.
    pub fn factors(&self) -> &[String] {
        &self.factors
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Whether the values are male/female fractions.
    pub fn is_ratio(&self) -> bool {
        self.ratio
    }

    /// Number of in-place data replacements so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn series(&self) -> &FlattenedSeries {
        &self.series
    }

    /// Colour of an inner-axis member, if it is in the legend.
    pub fn color_of(&self, member: &str) -> Option<Rgb> {
        self.legend
            .iter()
            .find(|entry| entry.label == member)
            .map(|entry| entry.color)
    }

    /// Upper bound of the value axis; at least 1.0 so empty charts still draw.
    pub fn value_ceiling(&self) -> f64 {
        if self.ratio {
            return 1.0;
        }
        self.series.max_value().max(1.0)
    }

    /// Overwrite the bound data in place and bump the revision.
    pub fn replace_data(&mut self, series: FlattenedSeries, ratio: bool) {
        self.series = series;
        self.ratio = ratio;
        self.revision += 1;
    }
}

/// Legend for the fixed gender axis.
pub fn gender_legend() -> Vec<LegendEntry> {
    Gender::ALL
        .iter()
        .map(|gender| LegendEntry {
            label: gender.label().to_string(),
            color: gender.color(),
        })
        .collect()
}
