//! Selections and flattened nested-bar series.

use serde::{Deserialize, Serialize};

use crate::axis::{Gender, SECONDARY_AXIS};

/// Per-gender numeric columns for one category key.
///
/// Always carries all three secondary-axis members; Non-Binary is zero-filled
/// when the source has no column for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub male: Vec<f64>,
    pub female: Vec<f64>,
    pub non_binary: Vec<f64>,
}

impl Selection {
    /// Build a selection from male and female columns with a zero Non-Binary column.
    pub fn from_counts(male: Vec<f64>, female: Vec<f64>) -> Self {
        let non_binary = vec![0.0; male.len()];
        Self {
            male,
            female,
            non_binary,
        }
    }

    /// Values for one secondary-axis member.
    pub fn get(&self, gender: Gender) -> &[f64] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::NonBinary => &self.non_binary,
        }
    }

    /// Number of primary-axis positions.
    pub fn len(&self) -> usize {
        self.male.len()
    }

    /// Returns true if the selection has no primary-axis positions.
    pub fn is_empty(&self) -> bool {
        self.male.is_empty()
    }
}

/// Nested categorical series: one value per `(primary, secondary)` label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlattenedSeries {
    /// Composite labels in row-major order.
    pub labels: Vec<(String, String)>,
    /// Values aligned 1:1 with `labels`.
    pub values: Vec<f64>,
}

impl FlattenedSeries {
    /// Interleave a selection against a primary axis and the fixed gender axis.
    pub fn from_selection<S: AsRef<str>>(primary: &[S], selection: &Selection) -> Self {
        let columns = Gender::ALL.map(|gender| selection.get(gender));
        interleave(primary, &SECONDARY_AXIS, &columns)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(primary, secondary, value)` triples in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|((primary, secondary), value)| (primary.as_str(), secondary.as_str(), *value))
    }

    /// Value at a composite label, if present.
    pub fn value_at(&self, primary: &str, secondary: &str) -> Option<f64> {
        self.iter()
            .find(|(p, s, _)| *p == primary && *s == secondary)
            .map(|(_, _, value)| value)
    }

    /// Distinct primary labels in first-seen order.
    pub fn primary_labels(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for (primary, _) in &self.labels {
            if !seen.contains(&primary.as_str()) {
                seen.push(primary.as_str());
            }
        }
        seen
    }

    /// Largest value, or 0.0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Interleave aligned columns into a row-major nested series.
///
/// `columns[j]` holds the values for `secondary[j]` indexed by primary
/// position. The value at flattened index `secondary.len() * i + j` is
/// `columns[j][i]`; positions a column does not cover read as zero.
pub fn interleave<P, S>(primary: &[P], secondary: &[S], columns: &[&[f64]]) -> FlattenedSeries
where
    P: AsRef<str>,
    S: AsRef<str>,
{
    let capacity = primary.len() * secondary.len();
    let mut labels = Vec::with_capacity(capacity);
    let mut values = Vec::with_capacity(capacity);
    for (i, outer) in primary.iter().enumerate() {
        for (j, inner) in secondary.iter().enumerate() {
            labels.push((outer.as_ref().to_string(), inner.as_ref().to_string()));
            let value = columns
                .get(j)
                .and_then(|column| column.get(i))
                .copied()
                .unwrap_or_default();
            values.push(value);
        }
    }
    FlattenedSeries { labels, values }
}
