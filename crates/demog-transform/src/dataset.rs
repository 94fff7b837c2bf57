//! Category datasets: select, ratio, flatten.

use demog_ingest::Table;
use demog_model::{
    FlattenedSeries, MaleSource, SECONDARY_AXIS, Selection, Variant, VariantSpec,
};
use tracing::debug;

use crate::error::{DatasetError, Result};
use crate::ratio::apply_ratio;
use crate::validate::{resolve_primary_axis, validate_columns};

/// A loaded table bound to one variant's configuration.
///
/// Holds the most recent selection; `flatten` reads it.
#[derive(Debug, Clone)]
pub struct CategoryDataset {
    spec: VariantSpec,
    table: Table,
    primary_axis: Vec<String>,
    current: Option<Current>,
}

#[derive(Debug, Clone)]
struct Current {
    key: String,
    ratio: bool,
    selection: Selection,
}

impl CategoryDataset {
    /// Validate `table` against the variant and select its default key.
    pub fn new(variant: Variant, table: Table) -> Result<Self> {
        let spec = variant.spec();
        let default_key = spec.default_key;
        let ratio = spec.ratio;
        let mut dataset = Self::load(spec, table)?;
        dataset.select(default_key, ratio)?;
        Ok(dataset)
    }

    /// Validate `table` against `spec` without selecting anything.
    pub fn load(spec: VariantSpec, table: Table) -> Result<Self> {
        let primary_axis = resolve_primary_axis(&spec, &table)?;
        validate_columns(&spec, &table)?;
        debug!(
            variant = %spec.variant,
            rows = table.height(),
            "dataset validated"
        );
        Ok(Self {
            spec,
            table,
            primary_axis,
            current: None,
        })
    }

    pub fn variant(&self) -> Variant {
        self.spec.variant
    }

    pub fn spec(&self) -> &VariantSpec {
        &self.spec
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Outer grouping labels.
    pub fn primary_axis(&self) -> &[String] {
        &self.primary_axis
    }

    /// Inner grouping labels, always the three gender categories.
    pub fn secondary_axis(&self) -> &'static [&'static str; 3] {
        &SECONDARY_AXIS
    }

    /// Key of the current selection.
    pub fn current_key(&self) -> Option<&str> {
        self.current.as_ref().map(|current| current.key.as_str())
    }

    /// Whether the current selection holds ratios.
    pub fn is_ratio(&self) -> bool {
        self.current.as_ref().is_some_and(|current| current.ratio)
    }

    pub fn current_selection(&self) -> Option<&Selection> {
        self.current.as_ref().map(|current| &current.selection)
    }

    /// Extract the columns for `key`, optionally as male/female fractions.
    ///
    /// Replaces the current selection only on success.
    pub fn select(&mut self, key: &str, ratio: bool) -> Result<&Selection> {
        if !self.spec.allows(key) {
            return Err(DatasetError::InvalidCategory {
                variant: self.spec.variant,
                key: key.to_string(),
                allowed: self.spec.allowed_keys(),
            });
        }

        let mut selection = self.extract(key)?;
        if ratio {
            apply_ratio(&mut selection);
        }
        debug!(variant = %self.spec.variant, key, ratio, "category selected");

        let current = self.current.insert(Current {
            key: key.to_string(),
            ratio,
            selection,
        });
        Ok(&current.selection)
    }

    /// Interleave the current selection into a nested-bar series.
    pub fn flatten(&self) -> Result<FlattenedSeries> {
        let current = self.current.as_ref().ok_or(DatasetError::NotSelected {
            variant: self.spec.variant,
        })?;
        Ok(FlattenedSeries::from_selection(
            &self.primary_axis,
            &current.selection,
        ))
    }

    fn extract(&self, key: &str) -> Result<Selection> {
        let columns = self.spec.column_rule.resolve(key);
        let female = self.column(key, &columns.female)?.to_vec();
        let male = match &columns.male {
            MaleSource::Column(name) => self.column(key, name)?.to_vec(),
            MaleSource::TotalMinusFemale { total } => self
                .column(key, total)?
                .iter()
                .zip(&female)
                .map(|(total, female)| total - female)
                .collect(),
        };
        Ok(Selection::from_counts(male, female))
    }

    fn column(&self, key: &str, name: &str) -> Result<&[f64]> {
        if !self.table.has_column(name) {
            return Err(DatasetError::MissingColumn {
                variant: self.spec.variant,
                key: key.to_string(),
                column: name.to_string(),
            });
        }
        Ok(self.table.numeric(name)?)
    }
}
