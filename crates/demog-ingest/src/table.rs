//! Loaded source tables.

use std::path::{Path, PathBuf};

use polars::prelude::{Column, DataFrame, DataType};

use crate::error::{IngestError, Result};
use crate::values::{any_to_f64, format_numeric};

/// Values of a single table column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Counts or scores.
    Numeric(Vec<f64>),
    /// Free-text labels such as event names.
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(values: Vec<&str>) -> Self {
        Self::Text(values.into_iter().map(String::from).collect())
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub name: String,
    pub data: ColumnData,
}

/// Immutable column-oriented table; every column has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    source: Option<PathBuf>,
    columns: Vec<TableColumn>,
    height: usize,
}

impl Table {
    /// Build a table from in-memory columns.
    ///
    /// Fails if two columns share a name or the columns differ in length.
    pub fn from_columns<N, D, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        D: Into<ColumnData>,
        I: IntoIterator<Item = (N, D)>,
    {
        let columns: Vec<TableColumn> = columns
            .into_iter()
            .map(|(name, data)| TableColumn {
                name: name.into(),
                data: data.into(),
            })
            .collect();
        Self::build(None, columns)
    }

    /// Convert a Polars DataFrame, keeping string columns as text.
    pub fn from_dataframe(df: &DataFrame, source: Option<&Path>) -> Result<Self> {
        let mut columns = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let name = normalize_name(column.name());
            let data = if matches!(column.dtype(), DataType::String) {
                ColumnData::Text(text_values(column)?)
            } else {
                ColumnData::Numeric(numeric_values(column, &name)?)
            };
            columns.push(TableColumn { name, data });
        }
        Self::build(source.map(Path::to_path_buf), columns)
    }

    fn build(source: Option<PathBuf>, columns: Vec<TableColumn>) -> Result<Self> {
        let height = columns.first().map_or(0, |column| column.data.len());
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|prior| prior.name == column.name) {
                return Err(IngestError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
            if column.data.len() != height {
                return Err(IngestError::LengthMismatch {
                    column: column.name.clone(),
                    expected: height,
                    actual: column.data.len(),
                });
            }
        }
        Ok(Self {
            source,
            columns,
            height,
        })
    }

    /// File the table was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names in file order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Numeric values of a column.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match self.column(name).map(|column| &column.data) {
            Some(ColumnData::Numeric(values)) => Ok(values),
            Some(ColumnData::Text(_)) => Err(IngestError::NotNumeric {
                column: name.to_string(),
            }),
            None => Err(IngestError::ColumnNotFound {
                column: name.to_string(),
            }),
        }
    }

    /// Values of a column rendered as labels; numbers are formatted without trailing zeros.
    pub fn labels(&self, name: &str) -> Result<Vec<String>> {
        match self.column(name).map(|column| &column.data) {
            Some(ColumnData::Text(values)) => Ok(values.clone()),
            Some(ColumnData::Numeric(values)) => {
                Ok(values.iter().copied().map(format_numeric).collect())
            }
            None => Err(IngestError::ColumnNotFound {
                column: name.to_string(),
            }),
        }
    }
}

fn normalize_name(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn text_values(column: &Column) -> Result<Vec<String>> {
    let chunked = column.str()?;
    Ok(chunked
        .iter()
        .map(|value| value.map(|v| v.trim().to_string()).unwrap_or_default())
        .collect())
}

fn numeric_values(column: &Column, name: &str) -> Result<Vec<f64>> {
    (0..column.len())
        .map(|idx| {
            let value = column.get(idx)?;
            any_to_f64(value)
                .filter(|v| v.is_finite())
                .ok_or_else(|| IngestError::InvalidNumber {
                column: name.to_string(),
                row: idx + 1,
            })
        })
        .collect()
}
