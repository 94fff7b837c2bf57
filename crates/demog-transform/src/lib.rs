//! Demographic data reshaping.
//!
//! Turns a loaded [`Table`](demog_ingest::Table) into the series a nested
//! categorical bar chart consumes.
//!
//! # Overview
//!
//! - **Selection**: pick the male and female columns for a whitelisted
//!   category key; Non-Binary is zero-filled
//! - **Ratio transform**: optionally convert counts to fractions of the
//!   male + female total
//! - **Flattening**: interleave the three per-gender columns into one
//!   row-major sequence with `(primary, secondary)` labels
//!
//! # Example
//!
//! ```ignore
//! use demog_model::Variant;
//! use demog_transform::CategoryDataset;
//!
//! let table = demog_ingest::read_table(path)?;
//! let mut dataset = CategoryDataset::new(Variant::Hiring, table)?;
//! dataset.select("hire", false)?;
//! let series = dataset.flatten()?;
//! ```
//!
//! # Design Principles
//!
//! - **Fail loudly**: invalid keys are errors, never sentinel values
//! - **Validated up front**: every whitelisted key is checked against the
//!   table's columns when the dataset is built
//! - **Atomic selection**: a failed `select` leaves the previous selection intact

mod dataset;
mod error;
mod ratio;
mod validate;

pub use dataset::CategoryDataset;
pub use error::{DatasetError, Result};
pub use ratio::{apply_ratio, ratio_pair};
pub use validate::{resolve_primary_axis, validate_columns};
