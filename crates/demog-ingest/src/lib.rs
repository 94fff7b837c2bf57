//! Demographic table ingestion.
//!
//! This crate reads the dashboard's delimited source files into [`Table`]s:
//! an immutable mapping from column name to an ordered sequence of numbers,
//! with non-numeric columns kept as label columns.
//!
//! # Features
//!
//! - **CSV Loading**: Read single-header CSV files through Polars
//! - **Pre-flight checks**: File existence, size, and encoding validation
//! - **Numeric conversion**: Polars `AnyValue`s converted to `f64` with
//!   per-cell errors for empty or unparseable values
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use demog_ingest::read_table;
//!
//! let table = read_table(Path::new("data/SRC_stats_2012.csv"))?;
//! let pool_male = table.numeric("pool M")?;
//! ```

mod csv;
mod error;
mod table;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_header, read_table,
    validate_encoding,
};

// === Tables ===
pub use table::{ColumnData, Table, TableColumn};

// === Value Conversion ===
pub use values::{any_to_f64, format_numeric, parse_f64};
