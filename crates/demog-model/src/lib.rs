//! Data model types for the demographics dashboard.
//!
//! This crate defines the vocabulary shared by every other crate:
//!
//! - [`axis`]: the fixed secondary (gender) axis and primary-axis sources
//! - [`variant`]: the per-variant configuration table (whitelist, column rule,
//!   primary axis, defaults, source file)
//! - [`series`]: per-gender selections and the flattened nested-bar series
//! - [`palette`]: colours for the secondary axis and sample charts
//!
//! # Example
//!
//! ```
//! use demog_model::{Variant, ColumnRule};
//!
//! let spec = Variant::Hiring.spec();
//! assert!(spec.allows("pool"));
//! assert!(!spec.allows("bogus"));
//!
//! let columns = spec.column_rule.resolve("pool");
//! assert_eq!(columns.female, "pool F");
//! # let _ = ColumnRule::direct("{key} M", "{key} F");
//! ```

pub mod axis;
pub mod error;
pub mod palette;
pub mod series;
pub mod variant;

pub use axis::{Gender, PrimaryAxisSource, SECONDARY_AXIS, year_labels};
pub use error::ModelError;
pub use palette::{GENDER_PALETTE, Rgb, SAMPLE_PALETTE};
pub use series::{FlattenedSeries, Selection, interleave};
pub use variant::{ColumnRule, MaleSource, ResolvedColumns, Variant, VariantSpec};
