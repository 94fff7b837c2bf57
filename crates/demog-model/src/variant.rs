//! Dataset variant registry.
//!
//! Every dataset variant shares the same select/flatten contract and differs
//! only in its configuration: which category keys are allowed, how a key maps
//! to a male and a female column, where the primary-axis labels come from,
//! and which source file holds the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axis::{PrimaryAxisSource, year_labels};
use crate::error::ModelError;

/// Placeholder substituted with the category key in column templates.
const KEY_PLACEHOLDER: &str = "{key}";

/// The known dataset variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Hiring pipeline counts (pool, long-list, short-list, hire).
    Hiring,
    /// Science evaluation levels 1 to 4.
    ScienceEvaluation,
    /// Research staff hires and departures per year.
    ResearchStaff,
    /// Renewal and promotion review outcomes.
    RenewalPromotion,
    /// Symposium participation per named event.
    Symposium,
}

impl Variant {
    /// All variants in registry order.
    pub const ALL: [Variant; 5] = [
        Variant::Hiring,
        Variant::ScienceEvaluation,
        Variant::ResearchStaff,
        Variant::RenewalPromotion,
        Variant::Symposium,
    ];

    /// Machine name used in configuration files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hiring => "hiring",
            Self::ScienceEvaluation => "science-evaluation",
            Self::ResearchStaff => "research-staff",
            Self::RenewalPromotion => "renewal-promotion",
            Self::Symposium => "symposium",
        }
    }

    /// Full configuration for this variant.
    pub fn spec(self) -> VariantSpec {
        match self {
            Self::Hiring => VariantSpec {
                variant: self,
                title: "Hiring Pipeline",
                primary_axis: PrimaryAxisSource::Fixed(
                    ["2012", "2014", "2016"].map(String::from).to_vec(),
                ),
                categories: &["pool", "long-list", "short-list", "hire"],
                column_rule: ColumnRule::direct("{key} M", "{key} F"),
                default_key: "pool",
                ratio: false,
                file_name: "SRC_stats_2012.csv",
                selector_title: "Hiring Stage",
            },
            Self::ScienceEvaluation => VariantSpec {
                variant: self,
                title: "Science Evaluations",
                primary_axis: PrimaryAxisSource::Fixed(year_labels(2013, 2017)),
                categories: &["1", "2", "3", "4"],
                column_rule: ColumnRule::direct("Level {key} Male", "Level {key} Female"),
                default_key: "1",
                ratio: true,
                file_name: "Science_Evals_SEC.csv",
                selector_title: "Level",
            },
            Self::ResearchStaff => VariantSpec {
                variant: self,
                title: "Research Staff",
                primary_axis: PrimaryAxisSource::Fixed(year_labels(1980, 2017)),
                categories: &["Hire", "Left"],
                column_rule: ColumnRule::direct("{key} male", "{key} female"),
                default_key: "Hire",
                ratio: false,
                file_name: "Research_staff_stats.csv",
                selector_title: "Type",
            },
            Self::RenewalPromotion => VariantSpec {
                variant: self,
                title: "Renewals and Promotions",
                primary_axis: PrimaryAxisSource::Fixed(year_labels(2013, 2017)),
                categories: &["Renewal", "Promotion", "Cases"],
                column_rule: ColumnRule::direct("{key} Male", "{key} Female"),
                default_key: "Cases",
                ratio: false,
                file_name: "Renewal_Promotion_SPC.csv",
                selector_title: "Type",
            },
            Self::Symposium => VariantSpec {
                variant: self,
                title: "Symposium Speakers",
                primary_axis: PrimaryAxisSource::LabelColumn("Symposium"),
                categories: &["participants", "invited", "contributed"],
                column_rule: ColumnRule::derived("{key}", "{key} female"),
                default_key: "participants",
                ratio: false,
                file_name: "Symposia.csv",
                selector_title: "Speakers",
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == s.trim())
            .ok_or_else(|| ModelError::UnknownVariant {
                name: s.to_string(),
                expected: Variant::ALL.map(Variant::name).join(", "),
            })
    }
}

/// Configuration row for one dataset variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSpec {
    pub variant: Variant,
    /// Human-readable chart title.
    pub title: &'static str,
    pub primary_axis: PrimaryAxisSource,
    /// Whitelisted category keys, in dropdown order.
    pub categories: &'static [&'static str],
    pub column_rule: ColumnRule,
    /// Key selected when the dataset is constructed.
    pub default_key: &'static str,
    /// Whether this variant's charts show male/female fractions instead of counts.
    pub ratio: bool,
    /// Source file name inside the data directory.
    pub file_name: &'static str,
    /// Title of the category dropdown.
    pub selector_title: &'static str,
}

impl VariantSpec {
    /// Returns true if `key` is in this variant's whitelist.
    pub fn allows(&self, key: &str) -> bool {
        self.categories.contains(&key)
    }

    /// Whitelist joined for error messages.
    pub fn allowed_keys(&self) -> String {
        self.categories.join(", ")
    }
}

/// How the male count is obtained from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaleSource {
    /// Read directly from a column.
    Column(String),
    /// Derived as `total - female` from a total-count column.
    TotalMinusFemale { total: String },
}

/// Column-name templates for one variant; `{key}` is replaced by the category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    pub male: MaleSource,
    pub female: String,
}

impl ColumnRule {
    /// Male and female counts are stored in separate columns.
    pub fn direct(male: &str, female: &str) -> Self {
        Self {
            male: MaleSource::Column(male.to_string()),
            female: female.to_string(),
        }
    }

    /// The table stores a total count and a female sub-count.
    pub fn derived(total: &str, female: &str) -> Self {
        Self {
            male: MaleSource::TotalMinusFemale {
                total: total.to_string(),
            },
            female: female.to_string(),
        }
    }

    /// Substitute `key` into the templates.
    pub fn resolve(&self, key: &str) -> ResolvedColumns {
        let male = match &self.male {
            MaleSource::Column(template) => MaleSource::Column(fill(template, key)),
            MaleSource::TotalMinusFemale { total } => MaleSource::TotalMinusFemale {
                total: fill(total, key),
            },
        };
        ResolvedColumns {
            male,
            female: fill(&self.female, key),
        }
    }
}

/// Concrete column names for one category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub male: MaleSource,
    pub female: String,
}

impl ResolvedColumns {
    /// Every column the table must contain for this key.
    pub fn required(&self) -> [&str; 2] {
        let male = match &self.male {
            MaleSource::Column(name) => name.as_str(),
            MaleSource::TotalMinusFemale { total } => total.as_str(),
        };
        [male, self.female.as_str()]
    }
}

fn fill(template: &str, key: &str) -> String {
    template.replace(KEY_PLACEHOLDER, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiring_columns() {
        let spec = Variant::Hiring.spec();
        let columns = spec.column_rule.resolve("long-list");
        assert_eq!(columns.male, MaleSource::Column("long-list M".to_string()));
        assert_eq!(columns.female, "long-list F");
    }

    #[test]
    fn test_science_columns() {
        let columns = Variant::ScienceEvaluation.spec().column_rule.resolve("3");
        assert_eq!(columns.required(), ["Level 3 Male", "Level 3 Female"]);
    }

    #[test]
    fn test_symposium_columns_are_derived() {
        let columns = Variant::Symposium.spec().column_rule.resolve("invited");
        assert_eq!(
            columns.male,
            MaleSource::TotalMinusFemale {
                total: "invited".to_string()
            }
        );
        assert_eq!(columns.female, "invited female");
    }

    #[test]
    fn test_default_key_is_whitelisted() {
        for variant in Variant::ALL {
            let spec = variant.spec();
            assert!(spec.allows(spec.default_key), "{variant}");
        }
    }

    #[test]
    fn test_whitelist_is_case_sensitive() {
        let spec = Variant::ResearchStaff.spec();
        assert!(spec.allows("Hire"));
        assert!(!spec.allows("hire"));
    }

    #[test]
    fn test_variant_name_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
        let err = "colloquium".parse::<Variant>().unwrap_err();
        assert!(err.to_string().contains("science-evaluation"));
    }

    #[test]
    fn test_variant_serde_matches_name() {
        let json = serde_json::to_string(&Variant::RenewalPromotion).unwrap();
        assert_eq!(json, "\"renewal-promotion\"");
    }

    #[test]
    fn test_fixed_primary_axes() {
        let lengths: Vec<Option<usize>> = Variant::ALL
            .iter()
            .map(|v| match v.spec().primary_axis {
                PrimaryAxisSource::Fixed(labels) => Some(labels.len()),
                PrimaryAxisSource::LabelColumn(_) => None,
            })
            .collect();
        assert_eq!(lengths, vec![Some(3), Some(5), Some(38), Some(5), None]);
    }
}
