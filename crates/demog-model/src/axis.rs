//! Chart axes.
//!
//! The secondary axis is the same for every chart: three gender categories in
//! a fixed order. The primary axis is either a fixed list of labels (years) or
//! read from a label column of the source table (named events).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Secondary-axis vocabulary, in display order.
pub const SECONDARY_AXIS: [&str; 3] = ["Male", "Female", "Non-Binary"];

/// A member of the secondary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-Binary")]
    NonBinary,
}

impl Gender {
    /// All members in secondary-axis order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];

    /// Display label, matching [`SECONDARY_AXIS`].
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => SECONDARY_AXIS[0],
            Self::Female => SECONDARY_AXIS[1],
            Self::NonBinary => SECONDARY_AXIS[2],
        }
    }

    /// Position on the secondary axis.
    pub const fn index(self) -> usize {
        match self {
            Self::Male => 0,
            Self::Female => 1,
            Self::NonBinary => 2,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownGender {
                label: s.to_string(),
            })
    }
}

/// Where a variant's primary-axis labels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryAxisSource {
    /// Labels fixed by the variant definition.
    Fixed(Vec<String>),
    /// Labels read from a text column of the loaded table.
    LabelColumn(&'static str),
}

/// Year labels for an inclusive range, e.g. `2013..=2017`.
pub fn year_labels(first: u16, last: u16) -> Vec<String> {
    (first..=last).map(|year| year.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_order_matches_axis() {
        let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(labels, SECONDARY_AXIS);
        for (idx, gender) in Gender::ALL.iter().enumerate() {
            assert_eq!(gender.index(), idx);
        }
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" Non-Binary ".parse::<Gender>(), Ok(Gender::NonBinary));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_year_labels() {
        assert_eq!(year_labels(2013, 2015), vec!["2013", "2014", "2015"]);
        assert_eq!(year_labels(1980, 2017).len(), 38);
    }

    #[test]
    fn test_gender_serde_label() {
        let json = serde_json::to_string(&Gender::NonBinary).unwrap();
        assert_eq!(json, "\"Non-Binary\"");
    }
}
