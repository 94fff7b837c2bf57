//! Tab panels.

use std::fmt;
use std::str::FromStr;

use demog_model::Variant;
use demog_transform::CategoryDataset;
use serde::Serialize;

use crate::binding::{BindingOutcome, CategoryBinding};
use crate::chart::{Chart, ChartId};
use crate::error::{DashboardError, Result};

/// Dashboard tabs, in display order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PanelKind {
    #[default]
    Colloquium,
    Hiring,
    SecEvals,
    SpcReviews,
    IsrAuthors,
    StaffComp,
    MeetingSpeakers,
}

impl PanelKind {
    /// All tabs in order.
    pub const ALL: [PanelKind; 7] = [
        Self::Colloquium,
        Self::Hiring,
        Self::SecEvals,
        Self::SpcReviews,
        Self::IsrAuthors,
        Self::StaffComp,
        Self::MeetingSpeakers,
    ];

    /// Tab title
    pub const fn label(self) -> &'static str {
        match self {
            Self::Colloquium => "Colloquium",
            Self::Hiring => "Hiring",
            Self::SecEvals => "SEC Evals",
            Self::SpcReviews => "SPC Reviews",
            Self::IsrAuthors => "ISR Authors",
            Self::StaffComp => "Staff Comp",
            Self::MeetingSpeakers => "Meeting Speakers",
        }
    }

    /// Command-line name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Colloquium => "colloquium",
            Self::Hiring => "hiring",
            Self::SecEvals => "sec-evals",
            Self::SpcReviews => "spc-reviews",
            Self::IsrAuthors => "isr-authors",
            Self::StaffComp => "staff-comp",
            Self::MeetingSpeakers => "meeting-speakers",
        }
    }

    /// Dataset variant behind the tab; `None` for placeholder tabs.
    pub const fn variant(self) -> Option<Variant> {
        match self {
            Self::Hiring => Some(Variant::Hiring),
            Self::SecEvals => Some(Variant::ScienceEvaluation),
            Self::SpcReviews => Some(Variant::RenewalPromotion),
            Self::StaffComp => Some(Variant::ResearchStaff),
            Self::MeetingSpeakers => Some(Variant::Symposium),
            Self::Colloquium | Self::IsrAuthors => None,
        }
    }

    /// Whether the tab carries a category dropdown.
    pub const fn is_reactive(self) -> bool {
        matches!(self, Self::Hiring)
    }

    /// Position in [`PanelKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PanelKind {
    type Err = DashboardError;

    /// Accepts the command-line name or the tab title, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted) || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DashboardError::UnknownPanel {
                name: s.to_string(),
                expected: Self::ALL.map(PanelKind::name).join(", "),
            })
    }
}

/// One tab: a chart, plus the dataset and selector when data-backed.
#[derive(Debug, Clone)]
pub struct Panel {
    kind: PanelKind,
    chart: Chart,
    dataset: Option<CategoryDataset>,
    binding: Option<CategoryBinding>,
}

impl Panel {
    /// Panel rendered from built-in sample data.
    pub fn placeholder(kind: PanelKind, chart: Chart) -> Self {
        Self {
            kind,
            chart,
            dataset: None,
            binding: None,
        }
    }

    /// Panel backed by a dataset; the chart shows its current selection.
    pub fn with_dataset(
        kind: PanelKind,
        id: ChartId,
        dataset: CategoryDataset,
        binding: Option<CategoryBinding>,
    ) -> Result<Self> {
        let chart = Chart::from_dataset(id, &dataset)?;
        Ok(Self {
            kind,
            chart,
            dataset: Some(dataset),
            binding,
        })
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn dataset(&self) -> Option<&CategoryDataset> {
        self.dataset.as_ref()
    }

    pub fn binding(&self) -> Option<&CategoryBinding> {
        self.binding.as_ref()
    }

    /// Route a dropdown change through the panel's binding.
    pub fn on_category_changed(&mut self, key: &str) -> Result<BindingOutcome> {
        match (&self.binding, &mut self.dataset) {
            (Some(binding), Some(dataset)) => Ok(binding.apply(dataset, &mut self.chart, key)),
            _ => Err(DashboardError::NotReactive { panel: self.kind }),
        }
    }

    /// A detached chart for `key` without touching the panel's state.
    ///
    /// Placeholder panels have no categories and return `NotReactive`.
    pub fn preview(&self, key: &str, ratio: bool) -> Result<Chart> {
        let Some(dataset) = &self.dataset else {
            return Err(DashboardError::NotReactive { panel: self.kind });
        };
        let mut scratch = dataset.clone();
        scratch
            .select(key, ratio)
            .map_err(|source| DashboardError::Category {
                panel: self.kind,
                source,
            })?;
        Chart::from_dataset(self.chart.id(), &scratch)
    }
}
