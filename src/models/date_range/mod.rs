// Date range model
// The pair of anchors the picker is building and the report handed out for it

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::format_iso;

/// Which anchors of a [`DateRange`] have been chosen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    NoDatesSelected,
    StartOnly,
    FullRange,
}

/// Start and end anchors of the range being picked. Either may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn starting_at(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.start, self.end) {
            (Some(_), Some(_)) => SelectionPhase::FullRange,
            (Some(_), None) => SelectionPhase::StartOnly,
            // An end without a start only arises from a hand-built value;
            // the next pick treats it like an empty range.
            (None, _) => SelectionPhase::NoDatesSelected,
        }
    }

    /// Both anchors, when the range is complete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    pub fn is_ordered(&self) -> bool {
        self.bounds().map_or(true, |(start, end)| start <= end)
    }
}

/// Snapshot of a complete selection in ISO text, as returned by
/// "Get Selected Range".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeReport {
    pub range: [String; 2],
    pub weekends: Vec<String>,
}

impl RangeReport {
    pub fn new(start: NaiveDate, end: NaiveDate, weekends: &[NaiveDate]) -> Self {
        Self {
            range: [format_iso(start), format_iso(end)],
            weekends: weekends.iter().copied().map(format_iso).collect(),
        }
    }

    /// "Selected Date Range: A to B" line shown under the form.
    pub fn range_label(&self) -> String {
        format!("{} to {}", self.range[0], self.range[1])
    }

    pub fn weekends_label(&self) -> String {
        self.weekends.join(", ")
    }
}
