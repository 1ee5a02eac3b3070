//! Range selection state machine.
//!
//! The picker's whole state lives in [`RangeState`]. User input arrives as
//! [`RangeEvent`]s and [`transition`] maps `(state, event)` to the next
//! state without touching the original, so the view can keep the old state
//! whenever an event is rejected.
//!
//! Weekend picks are rejected with [`RangeError::WeekendAnchor`]. Year and
//! month changes keep the day-of-month and let days past the end of the
//! target month roll forward (2024-01-31 moved to February is 2024-03-02).

mod error;
mod options;

pub use error::RangeError;
pub use options::{month_name, year_options, DEFAULT_YEAR_WINDOW, MONTH_NAMES};

use chrono::{Datelike, NaiveDate};

use crate::models::date_range::{DateRange, RangeReport, SelectionPhase};
use crate::services::weekend::{is_weekday, weekend_dates};
use crate::utils::date::{lookback_start, with_month_overflowing, with_year_overflowing};

/// Input the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEvent {
    /// A date picked in either date input.
    Select(NaiveDate),
    /// Year dropdown changed.
    SetYear(i32),
    /// Month dropdown changed (1-based).
    SetMonth(u32),
    /// "Last N Days" shortcut ending on `today`.
    LastDays { days: u32, today: NaiveDate },
    /// Drop both anchors.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeState {
    pub range: DateRange,
    /// Year shown in the year dropdown.
    pub selected_year: i32,
    /// Weekend dates inside `range`, ascending. Empty unless the range is complete.
    pub weekends: Vec<NaiveDate>,
}

impl RangeState {
    pub fn new(selected_year: i32) -> Self {
        Self {
            range: DateRange::default(),
            selected_year,
            weekends: Vec::new(),
        }
    }

    pub fn apply(&self, event: RangeEvent) -> Result<RangeState, RangeError> {
        transition(self, event)
    }

    pub fn phase(&self) -> SelectionPhase {
        self.range.phase()
    }

    /// Month shown in the month dropdown: the start anchor's, if any.
    pub fn selected_month(&self) -> Option<u32> {
        self.range.start.map(|start| start.month())
    }

    /// ISO snapshot of a complete range, with the weekends scanned afresh.
    pub fn report(&self) -> Option<RangeReport> {
        let (start, end) = self.range.bounds()?;
        Some(RangeReport::new(start, end, &weekend_dates(start, end)))
    }
}

/// Apply `event` to `state`, returning the next state.
pub fn transition(state: &RangeState, event: RangeEvent) -> Result<RangeState, RangeError> {
    match event {
        RangeEvent::Select(date) => select(state, date),
        RangeEvent::SetYear(year) => {
            let mut next = rebase(state, |date| with_year_overflowing(date, year))?;
            next.selected_year = year;
            Ok(next)
        }
        RangeEvent::SetMonth(month) => {
            if !(1..=12).contains(&month) {
                return Err(RangeError::InvalidMonth(month));
            }
            rebase(state, |date| with_month_overflowing(date, month))
        }
        RangeEvent::LastDays { days, today } => {
            if days == 0 {
                return Err(RangeError::InvalidLookback(days));
            }
            let start = lookback_start(today, days).ok_or(RangeError::DateOutOfRange)?;
            Ok(RangeState {
                range: DateRange::new(start, today),
                selected_year: state.selected_year,
                weekends: weekend_dates(start, today),
            })
        }
        RangeEvent::Clear => Ok(RangeState::new(state.selected_year)),
    }
}

fn select(state: &RangeState, date: NaiveDate) -> Result<RangeState, RangeError> {
    if !is_weekday(date) {
        return Err(RangeError::WeekendAnchor(date));
    }

    let mut next = state.clone();
    match (state.phase(), state.range.start) {
        (SelectionPhase::StartOnly, Some(start)) => {
            next.range.end = Some(date);
            next.weekends = weekend_dates(start, date);
        }
        _ => {
            next.range = DateRange::starting_at(date);
            next.weekends.clear();
        }
    }
    Ok(next)
}

/// Move every set anchor through `shift`, then rescan or clear the weekends.
fn rebase<F>(state: &RangeState, shift: F) -> Result<RangeState, RangeError>
where
    F: Fn(NaiveDate) -> Option<NaiveDate>,
{
    let shift_anchor = |anchor: Option<NaiveDate>| -> Result<Option<NaiveDate>, RangeError> {
        anchor
            .map(|date| shift(date).ok_or(RangeError::DateOutOfRange))
            .transpose()
    };

    let mut next = state.clone();
    match state.phase() {
        SelectionPhase::FullRange => {
            next.range.start = shift_anchor(state.range.start)?;
            next.range.end = shift_anchor(state.range.end)?;
            next.weekends = next
                .range
                .bounds()
                .map(|(start, end)| weekend_dates(start, end))
                .unwrap_or_default();
        }
        SelectionPhase::StartOnly => {
            next.range.start = shift_anchor(state.range.start)?;
            next.weekends.clear();
        }
        SelectionPhase::NoDatesSelected => {}
    }
    Ok(next)
}
