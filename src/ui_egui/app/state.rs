use crate::models::date_range::RangeReport;
use crate::services::range::{RangeError, RangeEvent, RangeState};
use crate::utils::date::{format_iso, parse_iso, Clock};
use chrono::{Datelike, NaiveDate};

/// Edit buffers behind one date input: the calendar button and its ISO text box
pub struct DateInputState {
    /// Date shown by the calendar popup; `fallback` when the anchor is unset
    pub picker_date: NaiveDate,
    /// Text typed by the user, committed on Enter or focus loss
    pub text: String,
    /// Set once `text` has been edited since the last reset
    pub dirty: bool,
}

impl DateInputState {
    pub fn new(value: Option<NaiveDate>, fallback: NaiveDate) -> Self {
        let mut input = Self {
            picker_date: fallback,
            text: String::new(),
            dirty: false,
        };
        input.reset(value, fallback);
        input
    }

    /// Discard pending edits and show `value` again
    pub fn reset(&mut self, value: Option<NaiveDate>, fallback: NaiveDate) {
        self.picker_date = value.unwrap_or(fallback);
        self.text = value.map(format_iso).unwrap_or_default();
        self.dirty = false;
    }

    pub fn parsed_text(&self) -> Option<NaiveDate> {
        parse_iso(&self.text)
    }
}

pub struct AppState {
    pub range: RangeState,
    pub start_input: DateInputState,
    pub end_input: DateInputState,
    /// Last "Get Selected Range" result; dropped whenever the range moves
    pub report: Option<RangeReport>,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            range: RangeState::new(today.year()),
            start_input: DateInputState::new(None, today),
            end_input: DateInputState::new(None, today),
            report: None,
        }
    }

    /// Run `event` through the state machine.
    ///
    /// A rejected event keeps the range and the report. Either way both
    /// inputs are reset to the anchors held afterwards.
    pub fn apply(&mut self, event: RangeEvent, clock: &dyn Clock) -> Result<(), RangeError> {
        let result = self.range.apply(event).map(|next| {
            if next.range != self.range.range {
                self.report = None;
            }
            self.range = next;
        });
        self.sync_inputs(clock.today());
        result
    }

    /// "Last N Days" ending on the clock's today
    pub fn apply_last_days(&mut self, days: u32, clock: &dyn Clock) -> Result<(), RangeError> {
        let today = clock.today();
        self.apply(RangeEvent::LastDays { days, today }, clock)
    }

    /// Point both inputs back at the anchors held by the state machine
    pub fn sync_inputs(&mut self, today: NaiveDate) {
        self.start_input.reset(self.range.range.start, today);
        self.end_input.reset(self.range.range.end, today);
    }
}
