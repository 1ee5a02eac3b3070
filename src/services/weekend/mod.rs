//! Weekend classification and range scanning.
//!
//! Days of the week are numbered 0 = Sunday .. 6 = Saturday; a weekend
//! date is one numbered 0 or 6.

use chrono::{Datelike, NaiveDate};

/// True when `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday().num_days_from_sunday(), 0 | 6)
}

pub fn is_weekday(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// Iterator over the weekend dates of an inclusive range, ascending.
/// A clone carries its own cursor from where the original stood.
#[derive(Debug, Clone)]
pub struct WeekendDates {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl WeekendDates {
    /// Walk `[start, end]`. A reversed range yields nothing.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for WeekendDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while let Some(current) = self.next {
            self.next = current.succ_opt().filter(|next| *next <= self.end);
            if is_weekend(current) {
                return Some(current);
            }
        }
        None
    }
}

/// Collect every weekend date in `[start, end]`, ascending.
pub fn weekend_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    WeekendDates::new(start, end).collect()
}
