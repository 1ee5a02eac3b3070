//! Choices offered by the year and month dropdowns.

use std::ops::RangeInclusive;

/// Years listed around the current one when no setting overrides it.
pub const DEFAULT_YEAR_WINDOW: u16 = 10;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years from `current_year - window` to `current_year + window`.
pub fn year_options(current_year: i32, window: u16) -> RangeInclusive<i32> {
    let window = i32::from(window);
    current_year.saturating_sub(window)..=current_year.saturating_add(window)
}

/// English name of a 1-based month.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}
