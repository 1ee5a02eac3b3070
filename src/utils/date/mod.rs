// Date utility functions
// Calendar arithmetic shared by the range state machine and the views

use chrono::{Datelike, Days, Local, NaiveDate};

/// Text format used for every date shown or reported by the picker.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" so shortcuts can be driven from a fixed date in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ISO_DATE_FORMAT).ok()
}

/// Build a date from its parts, letting an out-of-range day roll forward
/// into the following month(s).
///
/// `overflowing_ymd(2024, 2, 31)` is 2024-03-02 and
/// `overflowing_ymd(2023, 2, 29)` is 2023-03-01.
pub fn overflowing_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

/// Replace the year of `date`, keeping its month and day-of-month.
pub fn with_year_overflowing(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    overflowing_ymd(year, date.month(), date.day())
}

/// Replace the month (1-based) of `date`, keeping its year and day-of-month.
pub fn with_month_overflowing(date: NaiveDate, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    overflowing_ymd(date.year(), month, date.day())
}

/// First day of an inclusive window of `days` days ending on `end`.
pub fn lookback_start(end: NaiveDate, days: u32) -> Option<NaiveDate> {
    let back = days.checked_sub(1)?;
    end.checked_sub_days(Days::new(u64::from(back)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_iso_pads_month_and_day() {
        assert_eq!(format_iso(ymd(2024, 6, 3)), "2024-06-03");
    }

    #[test]
    fn test_parse_iso_accepts_surrounding_whitespace() {
        assert_eq!(parse_iso(" 2024-06-03 "), Some(ymd(2024, 6, 3)));
    }

    #[test]
    fn test_parse_iso_rejects_other_formats() {
        assert!(parse_iso("06/03/2024").is_none());
        assert!(parse_iso("2024-02-30").is_none());
        assert!(parse_iso("").is_none());
    }

    #[test]
    fn test_month_overflow_rolls_forward() {
        assert_eq!(with_month_overflowing(ymd(2024, 1, 31), 2), Some(ymd(2024, 3, 2)));
        assert_eq!(with_month_overflowing(ymd(2023, 1, 31), 2), Some(ymd(2023, 3, 3)));
        assert_eq!(with_month_overflowing(ymd(2024, 5, 31), 6), Some(ymd(2024, 7, 1)));
    }

    #[test]
    fn test_month_without_overflow_keeps_day() {
        assert_eq!(with_month_overflowing(ymd(2024, 1, 15), 9), Some(ymd(2024, 9, 15)));
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        assert!(with_month_overflowing(ymd(2024, 1, 15), 0).is_none());
        assert!(with_month_overflowing(ymd(2024, 1, 15), 13).is_none());
    }

    #[test]
    fn test_leap_day_into_common_year() {
        assert_eq!(with_year_overflowing(ymd(2024, 2, 29), 2023), Some(ymd(2023, 3, 1)));
        assert_eq!(with_year_overflowing(ymd(2024, 2, 29), 2028), Some(ymd(2028, 2, 29)));
    }

    #[test]
    fn test_lookback_start_is_inclusive() {
        assert_eq!(lookback_start(ymd(2024, 6, 10), 7), Some(ymd(2024, 6, 4)));
        assert_eq!(lookback_start(ymd(2024, 6, 10), 1), Some(ymd(2024, 6, 10)));
        assert_eq!(lookback_start(ymd(2024, 3, 1), 30), Some(ymd(2024, 2, 1)));
        assert!(lookback_start(ymd(2024, 6, 10), 0).is_none());
    }
}
