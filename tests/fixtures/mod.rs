// Test fixtures - reusable test data
// Provides consistent dates across all test files

use chrono::NaiveDate;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Jun 3, 2024
    pub fn monday_2024_06_03() -> NaiveDate {
        ymd(2024, 6, 3)
    }

    /// Saturday, Jun 8, 2024
    pub fn saturday_2024_06_08() -> NaiveDate {
        ymd(2024, 6, 8)
    }

    /// Sunday, Jun 9, 2024
    pub fn sunday_2024_06_09() -> NaiveDate {
        ymd(2024, 6, 9)
    }

    /// Monday, Jun 10, 2024 - the fixed "today" for shortcut tests
    pub fn today_2024_06_10() -> NaiveDate {
        ymd(2024, 6, 10)
    }

    /// Wednesday, Jan 31, 2024 - last day of a 31-day month in a leap year
    pub fn jan_31_2024() -> NaiveDate {
        ymd(2024, 1, 31)
    }
}
