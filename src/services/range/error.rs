use chrono::NaiveDate;
use thiserror::Error;

/// Why a [`super::RangeEvent`] left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{0} falls on a weekend and cannot anchor a range")]
    WeekendAnchor(NaiveDate),

    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),

    #[error("a lookback of {0} days selects nothing")]
    InvalidLookback(u32),

    #[error("resulting date is outside the supported calendar")]
    DateOutOfRange,
}
