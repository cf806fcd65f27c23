// Date utility functions
// Day navigation helpers for the board's date picker

use chrono::{Duration, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Move a date forward or backward by whole days.
pub fn shift_day(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
