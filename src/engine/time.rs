//! Calendar-day helpers
//!
//! Days are `YYYY-MM-DD` strings interpreted as UTC midnight.

use chrono::{Days, NaiveDate};

/// Format used for day strings
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` day string
pub fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day, DAY_FORMAT).ok()
}

/// Format a calendar date as `YYYY-MM-DD`, ignoring any time of day
pub fn to_day_string(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Whole days from `from_day` to `to_day` (negative when `to_day` is earlier)
///
/// Returns `None` if either string is not a valid day.
pub fn day_delta(from_day: &str, to_day: &str) -> Option<i64> {
    let from = parse_day(from_day)?;
    let to = parse_day(to_day)?;
    Some(to.signed_duration_since(from).num_days())
}

/// The day `days` after `day` (`days` may be zero or negative)
pub fn add_days(day: &str, days: i64) -> Option<String> {
    let date = parse_day(day)?;
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }?;
    Some(to_day_string(shifted))
}
