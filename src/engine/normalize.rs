//! Log normalization: date ordering and unique days

use std::collections::HashSet;

use crate::model::LogEntry;

/// Copy of `entries` ordered by raw date string, ascending
///
/// Lexicographic comparison; stable, so equal dates keep input order.
/// Missing dates compare as the empty string (earliest).
pub fn sort_by_date_asc(entries: &[LogEntry]) -> Vec<LogEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

/// Copy of `entries` ordered by raw date string, descending (stable)
pub fn sort_by_date_desc(entries: &[LogEntry]) -> Vec<LogEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Unique non-empty day strings, strictly ascending
pub fn unique_days(entries: &[LogEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut days: Vec<String> = entries
        .iter()
        .map(LogEntry::day)
        .filter(|day| !day.is_empty() && seen.insert(*day))
        .map(str::to_string)
        .collect();
    days.sort();
    days
}
