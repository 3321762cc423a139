//! Shared fixtures for integration tests.
//!
//! Each integration test file compiles as a separate crate, so not all
//! helpers are used in every test file.

#![allow(dead_code)]

use chrono::NaiveDate;

use evoscope::engine::build_model;
use evoscope::model::{EvolutionModel, LogEntry};

pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap()
}

pub fn entry(date: &str, title: &str, summary: &str, files: &[&str]) -> LogEntry {
    LogEntry {
        date: date.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        files_changed: files.iter().map(|f| f.to_string()).collect(),
    }
}

/// Five entries over six days with a gap on 2024-01-04
pub fn fixture() -> Vec<LogEntry> {
    vec![
        entry(
            "2024-01-01",
            "Seed the archive",
            "First light.",
            &["index.html", "style.css", "site.js"],
        ),
        entry(
            "2024-01-02",
            "Add continuity meter",
            "Meter.",
            &["index.html", "log.json", "site.js", "style.css"],
        ),
        entry(
            "2024-01-03",
            "Constitution draft",
            "Rules.",
            &["CONSTITUTION.md", "AUTONOMY_PROMPT.md"],
        ),
        entry("2024-01-05", "Record memory", "Memory.", &["log.json"]),
        entry(
            "2024-01-06",
            "Split runtime",
            "Modules.",
            &["src/core/evolution-engine.js", "site.js"],
        ),
    ]
}

/// Day the fixture is evaluated on
pub fn fixture_today() -> NaiveDate {
    day(2024, 1, 8)
}

pub fn fixture_model() -> EvolutionModel {
    build_model(fixture(), fixture_today())
}
