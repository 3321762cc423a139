//! Integration tests for the evolution model builder

mod common;

use common::{day, entry, fixture, fixture_model, fixture_today};
use evoscope::engine::{build_model, classify_axis};
use evoscope::model::{Axis, RiskLevel, UNKNOWN_DATE};

#[test]
fn test_fixture_days_and_bounds() {
    let model = fixture_model();
    assert_eq!(
        model.days,
        vec!["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05", "2024-01-06"]
    );
    assert_eq!(model.origin_date, "2024-01-01");
    assert_eq!(model.latest_date, "2024-01-06");
    assert_eq!(model.latest_entry().unwrap().title, "Split runtime");
}

#[test]
fn test_fixture_streaks_and_cadence() {
    let model = fixture_model();
    assert_eq!(model.streaks.current, 2);
    assert_eq!(model.streaks.longest, 3);
    assert_eq!(model.cadence.average_gap, 1.25);
    assert_eq!(model.cadence.latest_gap, 2);
}

#[test]
fn test_fixture_axis_balance() {
    let model = fixture_model();
    let counts: Vec<(Axis, usize)> = model
        .axis_balance
        .iter()
        .map(|c| (c.axis, c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (Axis::Governance, 1),
            (Axis::Memory, 1),
            (Axis::Runtime, 3),
            (Axis::Interface, 0),
            (Axis::Structure, 0),
        ]
    );
    let total: usize = model.axis_balance.iter().map(|c| c.count).sum();
    assert_eq!(total, model.timeline.len());
}

#[test]
fn test_fixture_dominant_files() {
    let model = fixture_model();
    assert_eq!(
        model.dominant_files,
        vec![
            "site.js",
            "index.html",
            "log.json",
            "style.css",
            "AUTONOMY_PROMPT.md",
            "CONSTITUTION.md",
        ]
    );
    assert_eq!(model.file_frequency["site.js"], 3);
    assert_eq!(model.file_frequency["src/core/evolution-engine.js"], 1);
}

#[test]
fn test_fixture_repetition_is_medium() {
    let model = fixture_model();
    assert_eq!(model.repetition.risk, RiskLevel::Medium);
    assert!(!model.repetition.repeated_core);
    assert_eq!(
        model.repetition.details,
        "Some overlap exists, but not enough to classify as strong repetition."
    );
}

#[test]
fn test_timeline_is_ascending_and_indexed() {
    let mut entries = fixture();
    entries.reverse();
    let model = build_model(entries, fixture_today());

    let ids: Vec<&str> = model.timeline.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["entry-0", "entry-1", "entry-2", "entry-3", "entry-4"]);
    assert_eq!(model.timeline[0].title, "Seed the archive");
    assert_eq!(model.timeline[0].source, 4);
    assert_eq!(model.timeline[4].axis, Axis::Runtime);
    for node in &model.timeline {
        let raw = model.entry_of(node).unwrap();
        assert_eq!(raw.title, node.title);
        assert_eq!(classify_axis(raw), node.axis);
    }
}

#[test]
fn test_empty_input() {
    let model = build_model(Vec::new(), day(2024, 1, 1));
    assert!(model.is_empty());
    assert!(model.timeline.is_empty());
    assert!(model.dominant_files.is_empty());
    assert_eq!(model.streaks.current, 0);
    assert_eq!(model.streaks.longest, 0);
    assert_eq!(model.cadence.average_gap, 1.0);
    assert_eq!(model.cadence.latest_gap, 0);
    assert_eq!(model.repetition.risk, RiskLevel::Low);
    assert_eq!(model.latest_date, UNKNOWN_DATE);
    assert_eq!(model.origin_date, UNKNOWN_DATE);
    assert_eq!(model.axis_balance.len(), 5);
    assert!(model.axis_balance.iter().all(|c| c.count == 0));
}

#[test]
fn test_missing_fields_get_placeholders() {
    let model = build_model(
        vec![entry("", "", "", &[]), entry("2024-01-01", "Dated", "", &[])],
        day(2024, 1, 1),
    );
    assert_eq!(model.days, vec!["2024-01-01"]);
    let undated = &model.timeline[0];
    assert_eq!(undated.date, "unknown");
    assert_eq!(undated.title, "Untitled");
    assert_eq!(undated.axis, Axis::Structure);
    assert_eq!(undated.files_changed, 0);
}

#[test]
fn test_duplicate_days_and_timestamps() {
    let model = build_model(
        vec![
            entry("2024-03-02T18:00:00Z", "Evening", "", &["site.js"]),
            entry("2024-03-02", "Morning", "", &["index.html"]),
            entry("2024-03-01", "Before", "", &["log.json"]),
        ],
        day(2024, 3, 2),
    );
    assert_eq!(model.days, vec!["2024-03-01", "2024-03-02"]);
    assert_eq!(model.streaks.current, 2);
    assert_eq!(model.cadence.latest_gap, 0);
    // raw date strings sort "2024-03-02" before its timestamped twin
    let titles: Vec<&str> = model.desc_entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Evening", "Morning", "Before"]);
}

#[test]
fn test_sorting_is_stable_for_equal_dates() {
    let model = build_model(
        vec![
            entry("2024-01-01", "First", "", &[]),
            entry("2024-01-01", "Second", "", &[]),
        ],
        day(2024, 1, 1),
    );
    let asc: Vec<&str> = model.asc_entries.iter().map(|e| e.title.as_str()).collect();
    let desc: Vec<&str> = model.desc_entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(asc, vec!["First", "Second"]);
    assert_eq!(desc, vec!["First", "Second"]);
}

#[test]
fn test_build_is_deterministic() {
    assert_eq!(fixture_model(), fixture_model());
}
