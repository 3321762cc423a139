//! Integration tests for the mutation forge
//!
//! Expected candidates are the reference output for the shared fixture.
//! Files with equal change counts rank alphabetically, which fixes the
//! target order whenever the fixture has ties.

mod common;

use common::{day, entry, fixture_model};
use evoscope::engine::{build_model, format_novelty, generate_mutations, underused_axis};
use evoscope::model::{Axis, ForgeOptions, MutationCandidate};

fn forge(novelty: f64, count: usize) -> Vec<MutationCandidate> {
    generate_mutations(&fixture_model(), ForgeOptions { novelty, count })
}

fn summary(candidates: &[MutationCandidate]) -> Vec<(Axis, i64, i64, Vec<&str>)> {
    candidates
        .iter()
        .map(|c| {
            (
                c.axis,
                c.predicted_impact,
                c.disruption,
                c.files.iter().map(String::as_str).collect(),
            )
        })
        .collect()
}

const INTERFACE_FILES: [&str; 3] = ["index.html", "style.css", "constellation.html"];

fn interface_plus(extra: Option<&'static str>) -> Vec<&'static str> {
    INTERFACE_FILES.iter().copied().chain(extra).collect()
}

#[test]
fn test_open_novelty_reference_candidates() {
    let candidates = forge(0.7, 4);
    assert_eq!(
        summary(&candidates),
        vec![
            (
                Axis::Runtime,
                91,
                4,
                vec!["site.js", "src/core/evolution-engine.js", "src/views/", "index.html"]
            ),
            (Axis::Interface, 90, 7, interface_plus(Some("log.json"))),
            (
                Axis::Memory,
                110,
                5,
                vec!["log.json", "history.html", "src/core/log-data.js", "CONSTITUTION.md"]
            ),
            (Axis::Interface, 98, 5, interface_plus(Some("log.json"))),
        ]
    );
    assert_eq!(candidates[0].title, "Split runtime into event-driven modules");
    assert_eq!(candidates[1].title, "Add alternate perception mode");
    assert_eq!(candidates[2].title, "Version memory semantics");
    let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["mutation-1", "mutation-2", "mutation-3", "mutation-4"]);
}

#[test]
fn test_low_novelty_restricts_to_underused_axis() {
    assert_eq!(underused_axis(&fixture_model()), Axis::Interface);
    assert_eq!(
        summary(&forge(0.3, 4)),
        vec![
            (Axis::Interface, 56, 3, interface_plus(None)),
            (Axis::Interface, 59, 2, interface_plus(None)),
            (Axis::Interface, 60, 1, interface_plus(Some("AUTONOMY_PROMPT.md"))),
            (Axis::Interface, 57, 2, interface_plus(Some("site.js"))),
        ]
    );
}

#[test]
fn test_threshold_novelty_is_still_restricted() {
    assert_eq!(
        summary(&forge(0.45, 4)),
        vec![
            (Axis::Interface, 52, 5, interface_plus(Some("AUTONOMY_PROMPT.md"))),
            (Axis::Interface, 80, 4, interface_plus(Some("site.js"))),
            (
                Axis::Interface,
                76,
                3,
                interface_plus(Some("src/core/evolution-engine.js"))
            ),
            (Axis::Interface, 66, 2, interface_plus(Some("log.json"))),
        ]
    );
}

#[test]
fn test_same_inputs_same_candidates() {
    assert_eq!(forge(0.7, 5), forge(0.7, 5));
    // the seed only sees two decimals of novelty
    assert_eq!(forge(0.7, 3), forge(0.701, 3));
    assert_ne!(forge(0.7, 3), forge(0.75, 3));
}

#[test]
fn test_count_is_honoured() {
    assert!(forge(0.7, 0).is_empty());
    assert_eq!(forge(0.7, 9).len(), 9);
    // a longer request extends a shorter one
    assert_eq!(forge(0.7, 9)[..4], forge(0.7, 4)[..]);
}

#[test]
fn test_bounds_hold() {
    for novelty in [0.0, 0.2, 0.5, 0.9, 1.0] {
        for candidate in forge(novelty, 12) {
            assert!(candidate.predicted_impact >= 20);
            assert!(candidate.disruption >= 1);
            let mut files = candidate.files.clone();
            files.sort();
            files.dedup();
            assert_eq!(files.len(), candidate.files.len());
        }
    }
}

#[test]
fn test_empty_model_yields_nothing() {
    let model = build_model(Vec::new(), day(2024, 1, 1));
    assert!(generate_mutations(&model, ForgeOptions::default()).is_empty());
}

#[test]
fn test_fallback_file_without_any_files() {
    let model = build_model(vec![entry("2024-01-01", "Bare", "", &[])], day(2024, 1, 1));
    for candidate in generate_mutations(&model, ForgeOptions::default()) {
        assert!(candidate.files.iter().any(|f| f == "log.json"));
    }
}

#[test]
fn test_format_novelty_matches_two_decimal_rendering() {
    assert_eq!(format_novelty(0.7), "0.70");
    assert_eq!(format_novelty(0.125), "0.13");
    assert_eq!(format_novelty(0.375), "0.38");
    assert_eq!(format_novelty(1.005), "1.00");
    assert_eq!(format_novelty(-0.125), "-0.13");
    assert_eq!(format_novelty(-0.001), "-0.00");
    assert_eq!(format_novelty(f64::NAN), "NaN");
}
