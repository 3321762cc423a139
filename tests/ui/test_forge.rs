//! Rendering tests for the Forge view

use crossterm::event::KeyCode;
use insta::assert_snapshot;

use evoscope::engine::{build_model, generate_mutations};
use evoscope::ui::views::{ForgeAction, ForgeView};

use super::{key, render_to_text};
use crate::common::{fixture_model, fixture_today};

fn fixture_view(novelty: f64) -> ForgeView {
    let model = fixture_model();
    let mut view = ForgeView::new(novelty, 4);
    view.set_model(&model);
    view.set_candidates(generate_mutations(&model, view.options()));
    view
}

#[test]
fn test_forge_candidate_listing() {
    let view = fixture_view(0.7);
    let listing = view
        .candidates()
        .iter()
        .map(|c| {
            format!(
                "{} {} {} {}/{}",
                c.id, c.axis, c.title, c.predicted_impact, c.disruption
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(listing, @r"
    mutation-1 runtime Split runtime into event-driven modules 91/4
    mutation-2 interface Add alternate perception mode 90/7
    mutation-3 memory Version memory semantics 110/5
    mutation-4 interface Add alternate perception mode 98/5
    ");
}

#[test]
fn test_forge_header_and_cards() {
    let view = fixture_view(0.7);
    let text = render_to_text(100, 60, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("Forge"));
    assert!(text.contains("0.70"));
    assert!(text.contains("(4 candidates)"));
    assert!(text.contains("Repetition risk: medium."));

    assert!(text.contains("▶ Split runtime into event-driven modules"));
    assert!(text.contains("Axis: runtime · Impact: 91% · Disruption: 4/6"));
    assert!(text.contains("Proposed touchpoints:"));
    assert!(text.contains("    - src/views/"));
    assert!(text.contains("Impact: 110%"));
}

#[test]
fn test_forge_novelty_keys() {
    let mut view = fixture_view(0.7);
    assert_eq!(view.handle_key(key(KeyCode::Char('+'))), ForgeAction::Regenerate);
    assert_eq!(view.options().novelty, 0.75);
    assert_eq!(view.handle_key(key(KeyCode::Char('-'))), ForgeAction::Regenerate);
    assert_eq!(view.options().novelty, 0.7);
    assert_eq!(view.handle_key(key(KeyCode::Char('r'))), ForgeAction::Regenerate);
    assert_eq!(view.handle_key(key(KeyCode::Char('j'))), ForgeAction::None);

    let mut full = fixture_view(1.0);
    assert_eq!(full.handle_key(key(KeyCode::Char('+'))), ForgeAction::None);
    assert_eq!(full.novelty(), 1.0);
}

#[test]
fn test_forge_selection_marker_moves() {
    let mut view = fixture_view(0.7);
    view.handle_key(key(KeyCode::Char('j')));
    let text = render_to_text(100, 60, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("▶ Add alternate perception mode"));
    assert!(!text.contains("▶ Split runtime"));
}

#[test]
fn test_forge_empty_log() {
    let model = build_model(Vec::new(), fixture_today());
    let mut view = ForgeView::new(0.7, 4);
    view.set_model(&model);
    view.set_candidates(generate_mutations(&model, view.options()));
    let text = render_to_text(80, 20, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("No candidates available."));
}
