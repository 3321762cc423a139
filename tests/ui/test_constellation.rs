//! Rendering tests for the Constellation view

use crossterm::event::KeyCode;

use evoscope::engine::{LayoutParams, build_model, layout_constellation};
use evoscope::ui::views::{ConstellationAction, ConstellationView};

use super::{key, render_to_text};
use crate::common::{fixture_model, fixture_today};

fn fixture_view(spacing: f64) -> ConstellationView {
    let model = fixture_model();
    let mut view = ConstellationView::new(spacing);
    view.set_model(&model);
    view.set_positions(layout_constellation(
        &model,
        LayoutParams {
            spacing: view.spacing(),
            ..LayoutParams::default()
        },
    ));
    view
}

#[test]
fn test_constellation_summary_and_tooltip() {
    let view = fixture_view(24.0);
    let text = render_to_text(120, 40, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("Constellation · spacing 24"));
    assert!(text.contains("Mapped 5 entries from 2024-01-01 to 2024-01-06."));
    assert!(text.contains("Split runtime · 2024-01-06 · runtime"));
    assert!(text.contains("Recent"));
    assert!(text.contains("  2024-01-03 · governance"));
}

#[test]
fn test_constellation_selection_follows_keys() {
    let mut view = fixture_view(24.0);
    assert_eq!(view.selected(), 4);

    assert_eq!(view.handle_key(key(KeyCode::Char('h'))), ConstellationAction::None);
    assert_eq!(
        view.tooltip().as_deref(),
        Some("Record memory · 2024-01-05 · memory")
    );

    view.handle_key(key(KeyCode::Char('g')));
    assert_eq!(view.selected(), 0);
    view.handle_key(key(KeyCode::Left));
    assert_eq!(view.selected(), 0);

    view.handle_key(key(KeyCode::Right));
    let text = render_to_text(120, 40, |frame| view.render(frame, frame.area(), None));
    assert!(text.contains("Add continuity meter · 2024-01-02 · runtime"));
}

#[test]
fn test_constellation_spacing_keys() {
    let mut view = fixture_view(24.0);
    assert_eq!(
        view.handle_key(key(KeyCode::Char('+'))),
        ConstellationAction::Relayout
    );
    assert_eq!(view.spacing(), 28.0);
    assert_eq!(
        view.handle_key(key(KeyCode::Char('-'))),
        ConstellationAction::Relayout
    );
    assert_eq!(view.spacing(), 24.0);

    let mut widest = fixture_view(64.0);
    assert_eq!(
        widest.handle_key(key(KeyCode::Char('='))),
        ConstellationAction::None
    );
    assert_eq!(widest.spacing(), 64.0);
}

#[test]
fn test_constellation_toggle_labels() {
    let mut view = fixture_view(24.0);
    assert!(view.label_visible(0));
    view.handle_key(key(KeyCode::Char('t')));
    assert!(!view.show_labels());
    assert!(!view.label_visible(4));
}

#[test]
fn test_constellation_empty_log() {
    let mut view = ConstellationView::new(24.0);
    view.set_model(&build_model(Vec::new(), fixture_today()));
    let text = render_to_text(80, 20, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("No entries yet."));
    assert!(view.summary().is_none());
    assert!(view.tooltip().is_none());
}
