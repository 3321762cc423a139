//! Rendering tests for the History view

use crossterm::event::KeyCode;

use evoscope::engine::build_model;
use evoscope::ui::views::{HistoryAction, HistoryView};

use super::{key, render_to_text};
use crate::common::{fixture_model, fixture_today};

fn fixture_view() -> HistoryView {
    let mut view = HistoryView::new();
    view.set_model(&fixture_model());
    view
}

#[test]
fn test_history_list_and_detail() {
    let view = fixture_view();
    let text = render_to_text(100, 20, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("History (5)"));
    assert!(text.contains("2024-01-06 Split runtime"));
    assert!(text.contains("2024-01-01 Seed the archive"));
    assert!(text.contains("Axis: Runtime"));
    assert!(text.contains("Files changed:"));
    assert!(text.contains("  - src/core/evolution-engine.js"));
}

#[test]
fn test_history_newest_first() {
    let view = fixture_view();
    let text = render_to_text(100, 20, |frame| view.render(frame, frame.area(), None));

    let newest = text.find("2024-01-06 Split runtime").unwrap();
    let oldest = text.find("2024-01-01 Seed the archive").unwrap();
    assert!(newest < oldest);
}

#[test]
fn test_history_selection_moves_detail() {
    let mut view = fixture_view();
    assert_eq!(view.handle_key(key(KeyCode::Char('j'))), HistoryAction::None);
    let text = render_to_text(100, 20, |frame| view.render(frame, frame.area(), None));

    assert_eq!(view.selected_row().unwrap().title, "Record memory");
    assert!(text.contains("Axis: Memory"));
    assert!(text.contains("  - log.json"));
}

#[test]
fn test_history_enter_points_at_node() {
    let mut view = fixture_view();
    assert_eq!(
        view.handle_key(key(KeyCode::Enter)),
        HistoryAction::ShowInConstellation(4)
    );

    view.handle_key(key(KeyCode::Char('G')));
    assert_eq!(
        view.handle_key(key(KeyCode::Enter)),
        HistoryAction::ShowInConstellation(0)
    );
}

#[test]
fn test_history_empty_log() {
    let mut view = HistoryView::new();
    view.set_model(&build_model(Vec::new(), fixture_today()));
    let text = render_to_text(80, 12, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("History (0)"));
    assert!(text.contains("No entries yet."));
    assert_eq!(view.handle_key(key(KeyCode::Enter)), HistoryAction::None);
}
