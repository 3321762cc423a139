//! Rendering tests for the Home dashboard

use crossterm::event::KeyCode;

use evoscope::engine::build_model;
use evoscope::ui::views::{HomeAction, HomeView};

use super::{key, render_to_text};
use crate::common::{day, fixture, fixture_model, fixture_today};

fn fixture_view() -> HomeView {
    let mut view = HomeView::new();
    view.set_model(&fixture_model(), fixture_today());
    view
}

#[test]
fn test_home_fixture_panels() {
    let view = fixture_view();
    let text = render_to_text(120, 40, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("Latest Entry"));
    assert!(text.contains("Split runtime"));
    assert!(text.contains("Date: 2024-01-06"));

    assert!(text.contains("Continuity needs attention."));
    assert!(text.contains("Latest entry: 2024-01-06. Gap: 2 day(s). Streak: 2 days."));
    assert!(text.contains(" 40%"));

    assert!(text.contains("Tracking from 2024-01-01 through 2024-01-06."));
    assert!(text.contains("Drifting"));
    assert!(text.contains("Projection 1 2024-01-07"));

    assert!(text.contains("Avg files changed: 2.4."));
    assert!(text.contains("Projected 3 shard(s) from recent history."));

    assert!(text.contains(" medium "));
    assert!(text.contains("Evolution intent: continue diversification"));
}

#[test]
fn test_home_intact_continuity() {
    let today = day(2024, 1, 6);
    let mut view = HomeView::new();
    view.set_model(&build_model(fixture(), today), today);
    let text = render_to_text(120, 40, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("Continuity intact."));
    assert!(text.contains("Latest entry recorded today. Streak: 2 days."));
}

#[test]
fn test_home_empty_log() {
    let mut view = HomeView::new();
    view.set_model(&build_model(Vec::new(), fixture_today()), fixture_today());
    let text = render_to_text(80, 20, |frame| view.render(frame, frame.area(), None));

    assert!(text.contains("No entries yet."));
    assert!(!text.contains("Latest Entry"));
}

#[test]
fn test_home_keys() {
    let mut view = fixture_view();
    assert_eq!(view.handle_key(key(KeyCode::Enter)), HomeAction::OpenHistory);
    assert_eq!(view.handle_key(key(KeyCode::Char('j'))), HomeAction::None);
    assert_eq!(view.handle_key(key(KeyCode::Char('x'))), HomeAction::None);
}
