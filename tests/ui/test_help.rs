//! Rendering tests for the Help panel

use evoscope::ui::widgets::{help_line_count, render_help_panel};

use super::render_to_text;

#[test]
fn test_help_panel_full() {
    let text = render_to_text(80, 40, |frame| render_help_panel(frame, frame.area(), 0));

    assert!(text.contains("evoscope - Help"));
    assert!(text.contains("Key bindings:"));
    assert!(text.contains("Global:"));
    assert!(text.contains("  Ctrl+L    Reload log"));
    assert!(text.contains("Constellation View:"));
    assert!(text.contains("  t         Toggle labels"));
    assert!(text.contains("Forge View:"));
    assert!(text.contains("  r         Regenerate candidates"));
}

#[test]
fn test_help_panel_scrolled() {
    let text = render_to_text(80, 40, |frame| render_help_panel(frame, frame.area(), 2));

    assert!(!text.contains("Key bindings:"));
    assert!(text.contains("Global:"));
}

#[test]
fn test_help_panel_narrow() {
    let last = help_line_count() as u16 - 1;
    let text = render_to_text(40, 10, |frame| render_help_panel(frame, frame.area(), last));

    assert!(text.contains("evoscope - Help"));
    assert!(!text.contains("Global:"));
}
