//! Error and notification message components
//!
//! For empty states, use `empty_state` module.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Label and accent color for a notification kind
pub fn notification_palette(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    }
}

/// Build an error message line for banner display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {error} "), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line for title bar display
///
/// With `max_width`, an overlong message is cut and ends with "…". Returns
/// an empty line when not even one character of the message fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, accent) = notification_palette(notification.kind);
    let message = &notification.message;

    // " | " + label + " " + message + " "
    let fixed = 3 + label.len() + 1;
    let full = fixed + message.chars().count() + 1;

    let text = match max_width {
        Some(max) if full > max => {
            let available = max.saturating_sub(fixed + 2);
            if available == 0 {
                return Line::default();
            }
            let head: String = message.chars().take(available).collect();
            format!("{head}… ")
        }
        _ => format!("{message} "),
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{label} "),
            Style::default().fg(Color::Black).bg(accent),
        ),
        Span::styled(text, Style::default().fg(accent)),
    ])
}
