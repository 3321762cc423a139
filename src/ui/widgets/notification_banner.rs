//! Notification banner widget
//!
//! Displays temporary feedback such as "Log reloaded" in views without a
//! title bar slot (the Help panel).

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use crate::model::Notification;
use crate::ui::components::notification_palette;

/// Render a notification banner just above the status bar
pub fn render_notification_banner(
    frame: &mut Frame,
    notification: &Notification,
    status_bar_height: u16,
) {
    let area = frame.area();
    let y_offset = status_bar_height + 1;
    if area.height < y_offset {
        return;
    }
    let banner_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - y_offset,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let line = build_notification_line(notification);
    frame.render_widget(Paragraph::new(line), banner_area);
}

fn build_notification_line(notification: &Notification) -> Line<'static> {
    let (label, accent) = notification_palette(notification.kind);

    Line::from(vec![
        Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::Black).bg(accent),
        ),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(accent),
        ),
    ])
}
