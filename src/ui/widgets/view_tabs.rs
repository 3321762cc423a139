//! View tab strip shown above every dashboard view

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
};

use crate::app::View;

/// Rows reserved for the tab strip
pub const VIEW_TABS_HEIGHT: u16 = 1;

const TABS: [(View, &str); 4] = [
    (View::Home, "1 Home"),
    (View::History, "2 History"),
    (View::Constellation, "3 Constellation"),
    (View::Forge, "4 Forge"),
];

/// Render the tab strip, highlighting `current`
pub fn render_view_tabs(frame: &mut Frame, area: Rect, current: View) {
    let selected = TABS.iter().position(|(view, _)| *view == current);
    let tabs = Tabs::new(TABS.iter().map(|(_, label)| Line::from(*label)))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}
