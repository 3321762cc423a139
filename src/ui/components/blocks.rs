//! Block components for UI rendering

use ratatui::{
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders},
};

use crate::ui::theme;

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Create a bordered view block, with the notification right-aligned in the title bar
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let block = bordered_block(title);
    match notification {
        Some(line) => block.title(line.right_aligned()),
        None => block,
    }
}

/// Titled panel inside a view (dimmer border, cyan title)
pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::home_view::MUTED))
        .title(Line::from(format!(" {title} ")).fg(theme::home_view::PANEL_TITLE).bold())
}
