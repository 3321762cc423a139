//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Span,
};

use super::state::{App, View};
use crate::engine::format_novelty;
use crate::keys;
use crate::ui::widgets::{
    STATUS_BAR_HEIGHT, VIEW_TABS_HEIGHT, render_error_banner, render_help_panel,
    render_notification_banner, render_status_bar, render_view_tabs,
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        let [tabs_area, main_area, _status_area] = Layout::vertical([
            Constraint::Length(VIEW_TABS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(frame.area());

        render_view_tabs(frame, tabs_area, self.current_view);

        match self.current_view {
            View::Home => self.home_view.render(frame, main_area, notification),
            View::History => self.history_view.render(frame, main_area, notification),
            View::Constellation => self.constellation_view.render(frame, main_area, notification),
            View::Forge => self.forge_view.render(frame, main_area, notification),
            View::Help => {
                render_help_panel(frame, main_area, self.help_scroll);
                if let Some(notification) = notification {
                    render_notification_banner(frame, notification, STATUS_BAR_HEIGHT);
                }
            }
        }

        render_status_bar(frame, self.status_prefix(), keys::current_hints(self.current_view));

        // Errors are always shown prominently, on top of the view
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, STATUS_BAR_HEIGHT);
        }
    }

    /// Context shown left of the key hints
    fn status_prefix(&self) -> Vec<Span<'static>> {
        let text = match self.current_view {
            View::Home | View::History => format!("{} entries", self.model.entries.len()),
            View::Constellation => format!("spacing {}", self.constellation_view.spacing()),
            View::Forge => format!("novelty {}", format_novelty(self.forge_view.novelty())),
            View::Help => return Vec::new(),
        };
        vec![Span::styled(
            format!(" {text} "),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )]
    }
}
