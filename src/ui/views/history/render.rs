//! History View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{HistoryRow, HistoryView};
use crate::model::{Notification, UNKNOWN_DATE};
use crate::ui::symbols::markers;
use crate::ui::{components, navigation, theme};

impl HistoryView {
    /// Render the entry list and the selected entry's details
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(format!(" History ({}) ", self.rows.len()))
            .bold()
            .cyan()
            .centered();
        let available = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());
        let block = components::bordered_block_with_notification(title, notif_line);

        if self.rows.is_empty() {
            frame.render_widget(components::no_entries_state().block(block), area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(inner);

        self.render_list(frame, list_area);
        if let Some(row) = self.selected_row() {
            frame.render_widget(
                Paragraph::new(detail_lines(row))
                    .block(components::panel_block("Entry"))
                    .wrap(Wrap { trim: false }),
                detail_area,
            );
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height as usize;
        if visible == 0 {
            return;
        }
        let offset = navigation::adjust_scroll(self.selected, self.scroll_offset, visible);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, row)| list_line(row, idx == self.selected))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn list_line(row: &HistoryRow, is_selected: bool) -> Line<'static> {
    let date = if row.date.is_empty() {
        UNKNOWN_DATE
    } else {
        row.date.as_str()
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", markers::NODE),
            Style::default().fg(theme::axis::color(row.axis)),
        ),
        Span::styled(
            format!("{date:<10} "),
            Style::default().fg(theme::history_view::DATE),
        ),
        Span::raw(row.title.clone()),
    ]);

    if is_selected {
        line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}

fn detail_lines(row: &HistoryRow) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(row.title.clone()).bold(),
        Line::from(if row.date.is_empty() {
            "Unknown date".to_string()
        } else {
            row.date.clone()
        })
        .fg(theme::history_view::DATE),
        Line::from(""),
    ];

    if !row.summary.is_empty() {
        lines.push(Line::from(row.summary.clone()));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::raw("Axis: "),
        Span::styled(
            row.axis.label(),
            Style::default()
                .fg(theme::axis::color(row.axis))
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if !row.files.is_empty() {
        lines.push(Line::from("Files changed:"));
        lines.extend(row.files.iter().map(|file| {
            Line::from(format!("  - {file}")).fg(theme::history_view::FILE)
        }));
    }

    lines
}
