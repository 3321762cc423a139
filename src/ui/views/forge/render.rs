//! Forge View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::ForgeView;
use crate::engine::{constants::forge::DISRUPTION_SCALE, format_novelty};
use crate::model::{MutationCandidate, Notification};
use crate::ui::symbols::{self, empty, markers};
use crate::ui::{components, theme};

const NOVELTY_METER_WIDTH: usize = 20;

impl ForgeView {
    /// Render the novelty header and the candidate list
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" Forge ").bold().cyan().centered();
        let available = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());
        let block = components::bordered_block_with_notification(title, notif_line);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(inner);

        frame.render_widget(
            Paragraph::new(self.header_lines()).wrap(Wrap { trim: true }),
            header_area,
        );

        if self.candidates.is_empty() {
            frame.render_widget(components::empty_state(empty::NO_CANDIDATES, None), list_area);
            return;
        }

        let mut lines = Vec::new();
        let mut selected_span = (0, 0);
        for (idx, candidate) in self.candidates.iter().enumerate() {
            let start = lines.len();
            lines.extend(candidate_lines(candidate, idx == self.selected));
            if idx == self.selected {
                selected_span = (start, lines.len());
            }
        }

        // Scroll only when the selected candidate would not fit
        let visible = list_area.height as usize;
        let scroll = if selected_span.1 > visible {
            selected_span.0
        } else {
            0
        };

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll as u16, 0)),
            list_area,
        );
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let percent = (self.novelty * 100.0).round().clamp(0.0, 100.0) as u8;
        vec![
            Line::from(vec![
                Span::raw("Novelty "),
                Span::styled(
                    symbols::meter_bar(percent, NOVELTY_METER_WIDTH),
                    Style::default().fg(theme::forge_view::NOVELTY),
                ),
                Span::raw(" "),
                Span::styled(format_novelty(self.novelty), Style::default().bold()),
                Span::raw(format!("  ({} candidates)", self.count)).dark_gray(),
            ]),
            Line::from(vec![
                Span::raw("Repetition risk: "),
                Span::styled(
                    self.risk.to_string(),
                    Style::default()
                        .fg(theme::risk::color(self.risk))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(". {}", self.risk_details)),
            ]),
        ]
    }
}

fn candidate_lines(candidate: &MutationCandidate, is_selected: bool) -> Vec<Line<'static>> {
    let marker = if is_selected { markers::SELECTED } else { ' ' };
    let title_style = if is_selected {
        Style::default()
            .fg(theme::selection::FG)
            .bg(theme::selection::BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{marker} ")),
            Span::styled(candidate.title.clone(), title_style),
        ]),
        Line::from(vec![
            Span::raw("  Axis: "),
            Span::styled(
                candidate.axis.to_string(),
                Style::default().fg(theme::axis::color(candidate.axis)),
            ),
            Span::raw(markers::SEPARATOR),
            Span::raw("Impact: "),
            Span::styled(
                format!("{}%", candidate.predicted_impact),
                Style::default().fg(theme::forge_view::IMPACT),
            ),
            Span::raw(markers::SEPARATOR),
            Span::raw("Disruption: "),
            Span::styled(
                format!("{}/{DISRUPTION_SCALE}", candidate.disruption),
                Style::default().fg(theme::forge_view::DISRUPTION),
            ),
        ]),
        Line::from(format!("  {}", candidate.rationale)),
        Line::from("  Proposed touchpoints:"),
    ];
    lines.extend(
        candidate
            .files
            .iter()
            .map(|file| Line::from(format!("    - {file}")).fg(theme::forge_view::FILE)),
    );
    lines.push(Line::from(""));
    lines
}
