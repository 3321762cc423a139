//! Constellation View rendering
//!
//! The layout plane is 600×420 with y growing downwards; the canvas has y
//! growing upwards, so every y is flipped on the way in.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use super::ConstellationView;
use crate::engine::constants::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::model::Notification;
use crate::ui::symbols::markers;
use crate::ui::{components, theme};

/// Width of the "Recent" column
const SIDE_WIDTH: u16 = 34;
/// Gap between a node's rim and its label
const LABEL_OFFSET: f64 = 6.0;
/// Extra radius of the selection ring
const SELECTION_RING: f64 = 4.0;

fn flip(y: f64) -> f64 {
    DEFAULT_HEIGHT - y
}

impl ConstellationView {
    /// Render the constellation canvas, summary and recent list
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(format!(
            " Constellation{}spacing {} ",
            markers::SEPARATOR,
            self.spacing
        ))
        .bold()
        .cyan()
        .centered();
        let available = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());
        let block = components::bordered_block_with_notification(title, notif_line);

        if self.nodes.is_empty() {
            frame.render_widget(components::no_entries_state().block(block), area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [main_area, side_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SIDE_WIDTH)]).areas(inner);
        let [canvas_area, info_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(main_area);

        self.render_canvas(frame, canvas_area);
        self.render_info(frame, info_area);
        self.render_recent(frame, side_area);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, DEFAULT_WIDTH])
            .y_bounds([0.0, DEFAULT_HEIGHT])
            .paint(|ctx| {
                for pair in self.positions.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].x,
                        y1: flip(pair[0].y),
                        x2: pair[1].x,
                        y2: flip(pair[1].y),
                        color: theme::constellation_view::PATH,
                    });
                }
                ctx.layer();

                for position in &self.positions {
                    let Some(node) = self.nodes.get(position.index) else {
                        continue;
                    };
                    ctx.draw(&Circle {
                        x: position.x,
                        y: flip(position.y),
                        radius: position.radius,
                        color: theme::axis::shade(node.axis, position.progress),
                    });
                    if position.index == self.selected {
                        ctx.draw(&Circle {
                            x: position.x,
                            y: flip(position.y),
                            radius: position.radius + SELECTION_RING,
                            color: theme::constellation_view::SELECTED,
                        });
                    }
                }
                ctx.layer();

                for position in &self.positions {
                    if !self.label_visible(position.index) {
                        continue;
                    }
                    let Some(node) = self.nodes.get(position.index) else {
                        continue;
                    };
                    let color = if position.index == self.selected {
                        theme::constellation_view::SELECTED
                    } else {
                        theme::constellation_view::LABEL
                    };
                    ctx.print(
                        position.x + position.radius + LABEL_OFFSET,
                        flip(position.y - position.radius - LABEL_OFFSET),
                        Line::styled(node.title.clone(), Style::default().fg(color)),
                    );
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::with_capacity(2);
        if let Some(summary) = self.summary() {
            lines.push(Line::from(summary).dark_gray());
        }
        if let Some(tooltip) = self.tooltip() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", markers::SELECTED),
                    Style::default().fg(theme::constellation_view::SELECTED),
                ),
                Span::raw(tooltip).bold(),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_recent(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .recent()
            .flat_map(|node| {
                [
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", markers::NODE),
                            Style::default().fg(theme::axis::color(node.axis)),
                        ),
                        Span::raw(node.title.clone()).bold(),
                    ]),
                    Line::from(format!("  {}{}{}", node.date, markers::SEPARATOR, node.axis))
                        .dark_gray(),
                ]
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).block(components::panel_block("Recent")),
            area,
        );
    }
}
