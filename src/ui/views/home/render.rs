//! Home View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{HomePanels, HomeView};
use crate::model::{Continuity, Notification};
use crate::ui::symbols::{self, empty, markers};
use crate::ui::{components, theme};

const METER_WIDTH: usize = 30;

impl HomeView {
    /// Render the home dashboard with optional notification in title bar
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" Home ").bold().cyan().centered();
        let available = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());
        let block = components::bordered_block_with_notification(title, notif_line);

        let Some(panels) = self.panels.as_ref().filter(|p| p.latest.is_some()) else {
            frame.render_widget(components::no_entries_state().block(block), area);
            return;
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [latest_area, continuity_area, body_area, intent_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body_area);
        let [pulse_area, forecast_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(left_area);

        frame.render_widget(
            Paragraph::new(latest_lines(panels))
                .block(components::panel_block("Latest Entry"))
                .wrap(Wrap { trim: true }),
            latest_area,
        );
        frame.render_widget(
            Paragraph::new(continuity_lines(&panels.continuity))
                .block(components::panel_block("Continuity")),
            continuity_area,
        );
        frame.render_widget(
            Paragraph::new(pulse_lines(panels))
                .block(components::panel_block("Pulse"))
                .wrap(Wrap { trim: true }),
            pulse_area,
        );
        frame.render_widget(
            Paragraph::new(forecast_lines(panels))
                .block(components::panel_block("Forecast"))
                .wrap(Wrap { trim: true }),
            forecast_area,
        );
        frame.render_widget(
            Paragraph::new(recall_lines(panels))
                .block(components::panel_block("Drift & Memory"))
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0)),
            right_area,
        );

        let intent = Line::from(vec![
            Span::styled(
                format!(" {} ", panels.risk),
                Style::default()
                    .fg(theme::selection::FG)
                    .bg(theme::risk::color(panels.risk)),
            ),
            Span::raw(" "),
            Span::raw(panels.intent).italic(),
        ]);
        frame.render_widget(Paragraph::new(intent), intent_area);
    }
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(theme::home_view::MUTED))
}

fn metric(label: &str, value: String) -> Vec<Span<'static>> {
    vec![
        muted(format!("{label} ")),
        Span::styled(
            value,
            Style::default()
                .fg(theme::home_view::METRIC)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ]
}

fn latest_lines(panels: &HomePanels) -> Vec<Line<'static>> {
    let Some(latest) = &panels.latest else {
        return vec![Line::from(empty::NO_ENTRIES)];
    };

    let mut lines = vec![Line::from(latest.display_title().to_string()).bold()];
    if !latest.summary.is_empty() {
        lines.push(Line::from(latest.summary.clone()));
    }
    if !latest.date.is_empty() {
        lines.push(Line::from(muted(format!("Date: {}", latest.date))));
    }
    lines
}

fn continuity_lines(continuity: &Continuity) -> Vec<Line<'static>> {
    let (status, detail, color) = match continuity {
        Continuity::Unverified => (
            empty::NO_ENTRIES.to_string(),
            "Continuity cannot be verified without history.".to_string(),
            theme::home_view::CONTINUITY_WARN,
        ),
        Continuity::Intact { streak, .. } => (
            "Continuity intact.".to_string(),
            format!("Latest entry recorded today. Streak: {streak} days."),
            theme::home_view::CONTINUITY_OK,
        ),
        Continuity::NeedsAttention {
            latest,
            gap_days,
            streak,
            ..
        } => (
            "Continuity needs attention.".to_string(),
            format!("Latest entry: {latest}. Gap: {gap_days} day(s). Streak: {streak} days."),
            theme::home_view::CONTINUITY_WARN,
        ),
    };

    let meter = continuity.meter();
    vec![
        Line::from(status).fg(color).bold(),
        Line::from(detail),
        Line::from(vec![
            Span::styled(symbols::meter_bar(meter, METER_WIDTH), Style::default().fg(color)),
            Span::raw(format!(" {meter}%")),
        ]),
    ]
}

fn pulse_lines(panels: &HomePanels) -> Vec<Line<'static>> {
    let pulse = &panels.pulse;
    if pulse.entries == 0 {
        return vec![Line::from(empty::NO_PULSE)];
    }

    let origin = pulse
        .origin_span
        .map_or_else(|| empty::NO_VALUE.to_string(), |span| span.to_string());

    let mut counters = metric("Entries", pulse.entries.to_string());
    counters.extend(metric("Days", pulse.days.to_string()));
    let mut spans = metric("Longest streak", pulse.longest_streak.to_string());
    spans.extend(metric("Origin span", origin));

    let mut axes = vec![muted("Axes ")];
    for (i, count) in panels.axis_balance.iter().enumerate() {
        if i > 0 {
            axes.push(muted(markers::SEPARATOR));
        }
        axes.push(Span::styled(
            format!("{} {}", count.axis, count.count),
            Style::default().fg(theme::axis::color(count.axis)),
        ));
    }

    vec![
        Line::from(format!(
            "Tracking from {} through {}.",
            panels.origin_date, panels.latest_date
        )),
        Line::from(counters),
        Line::from(spans),
        Line::from(axes),
    ]
}

fn forecast_lines(panels: &HomePanels) -> Vec<Line<'static>> {
    let Some(forecast) = &panels.forecast else {
        return vec![Line::from(empty::NO_TRAJECTORY)];
    };

    let mut lines = vec![Line::from(format!(
        "Cadence: ~{} day(s). Last entry: {}. Today: {}. Status: {}.",
        forecast.cadence_days,
        panels.latest_date,
        panels.today,
        forecast.status.label()
    ))];
    for (step, date) in forecast.projections.iter().enumerate() {
        lines.push(Line::from(vec![
            muted(format!("Projection {} ", step + 1)),
            Span::raw(date.clone()),
        ]));
    }
    lines
}

fn recall_lines(panels: &HomePanels) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let drift = &panels.drift;
    if drift.items.is_empty() {
        lines.push(Line::from(empty::NO_DRIFT));
    } else {
        // one decimal, halves rounded up
        let average = ((drift.average_files * 10.0) + 0.5).floor() / 10.0;
        lines.push(Line::from(format!(
            "Scanning last {} entries. Avg files changed: {average:.1}. Latest anchor: {}.",
            drift.items.len(),
            panels.latest_date
        )));
        for item in &drift.items {
            lines.push(Line::from(item.title.clone()).bold());
            lines.push(Line::from(muted(format!(
                "Date: {} · Files: {} · Drift: {}",
                item.date,
                item.files,
                item.volatility.label()
            ))));
            lines.push(Line::from(item.summary.clone()));
        }
    }

    lines.push(Line::from(""));

    if panels.shards.is_empty() {
        lines.push(Line::from(empty::NO_SHARDS));
    } else {
        lines.push(Line::from(format!(
            "Projected {} shard(s) from recent history.",
            panels.shards.len()
        )));
        for shard in &panels.shards {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", markers::NODE)),
                Span::raw(shard.title.clone()).bold(),
                muted(format!("  {}", shard.date)),
            ]));
            lines.push(Line::from(format!("  {}", shard.summary)));
        }
    }

    lines
}
