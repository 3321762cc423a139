//! Home View: the dashboard landing page
//!
//! Shows the latest entry together with the continuity, pulse, forecast,
//! drift and memory panels and a one-line evolution intent.

mod input;
mod render;

use chrono::NaiveDate;

use crate::engine::{insight, time::to_day_string};
use crate::model::{
    AxisCount, Continuity, Drift, EvolutionModel, Forecast, LogEntry, MemoryShard, Pulse,
    RiskLevel,
};

/// Action returned by the Home View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// No action needed
    None,
    /// Jump to the History View
    OpenHistory,
}

/// Everything the home panels display, computed once per model
#[derive(Debug, Clone, PartialEq)]
pub struct HomePanels {
    pub latest: Option<LogEntry>,
    pub continuity: Continuity,
    pub pulse: Pulse,
    pub forecast: Option<Forecast>,
    pub drift: Drift,
    pub shards: Vec<MemoryShard>,
    pub intent: &'static str,
    pub risk: RiskLevel,
    pub axis_balance: Vec<AxisCount>,
    pub origin_date: String,
    pub latest_date: String,
    pub today: String,
}

impl HomePanels {
    /// Derive all panels from `model` as seen on `today`
    pub fn from_model(model: &EvolutionModel, today: NaiveDate) -> Self {
        Self {
            latest: model.latest_entry().cloned(),
            continuity: insight::continuity(model, today),
            pulse: insight::pulse(model, today),
            forecast: insight::forecast(model),
            drift: insight::drift(model),
            shards: insight::memory_shards(model),
            intent: insight::intent(model),
            risk: model.repetition.risk,
            axis_balance: model.axis_balance.clone(),
            origin_date: model.origin_date.clone(),
            latest_date: model.latest_date.clone(),
            today: to_day_string(today),
        }
    }
}

/// Home View state
#[derive(Debug, Default)]
pub struct HomeView {
    pub(super) panels: Option<HomePanels>,
    /// Scroll offset of the drift and memory column
    pub(super) scroll: u16,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panels after a model rebuild
    pub fn set_model(&mut self, model: &EvolutionModel, today: NaiveDate) {
        self.panels = Some(HomePanels::from_model(model, today));
        self.scroll = 0;
    }

    /// Currently displayed panels
    pub fn panels(&self) -> Option<&HomePanels> {
        self.panels.as_ref()
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
