//! Application state and view management

use chrono::NaiveDate;

use crate::config::Config;
use crate::engine::build_model;
use crate::model::{EvolutionModel, LogEntry, Notification};
use crate::ui::views::{ConstellationView, ForgeView, HistoryView, HomeView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    History,
    Constellation,
    Forge,
    Help,
}

impl View {
    /// Next view in Tab order (Help returns to Home)
    pub fn next(self) -> View {
        match self {
            View::Home => View::History,
            View::History => View::Constellation,
            View::Constellation => View::Forge,
            View::Forge | View::Help => View::Home,
        }
    }
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for leaving Help)
    pub(crate) previous_view: Option<View>,
    /// Command-line configuration
    pub config: Config,
    /// Day used for gap, continuity and pulse computations
    pub today: NaiveDate,
    /// Current analytics snapshot
    pub model: EvolutionModel,
    pub home_view: HomeView,
    pub history_view: HistoryView,
    pub constellation_view: ConstellationView,
    pub forge_view: ForgeView,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
}

impl App {
    /// Construct the app and load the configured log
    pub fn new(config: Config) -> Self {
        let mut app = Self::empty(config);
        app.reload();
        app
    }

    /// Construct the app from already parsed entries (no file access)
    pub fn with_entries(config: Config, entries: Vec<LogEntry>) -> Self {
        let mut app = Self::empty(config);
        app.apply_entries(entries);
        app
    }

    fn empty(config: Config) -> Self {
        let today = config.today();
        Self {
            running: true,
            current_view: View::Home,
            previous_view: None,
            today,
            model: build_model(Vec::new(), today),
            home_view: HomeView::new(),
            history_view: HistoryView::new(),
            constellation_view: ConstellationView::new(config.spacing),
            forge_view: ForgeView::new(config.novelty, config.count),
            help_scroll: 0,
            error_message: None,
            notification: None,
            config,
        }
    }

    /// Switch to next view (Tab key)
    pub(crate) fn next_view(&mut self) {
        self.go_to_view(self.current_view.next());
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            if view == View::Help {
                self.help_scroll = 0;
            }
            self.previous_view = Some(self.current_view);
            self.current_view = view;
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        self.current_view = self.previous_view.take().unwrap_or(View::Home);
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.is_expired())
        {
            self.notification = None;
        }
    }
}
