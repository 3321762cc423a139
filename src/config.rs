//! Command-line configuration

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Parser;

use crate::engine::constants::layout;
use crate::engine::time::parse_day;
use crate::model::DEFAULT_NOVELTY;
use crate::source::DEFAULT_LOG_PATH;

/// Candidates requested by the forge view
pub const DASHBOARD_CANDIDATE_COUNT: usize = 5;

/// Terminal dashboard for an evolution log
#[derive(Debug, Clone, Parser)]
#[command(name = "evoscope", version, about)]
pub struct Config {
    /// Path of the JSON log
    #[arg(env = "EVOSCOPE_LOG_PATH", default_value = DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// Initial forge novelty (0.0 - 1.0)
    #[arg(long, default_value_t = DEFAULT_NOVELTY)]
    pub novelty: f64,

    /// Number of forge candidates
    #[arg(long, default_value_t = DASHBOARD_CANDIDATE_COUNT)]
    pub count: usize,

    /// Initial constellation spacing
    #[arg(long, default_value_t = layout::DEFAULT_SPACING)]
    pub spacing: f64,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Write tracing output to this file
    #[arg(long, env = "EVOSCOPE_TRACE_FILE")]
    pub trace_file: Option<PathBuf>,
}

impl Config {
    /// The configured day, or the current UTC day
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: PathBuf::from(DEFAULT_LOG_PATH),
            novelty: DEFAULT_NOVELTY,
            count: DASHBOARD_CANDIDATE_COUNT,
            spacing: layout::DEFAULT_SPACING,
            today: None,
            trace_file: None,
        }
    }
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_day(value).ok_or_else(|| format!("expected YYYY-MM-DD, got '{value}'"))
}
