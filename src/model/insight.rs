//! Home dashboard insight models
//!
//! Derived from an [`super::EvolutionModel`] by `engine::insight`.

/// Whether the log is being kept up day by day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuity {
    /// No days recorded
    Unverified,
    /// Latest entry is from today
    Intact { streak: usize, meter: u8 },
    /// Latest entry is older than today
    NeedsAttention {
        latest: String,
        gap_days: i64,
        streak: usize,
        meter: u8,
    },
}

impl Continuity {
    /// Fill level of the continuity bar, in percent
    pub fn meter(&self) -> u8 {
        match self {
            Continuity::Unverified => 0,
            Continuity::Intact { meter, .. } | Continuity::NeedsAttention { meter, .. } => *meter,
        }
    }
}

/// One recalled entry in the memory panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryShard {
    pub title: String,
    pub date: String,
    pub summary: String,
}

/// File-count based volatility label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volatility {
    Trace,
    Low,
    Medium,
    High,
}

impl Volatility {
    /// Classify by number of changed files
    pub fn from_file_count(files: usize) -> Self {
        match files {
            0 => Volatility::Trace,
            1..=2 => Volatility::Low,
            3..=5 => Volatility::Medium,
            _ => Volatility::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Volatility::Trace => "Trace",
            Volatility::Low => "Low",
            Volatility::Medium => "Medium",
            Volatility::High => "High",
        }
    }
}

/// One recent entry in the drift panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftItem {
    pub title: String,
    pub date: String,
    pub files: usize,
    pub volatility: Volatility,
    pub summary: String,
}

/// Drift scan over the most recent entries
#[derive(Debug, Clone, PartialEq)]
pub struct Drift {
    pub items: Vec<DriftItem>,
    /// Mean file count over `items`
    pub average_files: f64,
}

/// Relationship between the latest gap and the usual cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastStatus {
    Aligned,
    Holding,
    Drifting,
}

impl ForecastStatus {
    pub fn label(self) -> &'static str {
        match self {
            ForecastStatus::Aligned => "Aligned",
            ForecastStatus::Holding => "Holding",
            ForecastStatus::Drifting => "Drifting",
        }
    }
}

/// Projection of upcoming entry dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forecast {
    /// Rounded average gap, at least 1
    pub cadence_days: i64,
    pub status: ForecastStatus,
    /// Projected `YYYY-MM-DD` dates
    pub projections: Vec<String>,
}

/// Headline counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulse {
    pub entries: usize,
    pub days: usize,
    pub longest_streak: usize,
    /// Days from the first recorded day to today
    pub origin_span: Option<i64>,
}
