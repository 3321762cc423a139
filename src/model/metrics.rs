//! Temporal metric and repetition risk models

use std::fmt;

/// Consecutive-day run lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streaks {
    /// Run ending at the latest recorded day
    pub current: usize,
    /// Longest run anywhere in the history
    pub longest: usize,
}

/// Spacing between log entries, in days
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cadence {
    /// Mean of the positive gaps between consecutive unique days
    pub average_gap: f64,
    /// Days elapsed from the latest entry to "today" (never negative)
    pub latest_gap: i64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            average_gap: 1.0,
            latest_gap: 0,
        }
    }
}

/// Repetition risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the repetition heuristic over the most recent entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repetition {
    pub risk: RiskLevel,
    /// True when recent runs keep touching the same core file set
    pub repeated_core: bool,
    /// Human-readable explanation
    pub details: String,
}
