//! Evolution model snapshot
//!
//! Built whole by [`crate::engine::build_model`] and never mutated afterwards.
//! Reloading the log produces a new snapshot that replaces the previous one.

use std::collections::BTreeMap;

use super::{Axis, Cadence, LogEntry, Repetition, Streaks};

/// Placeholder for `latest_date`/`origin_date` when no day is known
pub const UNKNOWN_DATE: &str = "unknown";

/// One point of the chronological timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineNode {
    /// Stable identifier (`entry-<index>`)
    pub id: String,
    /// Position in ascending date order
    pub index: usize,
    /// Raw date, or `"unknown"` when missing
    pub date: String,
    /// Title, or `"Untitled"` when missing
    pub title: String,
    pub summary: String,
    /// Number of changed files
    pub files_changed: usize,
    pub axis: Axis,
    /// Index of the originating entry in [`EvolutionModel::entries`]
    pub source: usize,
}

/// Number of timeline nodes classified to one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCount {
    pub axis: Axis,
    pub count: usize,
}

/// Immutable analytics snapshot consumed by every view
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionModel {
    /// Raw input in original order
    pub entries: Vec<LogEntry>,
    /// Entries sorted by date string, ascending (stable)
    pub asc_entries: Vec<LogEntry>,
    /// Entries sorted by date string, descending (stable)
    pub desc_entries: Vec<LogEntry>,
    /// One node per entry, in ascending order
    pub timeline: Vec<TimelineNode>,
    /// Unique `YYYY-MM-DD` days, strictly ascending
    pub days: Vec<String>,
    pub streaks: Streaks,
    pub cadence: Cadence,
    pub repetition: Repetition,
    /// Occurrences of each path across all entries
    pub file_frequency: BTreeMap<String, usize>,
    /// Most frequently touched paths, descending
    pub dominant_files: Vec<String>,
    /// Node count per axis, in [`Axis::ALL`] order
    pub axis_balance: Vec<AxisCount>,
    pub latest_date: String,
    pub origin_date: String,
}

impl EvolutionModel {
    /// True when the log had no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry by date
    pub fn latest_entry(&self) -> Option<&LogEntry> {
        self.desc_entries.first()
    }

    /// The raw entry a timeline node was built from
    pub fn entry_of(&self, node: &TimelineNode) -> Option<&LogEntry> {
        self.entries.get(node.source)
    }

    /// Count recorded for `axis` in [`EvolutionModel::axis_balance`]
    pub fn axis_count(&self, axis: Axis) -> usize {
        self.axis_balance
            .iter()
            .find(|c| c.axis == axis)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}
