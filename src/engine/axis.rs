//! Axis classifier

use super::constants::{AXIS_MARKERS, AxisMarkers, FILE_JOIN_SEPARATOR};
use crate::model::{Axis, LogEntry};

/// Classify an entry with the default markers
pub fn classify_axis(entry: &LogEntry) -> Axis {
    classify_axis_with(&entry.files_changed, &AXIS_MARKERS)
}

/// Classify a changed-file list; the first matching rule wins
pub fn classify_axis_with(files: &[String], markers: &AxisMarkers) -> Axis {
    let joined = files.join(FILE_JOIN_SEPARATOR).to_lowercase();
    let contains_any = |list: &[&str]| list.iter().any(|marker| joined.contains(marker));

    if contains_any(markers.governance) {
        Axis::Governance
    } else if contains_any(markers.memory) && files.len() <= markers.memory_max_files {
        Axis::Memory
    } else if contains_any(markers.runtime) {
        Axis::Runtime
    } else if contains_any(markers.interface) {
        Axis::Interface
    } else {
        Axis::Structure
    }
}
