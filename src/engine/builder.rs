//! Evolution model builder

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use super::axis::classify_axis;
use super::constants::DOMINANT_FILE_LIMIT;
use super::metrics::{compute_streaks, summarize_cadence};
use super::normalize::{sort_by_date_asc, sort_by_date_desc, unique_days};
use super::repetition::detect_repetition;
use crate::model::{Axis, AxisCount, EvolutionModel, LogEntry, TimelineNode, UNKNOWN_DATE};

/// Build the immutable analytics snapshot for `entries`
///
/// `today` is the caller's current UTC day, used only for the latest gap.
/// Tolerates empty input, missing fields, duplicate and unsorted dates.
pub fn build_model(entries: Vec<LogEntry>, today: NaiveDate) -> EvolutionModel {
    let asc_entries = sort_by_date_asc(&entries);
    let desc_entries = sort_by_date_desc(&entries);
    let days = unique_days(&entries);
    let streaks = compute_streaks(&days);
    let cadence = summarize_cadence(&days, today);
    let repetition = detect_repetition(&entries);
    let file_frequency = collect_file_frequency(&entries);
    let dominant_files = top_files(&file_frequency, DOMINANT_FILE_LIMIT);
    let timeline = build_timeline(&entries);
    let axis_balance = axis_balance(&timeline);

    let latest_date = days
        .last()
        .cloned()
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());
    let origin_date = days
        .first()
        .cloned()
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    debug!(
        entries = entries.len(),
        days = days.len(),
        risk = %repetition.risk,
        "built evolution model"
    );

    EvolutionModel {
        entries,
        asc_entries,
        desc_entries,
        timeline,
        days,
        streaks,
        cadence,
        repetition,
        file_frequency,
        dominant_files,
        axis_balance,
        latest_date,
        origin_date,
    }
}

/// Timeline nodes in ascending date order, each pointing back at its entry
fn build_timeline(entries: &[LogEntry]) -> Vec<TimelineNode> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[a].date.cmp(&entries[b].date));

    order
        .into_iter()
        .enumerate()
        .map(|(index, source)| {
            let entry = &entries[source];
            TimelineNode {
                id: format!("entry-{index}"),
                index,
                date: entry.display_date().to_string(),
                title: entry.display_title().to_string(),
                summary: entry.summary.clone(),
                files_changed: entry.file_count(),
                axis: classify_axis(entry),
                source,
            }
        })
        .collect()
}

/// Occurrences of every path across all entries
pub fn collect_file_frequency(entries: &[LogEntry]) -> BTreeMap<String, usize> {
    let mut frequency = BTreeMap::new();
    for file in entries.iter().flat_map(|e| &e.files_changed) {
        *frequency.entry(file.clone()).or_insert(0) += 1;
    }
    frequency
}

/// Up to `limit` paths by descending count; equal counts stay in key order
pub fn top_files(frequency: &BTreeMap<String, usize>, limit: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, &usize)> = frequency.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(file, _)| file.clone())
        .collect()
}

/// Node count per axis in [`Axis::ALL`] order
fn axis_balance(timeline: &[TimelineNode]) -> Vec<AxisCount> {
    Axis::ALL
        .iter()
        .map(|&axis| AxisCount {
            axis,
            count: timeline.iter().filter(|node| node.axis == axis).count(),
        })
        .collect()
}
