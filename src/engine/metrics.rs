//! Temporal metrics: streaks and cadence

use chrono::NaiveDate;

use super::time::{day_delta, to_day_string};
use crate::model::{Cadence, Streaks};

/// Current and longest runs of consecutive days
///
/// `days` must be sorted ascending and unique. A pair extends the run only
/// when it is exactly one day apart; unparseable days break the run.
pub fn compute_streaks(days: &[String]) -> Streaks {
    if days.is_empty() {
        return Streaks::default();
    }

    let mut longest = 1;
    let mut current = 1;
    for pair in days.windows(2) {
        if day_delta(&pair[0], &pair[1]) == Some(1) {
            current += 1;
        } else {
            longest = longest.max(current);
            current = 1;
        }
    }

    Streaks {
        current,
        longest: longest.max(current),
    }
}

/// Average gap between entry days and the gap from the latest day to `today`
///
/// Only positive gaps count toward the average; without any the average is 1.
/// The latest gap is measured whenever a day is known, so a single recorded
/// day still reports its distance to `today`.
pub fn summarize_cadence(days: &[String], today: NaiveDate) -> Cadence {
    let gaps: Vec<i64> = days
        .windows(2)
        .filter_map(|pair| day_delta(&pair[0], &pair[1]))
        .filter(|delta| *delta > 0)
        .collect();

    let average_gap = if gaps.is_empty() {
        1.0
    } else {
        gaps.iter().sum::<i64>() as f64 / gaps.len() as f64
    };

    let latest_gap = days
        .last()
        .and_then(|latest| day_delta(latest, &to_day_string(today)))
        .map_or(0, |gap| gap.max(0));

    Cadence {
        average_gap,
        latest_gap,
    }
}
