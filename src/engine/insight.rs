//! Home dashboard insights
//!
//! Small derived views of the model: continuity, memory shards, drift,
//! forecast, pulse and intent.

use chrono::NaiveDate;

use super::constants::insight;
use super::random::SeededRandom;
use super::time::{add_days, day_delta, to_day_string};
use crate::model::{
    Continuity, Drift, DriftItem, EvolutionModel, Forecast, ForecastStatus, LogEntry, MemoryShard,
    Pulse, RiskLevel, UNKNOWN_DATE, Volatility,
};

/// Continuity of the log relative to `today`
pub fn continuity(model: &EvolutionModel, today: NaiveDate) -> Continuity {
    if model.days.is_empty() {
        return Continuity::Unverified;
    }

    let streak = model.streaks.current;
    let ratio = streak as f64 / model.days.len().max(insight::CONTINUITY_MIN_DAYS) as f64;
    let meter = (ratio * 100.0).round().min(100.0) as u8;
    let gap_days = model.cadence.latest_gap;

    if gap_days == 0 && model.latest_date == to_day_string(today) {
        Continuity::Intact { streak, meter }
    } else {
        Continuity::NeedsAttention {
            latest: model.latest_date.clone(),
            gap_days,
            streak,
            meter,
        }
    }
}

/// Recall a few recent entries in a reproducible shuffled order
pub fn memory_shards(model: &EvolutionModel) -> Vec<MemoryShard> {
    let seed = if model.latest_date == UNKNOWN_DATE {
        insight::SHARD_FALLBACK_SEED
    } else {
        model.latest_date.as_str()
    };
    let mut random = SeededRandom::from_text(seed);
    let mut pool: Vec<&LogEntry> = model
        .desc_entries
        .iter()
        .take(insight::SHARD_POOL)
        .collect();

    // Fisher–Yates, walking down from the end
    for i in (1..pool.len()).rev() {
        let j = (random.next_f64() * (i + 1) as f64).floor() as usize;
        pool.swap(i, j.min(i));
    }

    pool.into_iter()
        .take(insight::SHARD_COUNT)
        .map(|entry| MemoryShard {
            title: entry.display_title().to_string(),
            date: if entry.date.is_empty() {
                "Unknown date".to_string()
            } else {
                entry.date.clone()
            },
            summary: truncate_summary(&entry.summary, insight::SHARD_SUMMARY_LIMIT)
                .unwrap_or_else(|| "Summary withheld.".to_string()),
        })
        .collect()
}

/// File-count volatility of the most recent entries
pub fn drift(model: &EvolutionModel) -> Drift {
    let items: Vec<DriftItem> = model
        .desc_entries
        .iter()
        .take(insight::DRIFT_WINDOW)
        .map(|entry| DriftItem {
            title: entry.display_title().to_string(),
            date: if entry.date.is_empty() {
                "Unknown".to_string()
            } else {
                entry.date.clone()
            },
            files: entry.file_count(),
            volatility: Volatility::from_file_count(entry.file_count()),
            summary: truncate_summary(&entry.summary, insight::DRIFT_SUMMARY_LIMIT)
                .unwrap_or_else(|| "Signal muted.".to_string()),
        })
        .collect();

    let average_files = if items.is_empty() {
        0.0
    } else {
        items.iter().map(|i| i.files).sum::<usize>() as f64 / items.len() as f64
    };

    Drift {
        items,
        average_files,
    }
}

/// Projected next entry dates; `None` without any recorded day
pub fn forecast(model: &EvolutionModel) -> Option<Forecast> {
    if model.days.is_empty() {
        return None;
    }

    let cadence_days = (model.cadence.average_gap.round() as i64).max(1);
    let gap = model.cadence.latest_gap;
    let status = if gap > cadence_days {
        ForecastStatus::Drifting
    } else if gap == 0 {
        ForecastStatus::Aligned
    } else {
        ForecastStatus::Holding
    };

    let projections = (1..=insight::FORECAST_STEPS)
        .filter_map(|step| add_days(&model.latest_date, cadence_days * step))
        .collect();

    Some(Forecast {
        cadence_days,
        status,
        projections,
    })
}

/// Headline counters
pub fn pulse(model: &EvolutionModel, today: NaiveDate) -> Pulse {
    let origin_span = if model.origin_date == UNKNOWN_DATE {
        None
    } else {
        day_delta(&model.origin_date, &to_day_string(today)).map(|span| span.max(0))
    };

    Pulse {
        entries: model.entries.len(),
        days: model.days.len(),
        longest_streak: model.streaks.longest,
        origin_span,
    }
}

/// One-sentence direction derived from the repetition risk
pub fn intent(model: &EvolutionModel) -> &'static str {
    if model.repetition.risk == RiskLevel::High {
        "Evolution intent: break repetition by shifting from panel increments into structural/runtime mutations."
    } else {
        "Evolution intent: continue diversification across governance, runtime, and memory axes."
    }
}

/// Shorten to `limit` characters with a trailing ellipsis; `None` when empty
fn truncate_summary(text: &str, limit: usize) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    if text.chars().count() <= limit {
        return Some(text.to_string());
    }
    let head: String = text.chars().take(limit.saturating_sub(3)).collect();
    Some(format!("{}...", head.trim()))
}
