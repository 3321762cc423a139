//! Repetition detector
//!
//! Heuristic early warning that recent entries keep making the same kind of
//! change. False positives and negatives are expected.

use super::constants::{FILE_JOIN_SEPARATOR, repetition};
use super::normalize::sort_by_date_desc;
use crate::model::{LogEntry, Repetition, RiskLevel};

/// Classify repetition risk over the most recent entries
pub fn detect_repetition(entries: &[LogEntry]) -> Repetition {
    let mut recent = sort_by_date_desc(entries);
    recent.truncate(repetition::WINDOW);

    if recent.len() < repetition::MIN_ENTRIES {
        return Repetition {
            risk: RiskLevel::Low,
            repeated_core: false,
            details: repetition::DETAILS_INSUFFICIENT.to_string(),
        };
    }

    let core_matches = recent
        .iter()
        .filter(|entry| matches_core_signature(entry))
        .count();
    let keyword_matches = recent
        .iter()
        .filter(|entry| has_panel_keyword(&entry.title))
        .count();

    if core_matches >= repetition::CORE_MATCH_THRESHOLD
        || keyword_matches >= repetition::KEYWORD_MATCH_THRESHOLD
    {
        return Repetition {
            risk: RiskLevel::High,
            repeated_core: true,
            details: repetition::DETAILS_HIGH.to_string(),
        };
    }

    Repetition {
        risk: RiskLevel::Medium,
        repeated_core: false,
        details: repetition::DETAILS_MEDIUM.to_string(),
    }
}

/// Sorted, joined file list of an entry
pub fn file_signature(entry: &LogEntry) -> String {
    let mut files: Vec<&str> = entry.files_changed.iter().map(String::as_str).collect();
    files.sort_unstable();
    files.join(FILE_JOIN_SEPARATOR)
}

fn matches_core_signature(entry: &LogEntry) -> bool {
    let signature = file_signature(entry);
    repetition::CORE_SIGNATURES.contains(&signature.as_str())
}

fn has_panel_keyword(title: &str) -> bool {
    let lower = title.to_lowercase();
    repetition::TITLE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
