//! Log entry data model

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number of leading characters of `date` that identify the calendar day
pub const DAY_PREFIX_LEN: usize = 10;

/// One record of the evolution log (`log.json`)
///
/// Every field is optional in the source document. Missing fields and
/// fields of an unexpected JSON type fall back to their empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    /// ISO-ish date; only the first 10 characters are significant
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,

    /// Short headline of the change
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,

    /// Free-form description
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,

    /// Paths touched by the change, in recorded order
    #[serde(deserialize_with = "lenient_files")]
    pub files_changed: Vec<String>,
}

impl LogEntry {
    /// Calendar day of this entry (`YYYY-MM-DD`), empty when no date was recorded
    pub fn day(&self) -> &str {
        match self.date.char_indices().nth(DAY_PREFIX_LEN) {
            Some((end, _)) => &self.date[..end],
            None => &self.date,
        }
    }

    /// Number of changed files
    pub fn file_count(&self) -> usize {
        self.files_changed.len()
    }

    /// Title for display, `"Untitled"` when empty
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Date for display, `"unknown"` when empty
    pub fn display_date(&self) -> &str {
        if self.date.is_empty() {
            "unknown"
        } else {
            &self.date
        }
    }
}

/// Accept strings as-is, render numbers and booleans as text, drop everything else
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Accept only arrays; scalar members are kept as text
fn lenient_files<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.iter().filter_map(scalar_text).collect()),
        _ => Ok(Vec::new()),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
