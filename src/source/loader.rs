//! JSON log reader

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use super::LoadError;
use crate::model::LogEntry;

/// Log file read when no path is given
pub const DEFAULT_LOG_PATH: &str = "log.json";

/// Read and parse the log at `path`
pub fn load_log(path: &Path) -> Result<Vec<LogEntry>, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    let entries = parse_entries(&text);
    info!(path = %path.display(), entries = entries.len(), "loaded evolution log");
    Ok(entries)
}

/// Parse a log document
///
/// Anything other than a JSON array yields an empty collection. Array
/// members that are not objects become empty entries.
pub fn parse_entries(text: &str) -> Vec<LogEntry> {
    let items = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(kind = value_kind(&other), "log payload is not an array");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "log payload is not valid JSON");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .map(|item| LogEntry::deserialize(item).unwrap_or_default())
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
