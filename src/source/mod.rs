//! Evolution log loading
//!
//! Reads the JSON log from disk. Only an unreadable file is an error; a
//! payload that is not a JSON array of objects degrades to an empty log.

mod loader;

pub use loader::{DEFAULT_LOG_PATH, load_log, parse_entries};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the log
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Log file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
