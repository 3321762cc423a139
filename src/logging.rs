//! Tracing setup
//!
//! The terminal belongs to the UI, so diagnostics only go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive
pub const LOG_FILTER_ENV: &str = "EVOSCOPE_LOG";

/// Install a file-backed subscriber when `trace_file` is given
///
/// The filter comes from `EVOSCOPE_LOG`, defaulting to `info`.
pub fn init(trace_file: Option<&Path>) -> color_eyre::Result<()> {
    let Some(path) = trace_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
