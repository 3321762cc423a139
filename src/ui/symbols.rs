//! UI symbols (markers, separators, placeholder texts)

/// Markers used in lists and on the constellation
pub mod markers {
    /// Timeline node in lists
    pub const NODE: char = '●';
    /// Selected row / node
    pub const SELECTED: char = '▶';
    /// Inline separator between fields
    pub const SEPARATOR: &str = " · ";
}

/// Text meter characters
pub mod meter {
    pub const FILLED: char = '█';
    pub const EMPTY: char = '░';
}

/// Empty state texts
pub mod empty {
    pub const NO_ENTRIES: &str = "No entries yet.";
    pub const NO_CANDIDATES: &str = "No candidates available.";
    pub const NO_SHARDS: &str = "No shards yet.";
    pub const NO_DRIFT: &str = "No drift to measure yet.";
    pub const NO_TRAJECTORY: &str = "No trajectory yet.";
    pub const NO_PULSE: &str = "No measurable pulse yet.";
    /// Placeholder for an unknown origin span
    pub const NO_VALUE: &str = "--";
}

/// Render a fixed-width text bar filled to `percent`
pub fn meter_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    let mut bar = String::with_capacity(width * 3);
    bar.extend(std::iter::repeat_n(meter::FILLED, filled));
    bar.extend(std::iter::repeat_n(meter::EMPTY, width - filled));
    bar
}
