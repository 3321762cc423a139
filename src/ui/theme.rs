//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::model::{Axis, RiskLevel};

/// Shared selection colors
pub mod selection {
    use super::*;

    pub const FG: Color = Color::Black;
    pub const BG: Color = Color::Cyan;
}

/// Axis palette (hue, saturation, base lightness, lightness range)
pub mod axis {
    use super::*;

    pub const GOVERNANCE: (f64, f64, f64, f64) = (12.0, 0.58, 0.38, 0.20);
    pub const MEMORY: (f64, f64, f64, f64) = (196.0, 0.55, 0.35, 0.24);
    pub const RUNTIME: (f64, f64, f64, f64) = (162.0, 0.50, 0.34, 0.26);
    pub const INTERFACE: (f64, f64, f64, f64) = (46.0, 0.70, 0.44, 0.18);
    pub const STRUCTURE: (f64, f64, f64, f64) = (276.0, 0.35, 0.38, 0.26);

    fn palette(axis: Axis) -> (f64, f64, f64, f64) {
        match axis {
            Axis::Governance => GOVERNANCE,
            Axis::Memory => MEMORY,
            Axis::Runtime => RUNTIME,
            Axis::Interface => INTERFACE,
            Axis::Structure => STRUCTURE,
        }
    }

    /// Mid-tone color for an axis label
    pub fn color(axis: Axis) -> Color {
        shade(axis, 1.0)
    }

    /// Axis color brightened by chronological progress (`0.0..=1.0`)
    pub fn shade(axis: Axis, progress: f64) -> Color {
        let (hue, saturation, base, range) = palette(axis);
        let lightness = base + progress.clamp(0.0, 1.0) * range;
        hsl_to_rgb(hue, saturation, lightness)
    }
}

/// Colors for repetition risk
pub mod risk {
    use super::*;

    pub const LOW: Color = Color::Green;
    pub const MEDIUM: Color = Color::Yellow;
    pub const HIGH: Color = Color::Red;

    pub fn color(level: RiskLevel) -> Color {
        match level {
            RiskLevel::Low => LOW,
            RiskLevel::Medium => MEDIUM,
            RiskLevel::High => HIGH,
        }
    }
}

/// Colors for Home View
pub mod home_view {
    use super::*;

    /// Panel titles
    pub const PANEL_TITLE: Color = Color::Cyan;
    /// Continuity bar when the log is current
    pub const CONTINUITY_OK: Color = Color::Green;
    /// Continuity bar when a gap is open
    pub const CONTINUITY_WARN: Color = Color::Yellow;
    /// Dates and secondary text
    pub const MUTED: Color = Color::DarkGray;
    /// Headline numbers
    pub const METRIC: Color = Color::Yellow;
}

/// Colors for History View
pub mod history_view {
    use super::*;

    pub const DATE: Color = Color::Yellow;
    pub const FILE: Color = Color::Gray;
}

/// Colors for Constellation View
pub mod constellation_view {
    use super::*;

    /// Chronological path between nodes
    pub const PATH: Color = Color::DarkGray;
    /// Node labels
    pub const LABEL: Color = Color::Gray;
    /// Selected node ring and tooltip
    pub const SELECTED: Color = Color::White;
}

/// Colors for Forge View
pub mod forge_view {
    use super::*;

    pub const NOVELTY: Color = Color::Magenta;
    pub const IMPACT: Color = Color::Green;
    pub const DISRUPTION: Color = Color::Red;
    pub const FILE: Color = Color::Gray;
}

/// Convert HSL (hue in degrees, saturation and lightness in `0..=1`) to RGB
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Color {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = (hue.rem_euclid(360.0)) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
