//! Engine constants
//!
//! Heuristic tables (classification markers, repetition signatures, forge
//! templates) and tuning values. These are pattern matches against the
//! file names used by the tracked project; adjust them here rather than in
//! control flow.

use crate::model::Axis;

/// Marker substrings used by the axis classifier
///
/// Matching is a case-insensitive substring test against the changed file
/// list joined with `|`. Rules are evaluated in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMarkers {
    /// Workflow / autonomy / constitution markers
    pub governance: &'static [&'static str],
    /// Log data markers
    pub memory: &'static [&'static str],
    /// Memory only applies when at most this many files changed
    pub memory_max_files: usize,
    /// Runtime / source markers
    pub runtime: &'static [&'static str],
    /// Stylesheet / markup markers
    pub interface: &'static [&'static str],
}

/// Default classification markers
pub const AXIS_MARKERS: AxisMarkers = AxisMarkers {
    governance: &[".github/workflows", "autonomy", "constitution"],
    memory: &["log.json"],
    memory_max_files: 2,
    runtime: &["site.js", "src/"],
    interface: &["style.css", ".html"],
};

/// Separator used when joining file lists for matching and signatures
pub const FILE_JOIN_SEPARATOR: &str = "|";

/// Repetition detector tuning
pub mod repetition {
    /// Number of most recent entries inspected
    pub const WINDOW: usize = 6;
    /// Below this many recent entries the risk is always low
    pub const MIN_ENTRIES: usize = 3;
    /// Exact-signature matches needed for a high risk
    pub const CORE_MATCH_THRESHOLD: usize = 3;
    /// Keyword title matches needed for a high risk
    pub const KEYWORD_MATCH_THRESHOLD: usize = 4;
    /// Sorted, `|`-joined file sets considered the repeated UI core
    pub const CORE_SIGNATURES: &[&str] = &[
        "index.html|site.js|style.css",
        "index.html|log.json|site.js|style.css",
    ];
    /// Title keywords of metric/panel-style increments
    pub const TITLE_KEYWORDS: &[&str] = &["meter", "panel", "pulse", "forecast", "drift"];

    pub const DETAILS_INSUFFICIENT: &str =
        "Not enough recent data for strong repetition detection.";
    pub const DETAILS_HIGH: &str = "Recent runs repeatedly modified the same UI core files with metric/panel-style increments.";
    pub const DETAILS_MEDIUM: &str =
        "Some overlap exists, but not enough to classify as strong repetition.";
}

/// Number of paths reported in `dominant_files`
pub const DOMINANT_FILE_LIMIT: usize = 6;

/// Mutation forge tuning
pub mod forge {
    /// Size of the least-used file pool
    pub const WEAK_FILE_POOL: usize = 8;
    /// Above this novelty every template is eligible
    pub const NOVELTY_OPEN_THRESHOLD: f64 = 0.45;
    /// Extra touchpoint used when no file history exists
    pub const FALLBACK_FILE: &str = "log.json";
    pub const IMPACT_BASE: f64 = 0.45;
    pub const IMPACT_FLOOR: i64 = 20;
    pub const DISRUPTION_BASE: f64 = 1.0;
    pub const DISRUPTION_SPREAD: f64 = 4.0;
    pub const DISRUPTION_NOVELTY_OFFSET: f64 = 0.7;
    pub const DISRUPTION_FLOOR: i64 = 1;
    /// Upper end of the disruption scale shown to users
    pub const DISRUPTION_SCALE: i64 = 6;
}

/// A forge template: one proposal shape per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationTemplate {
    pub axis: Axis,
    pub title: &'static str,
    pub rationale: &'static str,
    pub files: &'static [&'static str],
}

/// Forge templates; the table order is part of the deterministic output
pub const MUTATION_TEMPLATES: [MutationTemplate; 5] = [
    MutationTemplate {
        axis: Axis::Runtime,
        title: "Split runtime into event-driven modules",
        rationale: "Reduce coupling by separating lifecycle, rendering, and data transforms.",
        files: &["site.js", "src/core/evolution-engine.js", "src/views/"],
    },
    MutationTemplate {
        axis: Axis::Governance,
        title: "Introduce adaptive autonomy policy",
        rationale: "Encode anti-stagnation thresholds directly into machine-readable governance.",
        files: &["CONSTITUTION.md", "AUTONOMY_PROMPT.md", "AUTONOMY_TASK.md"],
    },
    MutationTemplate {
        axis: Axis::Memory,
        title: "Version memory semantics",
        rationale: "Add schema versioning and migration rules to keep history evolvable.",
        files: &["log.json", "history.html", "src/core/log-data.js"],
    },
    MutationTemplate {
        axis: Axis::Interface,
        title: "Add alternate perception mode",
        rationale: "Let observers switch between analytic and poetic system views.",
        files: &["index.html", "style.css", "constellation.html"],
    },
    MutationTemplate {
        axis: Axis::Structure,
        title: "Reorganize repository topology",
        rationale: "Move from flat root to domain folders for long-term adaptability.",
        files: &["src/", "pages/", ".github/workflows/"],
    },
];

/// Constellation layout tuning
pub mod layout {
    /// Padding kept free on every side of the plane
    pub const PADDING: f64 = 36.0;
    /// Redraws of `y` allowed per node before accepting an overlap
    pub const MAX_RETRIES: usize = 20;
    pub const MIN_RADIUS: f64 = 6.0;
    pub const MAX_RADIUS: f64 = 18.0;
    /// Radius growth per changed file
    pub const RADIUS_PER_FILE: f64 = 1.8;
    /// Default gap between node rims
    pub const DEFAULT_SPACING: f64 = 24.0;
    /// Plane used when the caller has no pixel size of its own
    pub const DEFAULT_WIDTH: f64 = 600.0;
    pub const DEFAULT_HEIGHT: f64 = 420.0;
}

/// Home dashboard insight tuning
pub mod insight {
    /// Recent entries eligible for memory shards
    pub const SHARD_POOL: usize = 12;
    /// Shards shown
    pub const SHARD_COUNT: usize = 3;
    pub const SHARD_SUMMARY_LIMIT: usize = 120;
    /// Recent entries scanned for drift
    pub const DRIFT_WINDOW: usize = 7;
    pub const DRIFT_SUMMARY_LIMIT: usize = 140;
    /// Forecast steps
    pub const FORECAST_STEPS: i64 = 3;
    /// Minimum denominator of the continuity meter
    pub const CONTINUITY_MIN_DAYS: usize = 3;
    /// Seed used for shards when no day is known
    pub const SHARD_FALLBACK_SEED: &str = "unfinished";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_template_per_axis() {
        for axis in Axis::ALL {
            let count = MUTATION_TEMPLATES.iter().filter(|t| t.axis == axis).count();
            assert_eq!(count, 1, "axis {axis} should have exactly one template");
        }
    }

    #[test]
    fn test_core_signatures_are_sorted() {
        for signature in repetition::CORE_SIGNATURES {
            let mut parts: Vec<&str> = signature.split(FILE_JOIN_SEPARATOR).collect();
            let original = parts.clone();
            parts.sort_unstable();
            assert_eq!(parts, original);
        }
    }

    #[test]
    fn test_markers_are_lowercase() {
        let all = AXIS_MARKERS
            .governance
            .iter()
            .chain(AXIS_MARKERS.memory)
            .chain(AXIS_MARKERS.runtime)
            .chain(AXIS_MARKERS.interface);
        for marker in all {
            assert_eq!(*marker, marker.to_lowercase());
        }
    }
}
