//! Mutation candidate (forge proposal) model

use super::Axis;

/// Default novelty when the caller does not supply one
pub const DEFAULT_NOVELTY: f64 = 0.7;

/// Default number of candidates per request
pub const DEFAULT_CANDIDATE_COUNT: usize = 4;

/// Parameters of one forge request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForgeOptions {
    /// Exploration level, expected in `[0, 1]`
    pub novelty: f64,
    /// Number of candidates to generate
    pub count: usize,
}

impl Default for ForgeOptions {
    fn default() -> Self {
        Self {
            novelty: DEFAULT_NOVELTY,
            count: DEFAULT_CANDIDATE_COUNT,
        }
    }
}

/// A generated, non-binding proposal for a future change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationCandidate {
    /// `mutation-<n>`, 1-based
    pub id: String,
    pub axis: Axis,
    pub title: String,
    pub rationale: String,
    /// Predicted impact in percent (at least 20)
    pub predicted_impact: i64,
    /// Disruption score (at least 1)
    pub disruption: i64,
    /// Proposed touchpoints, de-duplicated, first-seen order
    pub files: Vec<String>,
}
