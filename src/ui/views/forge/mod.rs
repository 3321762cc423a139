//! Forge View: seeded mutation proposals

mod input;
mod render;

use crate::model::{EvolutionModel, ForgeOptions, MutationCandidate, RiskLevel};
use crate::ui::navigation;

/// Novelty change per key press
pub const NOVELTY_STEP: f64 = 0.05;

/// Action returned by the Forge View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgeAction {
    /// No action needed
    None,
    /// Candidates must be generated again with the current options
    Regenerate,
}

/// Forge View state
#[derive(Debug)]
pub struct ForgeView {
    pub(super) novelty: f64,
    pub(super) count: usize,
    pub(super) candidates: Vec<MutationCandidate>,
    pub(super) risk: RiskLevel,
    pub(super) risk_details: String,
    pub(super) selected: usize,
}

impl Default for ForgeView {
    fn default() -> Self {
        let options = ForgeOptions::default();
        Self::new(options.novelty, options.count)
    }
}

impl ForgeView {
    pub fn new(novelty: f64, count: usize) -> Self {
        Self {
            novelty: novelty.clamp(0.0, 1.0),
            count,
            candidates: Vec::new(),
            risk: RiskLevel::Low,
            risk_details: String::new(),
            selected: 0,
        }
    }

    /// Pick up the repetition verdict of a rebuilt model
    pub fn set_model(&mut self, model: &EvolutionModel) {
        self.risk = model.repetition.risk;
        self.risk_details = model.repetition.details.clone();
    }

    pub fn set_candidates(&mut self, candidates: Vec<MutationCandidate>) {
        self.candidates = candidates;
        self.selected = 0;
    }

    pub fn candidates(&self) -> &[MutationCandidate] {
        &self.candidates
    }

    /// Options for the next generation request
    pub fn options(&self) -> ForgeOptions {
        ForgeOptions {
            novelty: self.novelty,
            count: self.count,
        }
    }

    pub fn novelty(&self) -> f64 {
        self.novelty
    }

    /// Change novelty by `delta` within `[0, 1]`; returns whether it changed
    pub fn adjust_novelty(&mut self, delta: f64) -> bool {
        let next = navigation::step_value(self.novelty, delta, 0.0, 1.0);
        let changed = next != self.novelty;
        self.novelty = next;
        changed
    }

    pub fn select_next(&mut self) {
        self.selected =
            navigation::select_next(self.selected, navigation::last_index(self.candidates.len()));
    }

    pub fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
    }
}
