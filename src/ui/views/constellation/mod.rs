//! Constellation View: the timeline as a scatter of nodes
//!
//! Node placement comes from `engine::layout_constellation`; this view only
//! keeps the spacing, label toggle and selection.

mod input;
mod render;

use crate::engine::constants::layout;
use crate::model::{Axis, EvolutionModel, NodePosition};
use crate::ui::navigation;
use crate::ui::symbols::markers;

/// Smallest selectable spacing
pub const MIN_SPACING: f64 = 8.0;
/// Largest selectable spacing
pub const MAX_SPACING: f64 = 64.0;
/// Spacing change per key press
pub const SPACING_STEP: f64 = 4.0;

/// Timelines longer than this only label their most recent nodes
const LABEL_CROWD_LIMIT: usize = 12;
/// Nodes listed under "Recent" and labelled on crowded timelines
const RECENT_COUNT: usize = 6;

/// Action returned by the Constellation View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstellationAction {
    /// No action needed
    None,
    /// Spacing changed; positions must be recomputed
    Relayout,
}

/// Display data of one timeline node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstellationNode {
    pub title: String,
    pub date: String,
    pub axis: Axis,
}

/// Constellation View state
#[derive(Debug)]
pub struct ConstellationView {
    pub(super) nodes: Vec<ConstellationNode>,
    pub(super) positions: Vec<NodePosition>,
    pub(super) spacing: f64,
    pub(super) show_labels: bool,
    pub(super) selected: usize,
    pub(super) origin_date: String,
    pub(super) latest_date: String,
}

impl Default for ConstellationView {
    fn default() -> Self {
        Self::new(layout::DEFAULT_SPACING)
    }
}

impl ConstellationView {
    pub fn new(spacing: f64) -> Self {
        Self {
            nodes: Vec::new(),
            positions: Vec::new(),
            spacing: spacing.clamp(MIN_SPACING, MAX_SPACING),
            show_labels: true,
            selected: 0,
            origin_date: String::new(),
            latest_date: String::new(),
        }
    }

    /// Take the timeline from a rebuilt model; selects the most recent node
    pub fn set_model(&mut self, model: &EvolutionModel) {
        self.nodes = model
            .timeline
            .iter()
            .map(|node| ConstellationNode {
                title: node.title.clone(),
                date: node.date.clone(),
                axis: node.axis,
            })
            .collect();
        self.positions.clear();
        self.selected = navigation::last_index(self.nodes.len());
        self.origin_date = model.origin_date.clone();
        self.latest_date = model.latest_date.clone();
    }

    /// Replace node placement after a relayout
    pub fn set_positions(&mut self, positions: Vec<NodePosition>) {
        self.positions = positions;
    }

    pub fn positions(&self) -> &[NodePosition] {
        &self.positions
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a node by timeline index (ignored when out of range)
    pub fn select_node(&mut self, index: usize) {
        if index < self.nodes.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = navigation::select_next(self.selected, navigation::last_index(self.nodes.len()));
    }

    pub fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    /// Change spacing by `delta`; returns whether it actually changed
    pub fn adjust_spacing(&mut self, delta: f64) -> bool {
        let next = navigation::step_value(self.spacing, delta, MIN_SPACING, MAX_SPACING);
        let changed = next != self.spacing;
        self.spacing = next;
        changed
    }

    /// "Mapped N entries from ORIGIN to LATEST."
    pub fn summary(&self) -> Option<String> {
        (!self.nodes.is_empty()).then(|| {
            format!(
                "Mapped {} entries from {} to {}.",
                self.nodes.len(),
                self.origin_date,
                self.latest_date
            )
        })
    }

    /// Details of the selected node: "title · date · axis"
    pub fn tooltip(&self) -> Option<String> {
        self.nodes.get(self.selected).map(describe)
    }

    /// The most recent nodes, newest first
    pub fn recent(&self) -> impl Iterator<Item = &ConstellationNode> {
        self.nodes.iter().rev().take(RECENT_COUNT)
    }

    /// Whether the node at `index` gets a label
    pub fn label_visible(&self, index: usize) -> bool {
        if !self.show_labels {
            return false;
        }
        let len = self.nodes.len();
        !(len > LABEL_CROWD_LIMIT && index < len - RECENT_COUNT)
    }
}

fn describe(node: &ConstellationNode) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        node.title,
        node.date,
        node.axis,
        sep = markers::SEPARATOR
    )
}
