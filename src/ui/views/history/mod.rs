//! History View: every entry, newest first

mod input;
mod render;

use crate::model::{Axis, EvolutionModel};
use crate::ui::navigation;

/// Action returned by the History View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// No action needed
    None,
    /// Show the given timeline node on the constellation
    ShowInConstellation(usize),
}

/// One row of the history list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub title: String,
    pub summary: String,
    pub axis: Axis,
    pub files: Vec<String>,
    /// Index of the entry's timeline node
    pub node: usize,
}

/// History View state
#[derive(Debug, Default)]
pub struct HistoryView {
    pub(super) rows: Vec<HistoryRow>,
    pub(super) selected: usize,
    pub(super) scroll_offset: usize,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild rows from the model's entries, newest first
    ///
    /// Each row carries the axis and index of the timeline node built from
    /// the same source entry.
    pub fn set_model(&mut self, model: &EvolutionModel) {
        let mut node_of = vec![(Axis::Structure, 0); model.entries.len()];
        for node in &model.timeline {
            if let Some(slot) = node_of.get_mut(node.source) {
                *slot = (node.axis, node.index);
            }
        }

        // same stable order as `desc_entries`
        let mut order: Vec<usize> = (0..model.entries.len()).collect();
        order.sort_by(|&a, &b| model.entries[b].date.cmp(&model.entries[a].date));

        self.rows = order
            .into_iter()
            .map(|source| {
                let entry = &model.entries[source];
                let (axis, node) = node_of[source];
                HistoryRow {
                    date: entry.date.clone(),
                    title: entry.display_title().to_string(),
                    summary: entry.summary.clone(),
                    axis,
                    files: entry.files_changed.clone(),
                    node,
                }
            })
            .collect();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<&HistoryRow> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        self.selected = navigation::select_next(self.selected, navigation::last_index(self.rows.len()));
    }

    pub fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = navigation::last_index(self.rows.len());
    }
}
