//! History View key handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{HistoryAction, HistoryView};
use crate::keys;

impl HistoryView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> HistoryAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.select_next();
                HistoryAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev();
                HistoryAction::None
            }
            k if k == keys::GO_TOP => {
                self.select_first();
                HistoryAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.select_last();
                HistoryAction::None
            }
            KeyCode::Enter => self
                .selected_row()
                .map_or(HistoryAction::None, |row| {
                    HistoryAction::ShowInConstellation(row.node)
                }),
            _ => HistoryAction::None,
        }
    }
}
