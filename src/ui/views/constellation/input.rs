//! Constellation View key handling

use crossterm::event::KeyEvent;

use super::{ConstellationAction, ConstellationView, SPACING_STEP};
use crate::keys;
use crate::ui::navigation;

impl ConstellationView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> ConstellationAction {
        match key.code {
            k if keys::is_move_right(k) || keys::is_move_down(k) => {
                self.select_next();
                ConstellationAction::None
            }
            k if keys::is_move_left(k) || keys::is_move_up(k) => {
                self.select_prev();
                ConstellationAction::None
            }
            k if k == keys::GO_TOP => {
                self.selected = 0;
                ConstellationAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.selected = navigation::last_index(self.nodes.len());
                ConstellationAction::None
            }
            k if keys::is_increase(k) => self.spacing_action(SPACING_STEP),
            k if keys::is_decrease(k) => self.spacing_action(-SPACING_STEP),
            k if k == keys::TOGGLE_LABELS => {
                self.toggle_labels();
                ConstellationAction::None
            }
            _ => ConstellationAction::None,
        }
    }

    fn spacing_action(&mut self, delta: f64) -> ConstellationAction {
        if self.adjust_spacing(delta) {
            ConstellationAction::Relayout
        } else {
            ConstellationAction::None
        }
    }
}
