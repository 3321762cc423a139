//! Forge View key handling

use crossterm::event::KeyEvent;

use super::{ForgeAction, ForgeView, NOVELTY_STEP};
use crate::keys;
use crate::ui::navigation;

impl ForgeView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> ForgeAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.select_next();
                ForgeAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev();
                ForgeAction::None
            }
            k if k == keys::GO_TOP => {
                self.selected = 0;
                ForgeAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.selected = navigation::last_index(self.candidates.len());
                ForgeAction::None
            }
            k if keys::is_increase(k) => self.novelty_action(NOVELTY_STEP),
            k if keys::is_decrease(k) => self.novelty_action(-NOVELTY_STEP),
            k if k == keys::REGENERATE => ForgeAction::Regenerate,
            _ => ForgeAction::None,
        }
    }

    fn novelty_action(&mut self, delta: f64) -> ForgeAction {
        if self.adjust_novelty(delta) {
            ForgeAction::Regenerate
        } else {
            ForgeAction::None
        }
    }
}
