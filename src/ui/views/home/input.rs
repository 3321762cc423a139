//! Home View key handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{HomeAction, HomeView};
use crate::keys;

impl HomeView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.scroll_down();
                HomeAction::None
            }
            k if keys::is_move_up(k) => {
                self.scroll_up();
                HomeAction::None
            }
            k if k == keys::GO_TOP => {
                self.scroll = 0;
                HomeAction::None
            }
            KeyCode::Enter => HomeAction::OpenHistory,
            _ => HomeAction::None,
        }
    }
}
