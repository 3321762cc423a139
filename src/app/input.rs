//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::model::Notification;
use crate::ui::views::{ConstellationAction, ForgeAction, HistoryAction, HomeAction};
use crate::ui::widgets::help_line_count;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // Before view keys: plain 'l' moves the constellation selection
        if keys::is_reload_key(&key) {
            self.execute_refresh();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                if self.current_view == View::Help {
                    self.go_back();
                } else {
                    self.quit();
                }
                true
            }
            keys::ESC => {
                if self.current_view == View::Help {
                    self.go_back();
                } else {
                    self.go_to_view(View::Home);
                }
                true
            }
            keys::HELP => {
                if self.current_view == View::Help {
                    self.go_back();
                } else {
                    self.go_to_view(View::Help);
                }
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            keys::VIEW_HOME => {
                self.go_to_view(View::Home);
                true
            }
            keys::VIEW_HISTORY => {
                self.go_to_view(View::History);
                true
            }
            keys::VIEW_CONSTELLATION => {
                self.go_to_view(View::Constellation);
                true
            }
            keys::VIEW_FORGE => {
                self.go_to_view(View::Forge);
                true
            }
            _ => false,
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Home => {
                let action = self.home_view.handle_key(key);
                self.handle_home_action(action);
            }
            View::History => {
                let action = self.history_view.handle_key(key);
                self.handle_history_action(action);
            }
            View::Constellation => {
                let action = self.constellation_view.handle_key(key);
                self.handle_constellation_action(action);
            }
            View::Forge => {
                let action = self.forge_view.handle_key(key);
                self.handle_forge_action(action);
            }
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let max = help_line_count().saturating_sub(1) as u16;
        match key.code {
            k if keys::is_move_down(k) => self.help_scroll = (self.help_scroll + 1).min(max),
            k if keys::is_move_up(k) => self.help_scroll = self.help_scroll.saturating_sub(1),
            k if k == keys::GO_TOP => self.help_scroll = 0,
            k if k == keys::GO_BOTTOM => self.help_scroll = max,
            _ => {}
        }
    }

    fn handle_home_action(&mut self, action: HomeAction) {
        match action {
            HomeAction::None => {}
            HomeAction::OpenHistory => self.go_to_view(View::History),
        }
    }

    fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::None => {}
            HistoryAction::ShowInConstellation(index) => {
                self.constellation_view.select_node(index);
                self.go_to_view(View::Constellation);
            }
        }
    }

    fn handle_constellation_action(&mut self, action: ConstellationAction) {
        match action {
            ConstellationAction::None => {}
            ConstellationAction::Relayout => self.relayout(),
        }
    }

    fn handle_forge_action(&mut self, action: ForgeAction) {
        match action {
            ForgeAction::None => {}
            ForgeAction::Regenerate => {
                self.regenerate();
                let count = self.forge_view.candidates().len();
                self.notification = Some(Notification::success(format!(
                    "Forged {count} candidate(s)"
                )));
            }
        }
    }
}
