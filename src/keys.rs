//! Keybinding definitions for evoscope
//!
//! All keybindings are defined here, together with the status-bar hints and
//! the help-panel tables that describe them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (reload the log)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_reload_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (always quits)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Cycle through views
pub const TAB: KeyCode = KeyCode::Tab;

/// Go back
pub const ESC: KeyCode = KeyCode::Esc;

/// Jump to a view by number
pub const VIEW_HOME: KeyCode = KeyCode::Char('1');
pub const VIEW_HISTORY: KeyCode = KeyCode::Char('2');
pub const VIEW_CONSTELLATION: KeyCode = KeyCode::Char('3');
pub const VIEW_FORGE: KeyCode = KeyCode::Char('4');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Move left (vim style)
pub const MOVE_LEFT: KeyCode = KeyCode::Char('h');

/// Move right (vim style)
pub const MOVE_RIGHT: KeyCode = KeyCode::Char('l');

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key is move left (h or ←)
pub fn is_move_left(code: KeyCode) -> bool {
    matches!(code, MOVE_LEFT | KeyCode::Left)
}

/// Check if key is move right (l or →)
pub fn is_move_right(code: KeyCode) -> bool {
    matches!(code, MOVE_RIGHT | KeyCode::Right)
}

// =============================================================================
// Adjustment keys (Constellation spacing, Forge novelty)
// =============================================================================

/// Increase the active parameter
pub const INCREASE: KeyCode = KeyCode::Char('+');

/// Alternative increase (unshifted '+')
pub const INCREASE_ALT: KeyCode = KeyCode::Char('=');

/// Decrease the active parameter
pub const DECREASE: KeyCode = KeyCode::Char('-');

/// Check if key increases the active parameter
pub fn is_increase(code: KeyCode) -> bool {
    matches!(code, INCREASE | INCREASE_ALT)
}

/// Check if key decreases the active parameter
pub fn is_decrease(code: KeyCode) -> bool {
    code == DECREASE
}

// =============================================================================
// Constellation View keys
// =============================================================================

/// Toggle node labels
pub const TOGGLE_LABELS: KeyCode = KeyCode::Char('t');

// =============================================================================
// Forge View keys
// =============================================================================

/// Regenerate candidates
pub const REGENERATE: KeyCode = KeyCode::Char('r');

// =============================================================================
// Help panel tables
// =============================================================================

/// A key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Toggle help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Next view",
    },
    KeyBindEntry {
        key: "1-4",
        description: "Home / History / Constellation / Forge",
    },
    KeyBindEntry {
        key: "Ctrl+L",
        description: "Reload log",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

/// Constellation View key bindings for help display
pub const CONSTELLATION_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "h/l",
        description: "Select previous/next node",
    },
    KeyBindEntry {
        key: "+/-",
        description: "Increase/decrease spacing",
    },
    KeyBindEntry {
        key: "t",
        description: "Toggle labels",
    },
];

/// Forge View key bindings for help display
pub const FORGE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "+/-",
        description: "Increase/decrease novelty",
    },
    KeyBindEntry {
        key: "r",
        description: "Regenerate candidates",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Scroll candidates",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};

const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};

const HINT_TAB: KeyHint = KeyHint {
    key: "Tab",
    label: "Next view",
    color: Color::Magenta,
};

const HINT_RELOAD: KeyHint = KeyHint {
    key: "^L",
    label: "Reload",
    color: Color::Green,
};

/// Home View hints
pub const HOME_VIEW_HINTS: &[KeyHint] = &[HINT_QUIT, HINT_HELP, HINT_TAB, HINT_RELOAD];

/// History View hints
pub const HISTORY_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Blue,
    },
    HINT_TAB,
    HINT_HELP,
    HINT_QUIT,
];

/// Constellation View hints
pub const CONSTELLATION_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "h/l",
        label: "Select",
        color: Color::Blue,
    },
    KeyHint {
        key: "+/-",
        label: "Spacing",
        color: Color::Yellow,
    },
    KeyHint {
        key: "t",
        label: "Labels",
        color: Color::Cyan,
    },
    HINT_TAB,
    HINT_QUIT,
];

/// Forge View hints
pub const FORGE_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "+/-",
        label: "Novelty",
        color: Color::Yellow,
    },
    KeyHint {
        key: "r",
        label: "Regenerate",
        color: Color::Green,
    },
    HINT_TAB,
    HINT_QUIT,
];

/// Hints for the current view (Help View has none)
pub fn current_hints(view: View) -> &'static [KeyHint] {
    match view {
        View::Home => HOME_VIEW_HINTS,
        View::History => HISTORY_VIEW_HINTS,
        View::Constellation => CONSTELLATION_VIEW_HINTS,
        View::Forge => FORGE_VIEW_HINTS,
        View::Help => &[],
    }
}
