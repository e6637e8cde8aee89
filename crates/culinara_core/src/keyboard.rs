use std::time::{Duration, Instant};

use crate::settings::SettingsStore;

/// How long a recorded action stays visible before converging back to
/// `None`. Models the transient "last action" feedback signal.
const RESET_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyAction {
    Save,
    Search,
    Close,
    Help,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
}

/// One raw key press with platform modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    fn has_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Result of dispatching one key press. `suppress_default` asks the host to
/// swallow the platform's own handling of the combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub action: KeyAction,
    pub suppress_default: bool,
}

/// Human-readable shortcut description for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: &'static str,
    pub action: &'static str,
}

pub const SHORTCUTS: [Shortcut; 5] = [
    Shortcut {
        keys: "Ctrl + S",
        action: "Save Recipe",
    },
    Shortcut {
        keys: "Ctrl + F",
        action: "Focus Search",
    },
    Shortcut {
        keys: "Escape",
        action: "Close Modal",
    },
    Shortcut {
        keys: "H",
        action: "Toggle Help",
    },
    Shortcut {
        keys: "?",
        action: "Show Shortcuts",
    },
];

/// Maps global key presses to named actions, forwarding help-panel changes
/// to the settings store. The host owns listener registration and teardown;
/// this type only dispatches. Time is caller-supplied so the reset behavior
/// is deterministic under test.
#[derive(Debug, Default)]
pub struct KeyboardControls {
    last_action: KeyAction,
    pending_resets: Vec<Instant>,
}

impl KeyboardControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shortcuts() -> &'static [Shortcut] {
        &SHORTCUTS
    }

    pub fn handle_key(
        &mut self,
        event: KeyEvent,
        settings: &mut SettingsStore,
        now: Instant,
    ) -> Dispatch {
        let action = map_key(event.key);
        // Every press schedules a reset; overlapping resets all converge on
        // `None` with the earliest deadline winning.
        self.pending_resets.push(now + RESET_DELAY);

        if event.has_modifier() && matches!(action, KeyAction::Save | KeyAction::Search) {
            // Intent only; no downstream save/search is triggered here.
            self.last_action = action;
            return Dispatch {
                action,
                suppress_default: true,
            };
        }

        if action == KeyAction::Close && settings.show_help() {
            settings.toggle_help();
            self.last_action = action;
            return Dispatch {
                action,
                suppress_default: true,
            };
        }

        if action == KeyAction::Help && !event.has_modifier() {
            settings.toggle_help();
            self.last_action = action;
            return Dispatch {
                action,
                suppress_default: true,
            };
        }

        if action != KeyAction::None {
            self.last_action = action;
        }
        Dispatch {
            action,
            suppress_default: false,
        }
    }

    /// The action visible at `now`, after expiring any due resets.
    pub fn last_action(&mut self, now: Instant) -> KeyAction {
        if self.pending_resets.iter().any(|&deadline| deadline <= now) {
            self.pending_resets.retain(|&deadline| deadline > now);
            self.last_action = KeyAction::None;
        }
        self.last_action
    }
}

fn map_key(key: Key) -> KeyAction {
    match key {
        Key::Escape => KeyAction::Close,
        Key::Char(c) => match c.to_ascii_lowercase() {
            's' => KeyAction::Save,
            'f' => KeyAction::Search,
            'h' | '/' | '?' => KeyAction::Help,
            _ => KeyAction::None,
        },
    }
}
