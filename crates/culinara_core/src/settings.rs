use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{self, PersistOutcome, Storage, SETTINGS_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}

/// Resolved dark/light presentation state the view layer styles from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Dark,
    Light,
}

/// Seam for the OS-level color-scheme preference.
pub trait SystemThemeProbe: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// Probe with a fixed answer; the default when no platform probe is wired.
#[derive(Debug, Clone, Copy)]
pub struct ConstantThemeProbe(pub bool);

impl SystemThemeProbe for ConstantThemeProbe {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// On-disk shape. `showHelp` is a transient UI flag and deliberately never
/// serialized. Field defaults let blobs from older versions merge cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedSettings {
    sound_enabled: bool,
    theme: ThemeMode,
    reduced_motion: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            theme: ThemeMode::Dark,
            reduced_motion: false,
        }
    }
}

pub struct SettingsStore {
    storage: Arc<dyn Storage>,
    probe: Arc<dyn SystemThemeProbe>,
    sound_enabled: bool,
    theme: ThemeMode,
    reduced_motion: bool,
    show_help: bool,
    is_dark_mode: bool,
}

impl SettingsStore {
    pub fn new(storage: Arc<dyn Storage>, probe: Arc<dyn SystemThemeProbe>) -> Self {
        let saved: PersistedSettings = storage::load_or_default(storage.as_ref(), SETTINGS_KEY);
        let mut store = Self {
            storage,
            probe,
            sound_enabled: saved.sound_enabled,
            theme: saved.theme,
            reduced_motion: saved.reduced_motion,
            show_help: false,
            is_dark_mode: true,
        };
        store.apply_theme();
        store
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn effective_theme(&self) -> EffectiveTheme {
        if self.is_dark_mode {
            EffectiveTheme::Dark
        } else {
            EffectiveTheme::Light
        }
    }

    pub fn toggle_sound(&mut self) -> PersistOutcome {
        self.sound_enabled = !self.sound_enabled;
        self.persist()
    }

    pub fn set_theme(&mut self, mode: ThemeMode) -> PersistOutcome {
        self.theme = mode;
        self.apply_theme();
        self.persist()
    }

    /// Transient panel flag; never persisted.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_reduced_motion(&mut self, value: bool) -> PersistOutcome {
        self.reduced_motion = value;
        self.persist()
    }

    /// Re-resolves the effective theme from the probe. Registered for every
    /// OS preference change; only visible while the mode is `System`.
    pub fn on_system_theme_change(&mut self) {
        self.apply_theme();
    }

    fn apply_theme(&mut self) {
        self.is_dark_mode = match self.theme {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => self.probe.prefers_dark(),
        };
    }

    fn persist(&self) -> PersistOutcome {
        let blob = PersistedSettings {
            sound_enabled: self.sound_enabled,
            theme: self.theme,
            reduced_motion: self.reduced_motion,
        };
        storage::save_json(self.storage.as_ref(), SETTINGS_KEY, &blob)
    }
}
