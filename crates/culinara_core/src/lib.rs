//! Culinara core: state stores, the storage seam they persist through, and
//! the keyboard control dispatcher.
mod keyboard;
mod recipes;
mod settings;
mod stats;
mod storage;

pub use keyboard::{Dispatch, Key, KeyAction, KeyEvent, KeyboardControls, Shortcut, SHORTCUTS};
pub use recipes::{RecipeStore, ALL_CATEGORY};
pub use settings::{
    ConstantThemeProbe, EffectiveTheme, SettingsStore, SystemThemeProbe, ThemeMode,
};
pub use stats::{Clock, StatsStore};
pub use storage::{
    MemoryStorage, PersistOutcome, Storage, StorageError, FAVORITES_KEY, SETTINGS_KEY, STATS_KEY,
};
