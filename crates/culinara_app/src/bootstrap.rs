use std::path::PathBuf;
use std::sync::Arc;

use culinara_api::{ApiError, ClientSettings, HttpRecipeApi};
use culinara_core::{
    KeyboardControls, RecipeStore, SettingsStore, StatsStore, Storage, SystemThemeProbe,
};

use crate::storage::JsonFileStorage;

/// The wired application: each store constructed exactly once and handed to
/// consumers by reference, no globals.
pub struct App {
    pub settings: SettingsStore,
    pub stats: StatsStore,
    pub recipes: RecipeStore,
    pub keyboard: KeyboardControls,
}

/// Builds storage, the HTTP client, and the stores against `data_dir`. The
/// theme probe comes from the caller since only the platform layer knows how
/// to ask the OS.
pub fn bootstrap(data_dir: PathBuf, probe: Arc<dyn SystemThemeProbe>) -> Result<App, ApiError> {
    let storage: Arc<dyn Storage> = Arc::new(JsonFileStorage::new(data_dir));
    let api = Arc::new(HttpRecipeApi::new(ClientSettings::from_env())?);

    Ok(App {
        settings: SettingsStore::new(storage.clone(), probe),
        stats: StatsStore::new(storage.clone()),
        recipes: RecipeStore::new(api, storage),
        keyboard: KeyboardControls::new(),
    })
}

/// `.culinara` under the current working directory.
pub fn default_data_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".culinara")
}
