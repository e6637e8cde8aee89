use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage key for the persisted settings blob.
pub const SETTINGS_KEY: &str = "culinara-settings";
/// Storage key for the persisted usage-stats blob.
pub const STATS_KEY: &str = "culinara-stats";
/// Storage key for the favorite recipe id list.
pub const FAVORITES_KEY: &str = "recipe-favorites";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Key-value persistence seam. Each key holds one JSON-serialized blob;
/// reads and writes are synchronous and best-effort.
pub trait Storage: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Whether a post-mutation persist landed. A `Skipped` write has already
/// been logged; callers are free to ignore the tag, which keeps the public
/// contract of silent best-effort persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved,
    Skipped,
}

/// Deserializes the blob under `key`, falling back to `T::default()` on a
/// missing key, a failed read, or malformed JSON. Missing fields inside the
/// blob fall back per serde defaults, so stale blobs merge over defaults.
pub(crate) fn load_or_default<T>(storage: &dyn Storage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let text = match storage.read(key) {
        Ok(Some(text)) => text,
        Ok(None) => return T::default(),
        Err(err) => {
            log::warn!("Failed to read {key}: {err}");
            return T::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Discarding malformed blob under {key}: {err}");
            T::default()
        }
    }
}

/// Serializes `value` under `key`, reporting (never propagating) failure.
pub(crate) fn save_json<T: Serialize>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> PersistOutcome {
    let text = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("Failed to serialize blob for {key}: {err}");
            return PersistOutcome::Skipped;
        }
    };
    match storage.write(key, &text) {
        Ok(()) => PersistOutcome::Saved,
        Err(err) => {
            log::warn!("Failed to write {key}: {err}");
            PersistOutcome::Skipped
        }
    }
}

/// In-memory storage, used by tests and as a stand-in when no backing
/// directory is available.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw blob under `key`, if any. Handy for asserting persisted shapes.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("storage lock").get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().expect("storage lock").get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("storage lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
