use std::sync::Arc;

use culinara_core::{
    MemoryStorage, PersistOutcome, StatsStore, Storage, StorageError, STATS_KEY,
};
use pretty_assertions::assert_eq;

struct FailingStorage;

impl Storage for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write(format!("{key} unavailable")))
    }
}

fn fixed_clock(stamp: &'static str) -> culinara_core::Clock {
    Arc::new(move || stamp.to_string())
}

#[test]
fn counters_start_at_defaults() {
    let store = StatsStore::new(Arc::new(MemoryStorage::new()));
    assert_eq!(store.total_searches(), 0);
    assert_eq!(store.total_recipes_viewed(), 0);
    assert_eq!(store.total_favorites(), 0);
    assert_eq!(store.total_time_spent(), 0);
    assert_eq!(store.last_visit(), None);
}

#[test]
fn record_search_increments_and_stamps_last_visit() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store =
        StatsStore::with_clock(storage, fixed_clock("2026-08-30T12:00:00+00:00"));

    store.record_search();
    store.record_search();
    assert_eq!(store.total_searches(), 2);
    assert_eq!(store.last_visit(), Some("2026-08-30T12:00:00+00:00"));
}

#[test]
fn every_mutation_persists_the_full_blob() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store =
        StatsStore::with_clock(storage.clone(), fixed_clock("2026-08-30T12:00:00+00:00"));

    store.record_search();
    store.record_recipe_view();
    store.update_favorites(3);
    store.add_time_spent(90);

    let reloaded = StatsStore::new(storage);
    assert_eq!(reloaded.total_searches(), 1);
    assert_eq!(reloaded.total_recipes_viewed(), 1);
    assert_eq!(reloaded.total_favorites(), 3);
    assert_eq!(reloaded.total_time_spent(), 90);
    assert_eq!(reloaded.last_visit(), Some("2026-08-30T12:00:00+00:00"));
}

#[test]
fn partial_blob_merges_over_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .write(STATS_KEY, r#"{"totalSearches":7}"#)
        .expect("seed blob");

    let store = StatsStore::new(storage);
    assert_eq!(store.total_searches(), 7);
    assert_eq!(store.total_time_spent(), 0);
    assert_eq!(store.last_visit(), None);
}

#[test]
fn reset_returns_everything_to_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store =
        StatsStore::with_clock(storage.clone(), fixed_clock("2026-08-30T12:00:00+00:00"));
    store.record_search();
    store.add_time_spent(5000);

    store.reset_stats();
    assert_eq!(store.total_searches(), 0);
    assert_eq!(store.last_visit(), None);
    assert_eq!(store.format_time(), "0m");

    // The reset is persisted, not just in-memory.
    let reloaded = StatsStore::new(storage);
    assert_eq!(reloaded.total_searches(), 0);
    assert_eq!(reloaded.total_time_spent(), 0);
}

#[test]
fn format_time_truncates_to_whole_minutes() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = StatsStore::new(storage);

    assert_eq!(store.format_time(), "0m");
    store.add_time_spent(59);
    assert_eq!(store.format_time(), "0m");
    store.add_time_spent(3602);
    // 3661 total seconds.
    assert_eq!(store.format_time(), "1h 1m");
}

#[test]
fn write_failure_keeps_the_mutation() {
    let mut store = StatsStore::with_clock(
        Arc::new(FailingStorage),
        fixed_clock("2026-08-30T12:00:00+00:00"),
    );
    assert_eq!(store.record_search(), PersistOutcome::Skipped);
    assert_eq!(store.total_searches(), 1);
}
