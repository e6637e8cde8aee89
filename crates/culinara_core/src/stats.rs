use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{self, PersistOutcome, Storage, STATS_KEY};

/// Timestamp source for `lastVisit`; injected so tests control time.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedStats {
    total_searches: u64,
    total_recipes_viewed: u64,
    total_favorites: u64,
    last_visit: Option<String>,
    total_time_spent: u64,
}

/// Usage counters; monotone except through `reset_stats`. Every mutation
/// rewrites the full blob.
pub struct StatsStore {
    storage: Arc<dyn Storage>,
    clock: Clock,
    stats: PersistedStats,
}

impl StatsStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_clock(storage, Arc::new(|| chrono::Utc::now().to_rfc3339()))
    }

    pub fn with_clock(storage: Arc<dyn Storage>, clock: Clock) -> Self {
        let stats = storage::load_or_default(storage.as_ref(), STATS_KEY);
        Self {
            storage,
            clock,
            stats,
        }
    }

    pub fn total_searches(&self) -> u64 {
        self.stats.total_searches
    }

    pub fn total_recipes_viewed(&self) -> u64 {
        self.stats.total_recipes_viewed
    }

    pub fn total_favorites(&self) -> u64 {
        self.stats.total_favorites
    }

    pub fn last_visit(&self) -> Option<&str> {
        self.stats.last_visit.as_deref()
    }

    pub fn total_time_spent(&self) -> u64 {
        self.stats.total_time_spent
    }

    pub fn record_search(&mut self) -> PersistOutcome {
        self.stats.total_searches += 1;
        self.stats.last_visit = Some((self.clock)());
        self.persist()
    }

    pub fn record_recipe_view(&mut self) -> PersistOutcome {
        self.stats.total_recipes_viewed += 1;
        self.persist()
    }

    pub fn update_favorites(&mut self, count: u64) -> PersistOutcome {
        self.stats.total_favorites = count;
        self.persist()
    }

    pub fn add_time_spent(&mut self, seconds: u64) -> PersistOutcome {
        self.stats.total_time_spent += seconds;
        self.persist()
    }

    pub fn reset_stats(&mut self) -> PersistOutcome {
        self.stats = PersistedStats::default();
        self.persist()
    }

    /// Cumulative time as `"<h>h <m>m"` once a full hour is reached, else
    /// `"<m>m"`. Integer truncation, no padding.
    pub fn format_time(&self) -> String {
        let seconds = self.stats.total_time_spent;
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        }
    }

    fn persist(&self) -> PersistOutcome {
        storage::save_json(self.storage.as_ref(), STATS_KEY, &self.stats)
    }
}
