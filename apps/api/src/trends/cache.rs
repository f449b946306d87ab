//! Single-slot, process-local cache of the last freshly scraped dataset.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::trends::models::SkillTrendsDataset;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub dataset: SkillTrendsDataset,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Fresh while strictly less than `ttl` has elapsed since the fetch.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }

    pub fn fetched_at_millis(&self) -> i64 {
        self.fetched_at.timestamp_millis()
    }
}

/// Holds at most one entry. `write` overwrites unconditionally.
pub trait TrendsCache: Send + Sync {
    fn read(&self) -> Option<CacheEntry>;
    fn write(&self, dataset: SkillTrendsDataset, fetched_at: DateTime<Utc>);
}

#[derive(Default)]
pub struct InMemoryTrendsCache {
    slot: RwLock<Option<CacheEntry>>,
}

impl InMemoryTrendsCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrendsCache for InMemoryTrendsCache {
    fn read(&self) -> Option<CacheEntry> {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn write(&self, dataset: SkillTrendsDataset, fetched_at: DateTime<Utc>) {
        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(CacheEntry {
            dataset,
            fetched_at,
        });
    }
}
