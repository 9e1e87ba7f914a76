//! Aggregation memo cache: Moka TinyLFU keyed by dataset identity, group key
//! and filters. Stores are immutable, so entries never go stale; a reloaded
//! store with different content gets a different fingerprint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use atlas_storage::DatasetFingerprint;
use moka::sync::Cache;

use super::types::{Dataset, Filters, GroupKey, GroupedMeans};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct AggregationKey {
    pub dataset_id: DatasetFingerprint,
    pub dataset: Dataset,
    pub group_key: GroupKey,
    pub filters: Filters,
}

/// Bounded, thread-safe memo of aggregation results.
pub struct AggregationCache {
    inner: Cache<AggregationKey, Arc<GroupedMeans>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AggregationCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub(crate) fn get(&self, key: &AggregationKey) -> Option<Arc<GroupedMeans>> {
        match self.inner.get(key) {
            Some(hit) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(hit)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub(crate) fn insert(&self, key: AggregationKey, value: Arc<GroupedMeans>) {
        self.inner.insert(key, value);
    }

    pub fn hit_count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn miss_count(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Hit rate in [0, 1]; 0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hit_count();
        let total = hits + self.miss_count();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Number of memoized results. Flushes Moka's pending writes first so
    /// the count reflects every completed insert and `clear`.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}

impl std::fmt::Debug for AggregationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregationCache")
            .field("hits", &self.hit_count())
            .field("misses", &self.miss_count())
            .finish()
    }
}
