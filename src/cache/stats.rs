//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.
//!
//! Counters are atomic so the lookup path can record hits and misses
//! through a shared reference, without taking the write lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Lock-free performance counters.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of successful lookups
    hits: AtomicU64,
    /// Number of failed lookups
    misses: AtomicU64,
    /// Number of new names inserted
    insertions: AtomicU64,
    /// Number of existing names overwritten
    updates: AtomicU64,
    /// Number of entries evicted on capacity overflow
    evictions: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Insertion ==
    /// Increments the insertion counter.
    pub fn record_insertion(&self) {
        self.insertions.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Update ==
    /// Increments the update counter.
    pub fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a point-in-time copy of all counters.
    ///
    /// `entries` is the current entry count, supplied by the store since
    /// the counters themselves do not track it.
    pub fn snapshot(&self, entries: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries,
        }
    }
}

// == Stats Snapshot ==
/// A plain copy of the counters, safe to hold outside any lock.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups
    pub misses: u64,
    /// Number of new names inserted
    pub insertions: u64,
    /// Number of existing names overwritten
    pub updates: u64,
    /// Number of entries evicted on capacity overflow
    pub evictions: u64,
    /// Entry count at snapshot time
    pub entries: usize,
}

impl StatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
