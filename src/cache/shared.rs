//! Shared Cache Module
//!
//! The synchronization facade over `RecordStore`.
//!
//! One store sits behind a reader/writer lock: `update` and `clear` take
//! the write guard (one writer, no readers), `resolve` and the metadata
//! reads take the read guard (any number of concurrent readers). Guards
//! are scoped, so the lock is released on every exit path.
//!
//! There is no global instance. The composition root constructs one
//! `SharedCache` and hands out clones; the handle is an `Arc` inside, so
//! cloning is cheap and every clone sees the same store.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{PutOutcome, RecordStore, StatsSnapshot};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to a lock-guarded record store.
#[derive(Debug, Clone)]
pub struct SharedCache {
    /// The guarded store
    store: Arc<RwLock<RecordStore>>,
    /// Capacity copy for lock-free reads; fixed at construction
    capacity: usize,
}

impl SharedCache {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Propagates `InvalidCapacity` and `CapacityTooLarge` from the store;
    /// construction failures are fatal, there is no degraded mode.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let store = RecordStore::new(capacity)?;
        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            capacity,
        })
    }

    // == Update ==
    /// Inserts or overwrites the record for a name.
    ///
    /// An empty name or record is a silent no-op, checked before any lock
    /// is touched. Otherwise the write guard is held for the duration of
    /// the store operation; an insert at capacity evicts the least
    /// recently written entry.
    pub async fn update(&self, name: impl Into<String>, record: impl Into<String>) {
        let name = name.into();
        let record = record.into();
        if name.is_empty() || record.is_empty() {
            return;
        }

        let outcome = {
            let mut store = self.store.write().await;
            store.put(name, record)
        };

        if outcome == PutOutcome::Evicted {
            debug!("capacity reached, evicted least recently written entry");
        }
    }

    // == Resolve ==
    /// Returns the record for a name, or None if it is not cached.
    ///
    /// Takes the read guard, so any number of resolves run concurrently;
    /// none overlaps an update or clear. Resolving never changes the
    /// eviction order.
    pub async fn resolve(&self, name: &str) -> Option<String> {
        let store = self.store.read().await;
        store.get(name).map(str::to_string)
    }

    // == Capacity ==
    /// Returns the fixed capacity. Lock-free: the value cannot change
    /// after construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current entry count.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.is_empty()
    }

    // == Clear ==
    /// Removes all entries. Capacity is unchanged.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
        debug!("cache cleared");
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of the performance counters.
    pub async fn stats(&self) -> StatsSnapshot {
        let store = self.store.read().await;
        store.stats()
    }
}
