//! Cache Module
//!
//! Fixed-capacity in-memory caching with write-order eviction.
//!
//! `RecordStore` is the unsynchronized container; `SharedCache` wraps one
//! store behind a reader/writer lock and is the type the rest of the
//! service uses.

mod order;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use order::WriteOrder;
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::{PutOutcome, RecordStore};
