//! DNS Cache - An in-memory DNS record cache service
//!
//! Memoizes name-to-record lookups in a fixed-capacity store with
//! write-order eviction, behind a reader/writer lock.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::SharedCache;
pub use config::Config;
