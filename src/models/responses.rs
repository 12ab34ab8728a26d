//! Response DTOs for the DNS cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::StatsSnapshot;

/// Response body for the resolve operation (GET /resolve/:name)
#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    /// The requested name
    pub name: String,
    /// The cached record
    pub record: String,
}

impl ResolveResponse {
    /// Creates a new ResolveResponse
    pub fn new(name: impl Into<String>, record: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record: record.into(),
        }
    }
}

/// Response body for the update operation (PUT /records)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    /// Success message
    pub message: String,
    /// The name that was stored
    pub name: String,
}

impl UpdateResponse {
    /// Creates a new UpdateResponse
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            message: format!("Record for '{}' stored successfully", name),
            name,
        }
    }
}

/// Response body for the clear operation (DELETE /records)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries removed
    pub removed: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cache cleared, {} entries removed", removed),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
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
    /// Current number of entries in the cache
    pub entries: usize,
    /// Fixed cache capacity
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a counter snapshot
    pub fn new(snapshot: StatsSnapshot, capacity: usize) -> Self {
        let hit_rate = snapshot.hit_rate();
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            insertions: snapshot.insertions,
            updates: snapshot.updates,
            evictions: snapshot.evictions,
            entries: snapshot.entries,
            capacity,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
