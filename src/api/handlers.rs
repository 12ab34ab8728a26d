//! API Handlers
//!
//! HTTP request handlers for each DNS cache endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::SharedCache;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, HealthResponse, ResolveResponse, StatsResponse, UpdateRequest, UpdateResponse,
};

/// Application state shared across all handlers.
///
/// Holds a clone of the `SharedCache` handle; the handle carries its own
/// lock, so the state itself needs none.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the shared record cache
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around an existing cache handle.
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Propagates capacity validation failures from cache construction.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let cache = SharedCache::with_capacity(config.capacity)?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /records
///
/// Stores or overwrites a name-to-record mapping. May evict the least
/// recently written entry when the cache is full.
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.update(req.name.clone(), req.record).await;

    Ok(Json(UpdateResponse::new(req.name)))
}

/// Handler for GET /resolve/:name
///
/// Returns the cached record for a name, or 404 if it is not cached.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ResolveResponse>> {
    match state.cache.resolve(&name).await {
        Some(record) => Ok(Json(ResolveResponse::new(name, record))),
        None => Err(CacheError::NotFound(name)),
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.cache.stats().await;

    Json(StatsResponse::new(snapshot, state.cache.capacity()))
}

/// Handler for DELETE /records
///
/// Removes every entry from the cache. Capacity is unchanged.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.len().await;
    state.cache.clear().await;

    Json(ClearResponse::new(removed))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
