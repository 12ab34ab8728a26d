//! Error types for the DNS cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the DNS cache service.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a capacity of zero
    #[error("Capacity must be at least 1")]
    InvalidCapacity,

    /// Cache constructed with a capacity the key space cannot address
    #[error("Capacity {0} exceeds the addressable key space")]
    CapacityTooLarge(usize),

    /// Name not present in the cache
    #[error("Name not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Construction errors only surface at startup; if one ever
            // reaches a handler, something is badly wired
            CacheError::InvalidCapacity => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::CapacityTooLarge(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the DNS cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
