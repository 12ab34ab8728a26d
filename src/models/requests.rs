//! Request DTOs for the DNS cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the update operation (PUT /records)
///
/// # Fields
/// - `name`: The domain name to cache a record for
/// - `record`: The record text, e.g. an IP address
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    /// The domain name
    pub name: String,
    /// The record to store
    pub record: String,
}

impl UpdateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    /// The cache itself silently ignores empty input; the HTTP boundary
    /// rejects it so remote callers get a diagnostic.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.record.is_empty() {
            return Some("Record cannot be empty".to_string());
        }
        None
    }
}
