//! API Module
//!
//! HTTP handlers and routing for the DNS cache REST API.
//!
//! # Endpoints
//! - `PUT /records` - Store or overwrite a name-to-record mapping
//! - `GET /resolve/:name` - Resolve a name to its cached record
//! - `DELETE /records` - Remove all entries
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
