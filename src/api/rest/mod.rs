//! # REST API
//!
//! HTTP endpoints over the trade record store.

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ErrorResponse, HealthResponse};
pub use routes::create_router;
