//! # API Layer
//!
//! HTTP interface of the trade query service.
//!
//! ## Middleware
//!
//! - Request ID assignment and request logging

pub mod middleware;
pub mod rest;

pub use rest as rest_api;
