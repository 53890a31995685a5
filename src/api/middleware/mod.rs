//! # API Middleware
//!
//! Cross-cutting concerns for API requests.

pub mod logging;

pub use logging::{LoggingConfig, LoggingState, RequestId, logging_middleware};
