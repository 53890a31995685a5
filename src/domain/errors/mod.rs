//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! Error codes 1000-1999 are value-object validation failures.
//!
//! # Examples
//!
//! ```
//! use trade_query::domain::errors::{DomainError, DomainResult};
//!
//! fn validate_price(price: f64) -> DomainResult<f64> {
//!     if price < 0.0 {
//!         return Err(DomainError::InvalidPrice("price cannot be negative".to_string()));
//!     }
//!     Ok(price)
//! }
//! ```

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};
