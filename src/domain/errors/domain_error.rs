//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! value-object validation failures with numeric error codes in the
//! 1000-1999 range.
//!
//! # Examples
//!
//! ```
//! use trade_query::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidPrice("price must be non-negative".to_string());
//! assert_eq!(error.code(), 1001);
//! ```

use thiserror::Error;

/// Domain-level error with numeric error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid price value.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Invalid quantity value.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Invalid buy/sell indicator.
    #[error("invalid buy/sell indicator: {0}")]
    InvalidSide(String),
}

impl DomainError {
    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use trade_query::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::InvalidQuantity("zero".to_string()).code(), 1002);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidPrice(_) => 1001,
            Self::InvalidQuantity(_) => 1002,
            Self::InvalidSide(_) => 1003,
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
