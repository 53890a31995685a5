//! # Price Value Object
//!
//! Validated, non-negative trade price.
//!
//! # Examples
//!
//! ```
//! use trade_query::domain::value_objects::price::Price;
//!
//! let price = Price::new(100.50).unwrap();
//! assert_eq!(price.get(), 100.50);
//! assert!(Price::new(-1.0).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A validated price value.
///
/// # Invariants
///
/// - Price is finite
/// - Price is always >= 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Zero price constant.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative or not finite.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::InvalidPrice(format!(
                "price must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::InvalidPrice(format!(
                "price cannot be negative, got {value}"
            )));
        }
        // Normalise -0.0 so ordering and display stay consistent.
        Ok(Self(value + 0.0))
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
