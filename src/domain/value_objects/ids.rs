//! # Identity Value Objects
//!
//! Type-safe identity wrappers for domain identifiers.
//!
//! Both identifiers are string-based: the store treats them as opaque text
//! and compares them byte-wise, so they order lexicographically.
//!
//! - [`TradeId`] - Trade identifier, unique within the record store
//! - [`TraderId`] - Identifier of the trader who booked the trade

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Trade identifier.
///
/// Matching against a trade ID is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::ids::TradeId;
///
/// let trade_id = TradeId::new("4f1c2a4e-0d3b-4a55-9d1e-8f6f3b1c9a10");
/// assert_eq!(trade_id.as_str(), "4f1c2a4e-0d3b-4a55-9d1e-8f6f3b1c9a10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(String);

impl TradeId {
    /// Creates a new Trade ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a Trade ID from the hyphenated form of a UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// Returns the trade ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TradeId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TradeId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for TradeId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trader identifier.
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::ids::TraderId;
///
/// let trader = TraderId::new("desk-7");
/// assert_eq!(trader.to_string(), "desk-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraderId(String);

impl TraderId {
    /// Creates a new Trader ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a Trader ID from the hyphenated form of a UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// Returns the trader ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TraderId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TraderId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
