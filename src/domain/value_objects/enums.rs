//! # Domain Enums
//!
//! Enumerated values carried by trade records.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a trade.
///
/// Serialized as `BUY` / `SELL`. Parsing is case-insensitive.
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::BuySellIndicator;
///
/// let side: BuySellIndicator = "sell".parse().unwrap();
/// assert_eq!(side, BuySellIndicator::Sell);
/// assert_eq!(side.as_str(), "SELL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuySellIndicator {
    /// Buy side.
    Buy,
    /// Sell side.
    Sell,
}

impl BuySellIndicator {
    /// All variants, in declaration order.
    pub const ALL: [Self; 2] = [Self::Buy, Self::Sell];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for BuySellIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuySellIndicator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(DomainError::InvalidSide(s.to_string())),
        }
    }
}
