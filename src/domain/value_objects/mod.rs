//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`TradeId`], [`TraderId`]: String-based identifiers
//!
//! ## Numeric Types
//!
//! - [`Price`]: Finite, non-negative price
//! - [`Quantity`]: Strictly positive unit count
//!
//! ## Domain Enums
//!
//! - [`BuySellIndicator`]: Buy or Sell

pub mod enums;
pub mod ids;
pub mod price;
pub mod quantity;

pub use enums::BuySellIndicator;
pub use ids::{TradeId, TraderId};
pub use price::Price;
pub use quantity::Quantity;
