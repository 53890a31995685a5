//! # Domain Entities
//!
//! - [`Trade`]: A synthetic trade record
//! - [`TradeDetails`]: Direction, price and quantity embedded in a trade

pub mod trade;


pub use trade::{Trade, TradeBuilder, TradeDetails};
