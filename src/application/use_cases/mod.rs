//! # Use Cases
//!
//! Read-only workflows over the trade record store.

pub mod get_trade;
pub mod list_trades;


pub use get_trade::GetTradeUseCase;
pub use list_trades::ListTradesUseCase;
