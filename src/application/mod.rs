//! # Application Layer
//!
//! Query orchestration over the trade record store.
//!
//! ## Use Cases
//!
//! - [`ListTradesUseCase`]: Filter, sort and paginate trades
//! - [`GetTradeUseCase`]: Fetch one trade by ID
//!
//! ## Services
//!
//! - [`services::trade_query`]: The filter / sort / count / paginate pipeline
//! - [`services::sort`]: Sortable fields and their comparators

pub mod dto;
pub mod error;
pub mod services;
pub mod use_cases;

pub use dto::TradeQueryParams;
pub use error::{ApplicationError, ApplicationResult};
pub use services::{Page, Pagination, SortField, TradeQuery};
pub use use_cases::{GetTradeUseCase, ListTradesUseCase};
