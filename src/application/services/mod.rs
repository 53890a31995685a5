//! # Application Services
//!
//! The query pipeline and its sort dispatch table.

pub mod sort;
pub mod trade_query;

pub use sort::{SORT_TABLE, SortField, TradeComparator};
pub use trade_query::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE, Page, Pagination, TradeQuery, find_by_id, query,
};
