//! # Data Transfer Objects
//!
//! Request shapes received by the API layer.

pub mod trade_query_dto;

pub use trade_query_dto::{TradeQueryParams, parse_timestamp};
