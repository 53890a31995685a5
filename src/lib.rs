//! # Trade Query
//!
//! Read-only query service over an in-memory store of synthetic trade
//! records, exposing filtered, sorted and paginated listing plus lookup by ID.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Domain Layer** (`domain`): Trade entity and value objects
//! - **Application Layer** (`application`): The query pipeline, parameter validation and use cases
//! - **Infrastructure Layer** (`infrastructure`): The in-memory record store and the seeded generator
//! - **API Layer** (`api`): REST endpoints and request logging
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use trade_query::application::services::trade_query::{TradeQuery, query};
//! use trade_query::infrastructure::fixtures::generate_records;
//!
//! let store = generate_records(50, 7, Utc::now()).unwrap();
//! let params = TradeQuery::new()
//!     .with_asset_class("fx")
//!     .with_sort_name("tradeDateTime");
//!
//! let page = query(&store, &params);
//! assert!(page.items.iter().all(|t| t.asset_class() == "FX"));
//! assert!(page.items.len() <= 10);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
