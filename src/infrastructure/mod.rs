//! # Infrastructure Layer
//!
//! Implementations of the application's ports.
//!
//! ## Persistence
//!
//! - [`persistence::traits::TradeRepository`]: read-only store port
//! - [`persistence::in_memory::InMemoryTradeRepository`]: immutable in-memory store
//!
//! ## Fixtures
//!
//! Seeded generation of the synthetic records served at startup.

pub mod fixtures;
pub mod persistence;

pub use persistence as repos;
