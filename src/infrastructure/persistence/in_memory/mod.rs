//! # In-Memory Repositories

pub mod trade_repository;

pub use trade_repository::InMemoryTradeRepository;
