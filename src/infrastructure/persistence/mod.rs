//! # Persistence Layer
//!
//! Repository ports and the in-memory record store.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryTradeRepository;
pub use traits::{RepositoryError, RepositoryResult, TradeRepository};
