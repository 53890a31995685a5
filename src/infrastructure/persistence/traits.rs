//! # Repository Traits
//!
//! Ports through which the application layer reads trade records.

use crate::domain::entities::Trade;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Two records share a trade ID.
    #[error("duplicate trade id: {0}")]
    DuplicateId(String),

    /// The backing store could not be read.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Creates a duplicate ID error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    /// Creates an unavailable-store error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only access to the trade record store.
#[async_trait]
pub trait TradeRepository: Send + Sync + fmt::Debug {
    /// Returns every record, in insertion order.
    ///
    /// The returned slice is shared; callers derive their own collections
    /// from it instead of mutating it.
    async fn snapshot(&self) -> RepositoryResult<Arc<[Trade]>>;

    /// Finds a trade by exact, case-sensitive ID.
    async fn get(&self, id: &str) -> RepositoryResult<Option<Trade>>;

    /// Returns the number of records in the store.
    async fn count(&self) -> RepositoryResult<u64>;
}
