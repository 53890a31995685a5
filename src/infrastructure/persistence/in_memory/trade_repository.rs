//! # In-Memory Trade Repository
//!
//! Immutable, in-memory implementation of [`TradeRepository`].
//!
//! The records are fixed when the repository is built and shared behind an
//! `Arc<[Trade]>`, so any number of readers can use it without locking.

use crate::application::services::trade_query::find_by_id;
use crate::domain::entities::Trade;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TradeRepository,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// In-memory implementation of [`TradeRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryTradeRepository {
    records: Arc<[Trade]>,
}

impl InMemoryTradeRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    /// Builds a repository from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateId` if two records share a trade ID.
    pub fn from_records(records: Vec<Trade>) -> RepositoryResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for trade in &records {
            if !seen.insert(trade.trade_id().as_str()) {
                return Err(RepositoryError::duplicate_id(trade.trade_id().as_str()));
            }
        }
        Ok(Self {
            records: Arc::from(records),
        })
    }

    /// Returns the number of trades in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn records(&self) -> &[Trade] {
        &self.records
    }
}

impl Default for InMemoryTradeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn snapshot(&self) -> RepositoryResult<Arc<[Trade]>> {
        Ok(Arc::clone(&self.records))
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<Trade>> {
        Ok(find_by_id(&self.records, id).cloned())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.records.len() as u64)
    }
}
