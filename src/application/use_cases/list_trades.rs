//! # List Trades Use Case
//!
//! Runs a validated [`TradeQuery`] against the record store and returns one
//! page of results together with the total match count.

use crate::application::error::ApplicationResult;
use crate::application::services::trade_query::{Page, TradeQuery, query};
use crate::domain::entities::Trade;
use crate::infrastructure::persistence::traits::TradeRepository;
use std::sync::Arc;
use tracing::debug;

/// Use case for querying trades.
#[derive(Debug)]
pub struct ListTradesUseCase {
    trade_repository: Arc<dyn TradeRepository>,
}

impl ListTradesUseCase {
    /// Creates a new list trades use case.
    #[must_use]
    pub fn new(trade_repository: Arc<dyn TradeRepository>) -> Self {
        Self { trade_repository }
    }

    /// Executes the query.
    ///
    /// The store is never modified; filtering and sorting work on a derived
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the store cannot be read.
    pub async fn execute(&self, params: &TradeQuery) -> ApplicationResult<Page<Trade>> {
        let store = self.trade_repository.snapshot().await?;
        let page = query(&store, params);

        debug!(
            total_count = page.total_count,
            returned = page.items.len(),
            page = page.page,
            per_page = page.per_page,
            "Trade query executed"
        );

        Ok(page)
    }
}
