//! # Get Trade Use Case
//!
//! Looks up a single trade by its ID.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Trade;
use crate::infrastructure::persistence::traits::TradeRepository;
use std::sync::Arc;

/// Use case for fetching one trade.
#[derive(Debug)]
pub struct GetTradeUseCase {
    trade_repository: Arc<dyn TradeRepository>,
}

impl GetTradeUseCase {
    /// Creates a new get trade use case.
    #[must_use]
    pub fn new(trade_repository: Arc<dyn TradeRepository>) -> Self {
        Self { trade_repository }
    }

    /// Returns the trade whose ID matches `trade_id` exactly.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if no trade has that ID
    /// - `ApplicationError::Repository` if the store cannot be read
    pub async fn execute(&self, trade_id: &str) -> ApplicationResult<Trade> {
        self.trade_repository
            .get(trade_id)
            .await?
            .ok_or_else(|| ApplicationError::trade_not_found(trade_id))
    }
}
