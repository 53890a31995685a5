//! # Trade Entity
//!
//! A single synthetic trade record and its embedded execution details.
//!
//! Records are created once when the store is built and never change
//! afterwards, so the entity exposes accessors only.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use trade_query::domain::entities::trade::{Trade, TradeDetails};
//! use trade_query::domain::value_objects::{BuySellIndicator, Price, Quantity, TradeId};
//!
//! let details = TradeDetails::new(
//!     BuySellIndicator::Buy,
//!     Price::new(101.25).unwrap(),
//!     Quantity::new(10).unwrap(),
//! );
//! let executed_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
//!
//! let trade = Trade::builder(TradeId::new("T-1"), executed_at, details)
//!     .asset_class("Equity")
//!     .instrument("TSLA", "tesla")
//!     .counterparty("Acme Capital")
//!     .trader("desk-1")
//!     .build();
//!
//! assert_eq!(trade.asset_class(), "Equity");
//! assert!(trade.is_buy());
//! ```

use crate::domain::value_objects::{BuySellIndicator, Price, Quantity, TradeId, TraderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution details embedded in a [`Trade`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDetails {
    /// `BUY` for buys, `SELL` for sells.
    buy_sell_indicator: BuySellIndicator,
    /// The price of the trade.
    price: Price,
    /// The amount of units traded.
    quantity: Quantity,
}

impl TradeDetails {
    /// Creates trade details from validated parts.
    #[must_use]
    pub const fn new(buy_sell_indicator: BuySellIndicator, price: Price, quantity: Quantity) -> Self {
        Self {
            buy_sell_indicator,
            price,
            quantity,
        }
    }

    /// Returns the trade direction.
    #[inline]
    #[must_use]
    pub const fn buy_sell_indicator(&self) -> BuySellIndicator {
        self.buy_sell_indicator
    }

    /// Returns the execution price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the executed quantity.
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }
}

/// A trade record.
///
/// Serialized with camelCase field names; `tradeDateTime` is an RFC 3339
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    asset_class: String,
    counterparty: Option<String>,
    instrument_id: String,
    instrument_name: String,
    trade_date_time: DateTime<Utc>,
    trade_details: TradeDetails,
    trade_id: TradeId,
    trader: TraderId,
}

impl Trade {
    /// Starts building a trade with its required identity, time and details.
    #[must_use]
    pub fn builder(
        trade_id: TradeId,
        trade_date_time: DateTime<Utc>,
        trade_details: TradeDetails,
    ) -> TradeBuilder {
        TradeBuilder::new(trade_id, trade_date_time, trade_details)
    }

    /// Returns the asset class of the traded instrument (e.g. Bond, Equity, FX).
    #[inline]
    #[must_use]
    pub fn asset_class(&self) -> &str {
        &self.asset_class
    }

    /// Returns the counterparty, when known.
    #[inline]
    #[must_use]
    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }

    /// Returns the instrument identifier (e.g. TSLA).
    #[inline]
    #[must_use]
    pub fn instrument_id(&self) -> &str {
        &self.instrument_id
    }

    /// Returns the instrument name.
    #[inline]
    #[must_use]
    pub fn instrument_name(&self) -> &str {
        &self.instrument_name
    }

    /// Returns the execution time.
    #[inline]
    #[must_use]
    pub const fn trade_date_time(&self) -> DateTime<Utc> {
        self.trade_date_time
    }

    /// Returns the embedded execution details.
    #[inline]
    #[must_use]
    pub const fn trade_details(&self) -> &TradeDetails {
        &self.trade_details
    }

    /// Returns the trade ID.
    #[inline]
    #[must_use]
    pub const fn trade_id(&self) -> &TradeId {
        &self.trade_id
    }

    /// Returns the trader.
    #[inline]
    #[must_use]
    pub const fn trader(&self) -> &TraderId {
        &self.trader
    }

    /// Returns the execution price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Price {
        self.trade_details.price
    }

    /// Returns true if this is a buy.
    #[inline]
    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.trade_details.buy_sell_indicator == BuySellIndicator::Buy
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trade({} {} {} {} @ {})",
            self.trade_id,
            self.trade_details.buy_sell_indicator,
            self.trade_details.quantity,
            self.instrument_id,
            self.trade_details.price
        )
    }
}

/// Builder for [`Trade`].
///
/// Optional descriptive fields default to empty strings; the counterparty
/// defaults to unknown.
#[derive(Debug, Clone)]
pub struct TradeBuilder {
    asset_class: String,
    counterparty: Option<String>,
    instrument_id: String,
    instrument_name: String,
    trade_date_time: DateTime<Utc>,
    trade_details: TradeDetails,
    trade_id: TradeId,
    trader: TraderId,
}

impl TradeBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(trade_id: TradeId, trade_date_time: DateTime<Utc>, trade_details: TradeDetails) -> Self {
        Self {
            asset_class: String::new(),
            counterparty: None,
            instrument_id: String::new(),
            instrument_name: String::new(),
            trade_date_time,
            trade_details,
            trade_id,
            trader: TraderId::new(""),
        }
    }

    /// Sets the asset class.
    #[must_use]
    pub fn asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = asset_class.into();
        self
    }

    /// Sets the counterparty.
    #[must_use]
    pub fn counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    /// Sets the instrument identifier and name.
    #[must_use]
    pub fn instrument(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.instrument_id = id.into();
        self.instrument_name = name.into();
        self
    }

    /// Sets the trader.
    #[must_use]
    pub fn trader(mut self, trader: impl Into<TraderId>) -> Self {
        self.trader = trader.into();
        self
    }

    /// Builds the trade.
    #[must_use]
    pub fn build(self) -> Trade {
        Trade {
            asset_class: self.asset_class,
            counterparty: self.counterparty,
            instrument_id: self.instrument_id,
            instrument_name: self.instrument_name,
            trade_date_time: self.trade_date_time,
            trade_details: self.trade_details,
            trade_id: self.trade_id,
            trader: self.trader,
        }
    }
}
