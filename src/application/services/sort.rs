//! # Sort Fields
//!
//! Field-name keyed sort dispatch for trade listings.
//!
//! Every sortable field has one row in [`SORT_TABLE`]: its canonical
//! (lower-case) key, the [`SortField`] it stands for, and the comparator that
//! orders two trades by that field. Adding a sortable field means adding a
//! variant and a row.
//!
//! # Examples
//!
//! ```
//! use trade_query::application::services::sort::SortField;
//!
//! assert_eq!(SortField::parse(" TradeDateTime "), Some(SortField::TradeDateTime));
//! assert_eq!(SortField::parse("price"), None);
//! ```

use crate::domain::entities::Trade;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Orders two trades by a single field, ascending.
pub type TradeComparator = fn(&Trade, &Trade) -> Ordering;

/// A recognized sort field.
///
/// Variants are declared in the same order as the rows of [`SORT_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SortField {
    /// `assetClass`, lexicographic.
    AssetClass = 0,
    /// `counterparty`, lexicographic; unknown counterparties sort first.
    Counterparty = 1,
    /// `instrumentId`, lexicographic.
    InstrumentId = 2,
    /// `instrumentName`, lexicographic.
    InstrumentName = 3,
    /// `tradeDateTime`, chronological.
    TradeDateTime = 4,
    /// `tradeId`, lexicographic.
    TradeId = 5,
    /// `trader`, lexicographic.
    Trader = 6,
}

/// One row of the sort dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct SortEntry {
    /// Canonical lower-case key.
    pub key: &'static str,
    /// Wire name as it appears in serialized trades.
    pub name: &'static str,
    /// Field this row describes.
    pub field: SortField,
    /// Ascending comparator.
    pub compare: TradeComparator,
}

/// Sort dispatch table keyed by canonical field name.
pub static SORT_TABLE: [SortEntry; 7] = [
    SortEntry {
        key: "assetclass",
        name: "assetClass",
        field: SortField::AssetClass,
        compare: by_asset_class,
    },
    SortEntry {
        key: "counterparty",
        name: "counterparty",
        field: SortField::Counterparty,
        compare: by_counterparty,
    },
    SortEntry {
        key: "instrumentid",
        name: "instrumentId",
        field: SortField::InstrumentId,
        compare: by_instrument_id,
    },
    SortEntry {
        key: "instrumentname",
        name: "instrumentName",
        field: SortField::InstrumentName,
        compare: by_instrument_name,
    },
    SortEntry {
        key: "tradedatetime",
        name: "tradeDateTime",
        field: SortField::TradeDateTime,
        compare: by_trade_date_time,
    },
    SortEntry {
        key: "tradeid",
        name: "tradeId",
        field: SortField::TradeId,
        compare: by_trade_id,
    },
    SortEntry {
        key: "trader",
        name: "trader",
        field: SortField::Trader,
        compare: by_trader,
    },
];

fn by_asset_class(a: &Trade, b: &Trade) -> Ordering {
    a.asset_class().cmp(b.asset_class())
}

fn by_counterparty(a: &Trade, b: &Trade) -> Ordering {
    a.counterparty().cmp(&b.counterparty())
}

fn by_instrument_id(a: &Trade, b: &Trade) -> Ordering {
    a.instrument_id().cmp(b.instrument_id())
}

fn by_instrument_name(a: &Trade, b: &Trade) -> Ordering {
    a.instrument_name().cmp(b.instrument_name())
}

fn by_trade_date_time(a: &Trade, b: &Trade) -> Ordering {
    a.trade_date_time().cmp(&b.trade_date_time())
}

fn by_trade_id(a: &Trade, b: &Trade) -> Ordering {
    a.trade_id().cmp(b.trade_id())
}

fn by_trader(a: &Trade, b: &Trade) -> Ordering {
    a.trader().cmp(b.trader())
}

impl SortField {
    /// Resolves a field name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for names that are not sortable.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        SORT_TABLE
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.field)
    }

    /// Returns this field's row in [`SORT_TABLE`].
    #[must_use]
    pub fn entry(self) -> &'static SortEntry {
        &SORT_TABLE[self as usize]
    }

    /// Returns the ascending comparator for this field.
    #[must_use]
    pub fn comparator(self) -> TradeComparator {
        self.entry().compare
    }

    /// Returns the wire name of this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.entry().name
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
