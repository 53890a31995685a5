//! # Trade Query Pipeline
//!
//! Filters, sorts and paginates a slice of trades.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. every active filter is applied conjunctively;
//! 2. if a sort field is set, the survivors are stably sorted ascending;
//! 3. the number of survivors becomes the page's `total_count`;
//! 4. the window `[(page - 1) * per_page, page * per_page)` is copied out.
//!
//! The store is only ever borrowed. Each call collects its own vector of
//! references and clones just the trades that land on the page, so concurrent
//! queries over a shared store never observe each other.
//!
//! # Examples
//!
//! ```
//! use trade_query::application::services::trade_query::{query, Pagination, TradeQuery};
//! use trade_query::application::services::sort::SortField;
//! use trade_query::domain::entities::Trade;
//!
//! let store: Vec<Trade> = Vec::new();
//! let params = TradeQuery::new()
//!     .with_asset_class("fx")
//!     .with_sort(SortField::TradeDateTime)
//!     .with_pagination(Pagination::new(1, 10).unwrap());
//!
//! let page = query(&store, &params);
//! assert!(page.items.is_empty());
//! assert_eq!(page.total_count, 0);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::sort::SortField;
use crate::domain::entities::Trade;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of records per page.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Largest accepted `per_page`.
pub const MAX_PER_PAGE: u32 = 100;

// ============================================================================
// Pagination
// ============================================================================

/// Validated page window.
///
/// # Invariants
///
/// - `page >= 1`
/// - `1 <= per_page <= MAX_PER_PAGE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    /// Creates a page window.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` naming `page` or `perPage` when
    /// either is out of range.
    pub fn new(page: u32, per_page: u32) -> ApplicationResult<Self> {
        if page < 1 {
            return Err(ApplicationError::validation(
                "page",
                "must be greater than or equal to 1",
            ));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(ApplicationError::validation(
                "perPage",
                format!("must be between 1 and {MAX_PER_PAGE}"),
            ));
        }
        Ok(Self { page, per_page })
    }

    /// Returns the 1-based page number.
    #[inline]
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[inline]
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the index of the first record on this page.
    ///
    /// Saturates instead of overflowing for very large page numbers.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.per_page as usize)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

// ============================================================================
// Query
// ============================================================================

/// Validated query over the trade store.
///
/// Absent filters impose no constraint. String filters are stored
/// lower-cased; matching lower-cases the record side too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeQuery {
    /// Case-insensitive exact match on `assetClass`.
    pub asset_class: Option<String>,
    /// Inclusive lower bound on `tradeDateTime`.
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `tradeDateTime`.
    pub end: Option<DateTime<Utc>>,
    /// Inclusive lower bound on `tradeDetails.price`.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on `tradeDetails.price`.
    pub max_price: Option<f64>,
    /// Case-insensitive exact match on `tradeDetails.buySellIndicator`.
    pub trade_type: Option<String>,
    /// Optional sort key.
    pub sort: Option<SortField>,
    /// Page window.
    pub pagination: Pagination,
}

impl TradeQuery {
    /// Creates a query with no filters, no sort and the default page window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to an asset class.
    #[must_use]
    pub fn with_asset_class(mut self, asset_class: &str) -> Self {
        self.asset_class = Some(asset_class.to_lowercase());
        self
    }

    /// Restricts results to an inclusive execution-time window.
    #[must_use]
    pub fn with_time_range(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Restricts results to an inclusive price band.
    #[must_use]
    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    /// Restricts results to a trade direction.
    #[must_use]
    pub fn with_trade_type(mut self, trade_type: &str) -> Self {
        self.trade_type = Some(trade_type.to_lowercase());
        self
    }

    /// Sorts results ascending by a field.
    #[must_use]
    pub fn with_sort(mut self, field: SortField) -> Self {
        self.sort = Some(field);
        self
    }

    /// Sorts by a field name; unrecognized names leave the query unsorted.
    #[must_use]
    pub fn with_sort_name(mut self, name: &str) -> Self {
        self.sort = SortField::parse(name);
        self
    }

    /// Sets the page window.
    #[must_use]
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Returns true if the trade satisfies every active filter.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        let details = trade.trade_details();
        let price = details.price().get();
        let executed_at = trade.trade_date_time();

        self.asset_class
            .as_deref()
            .is_none_or(|class| trade.asset_class().to_lowercase() == class)
            && self.start.is_none_or(|start| executed_at >= start)
            && self.end.is_none_or(|end| executed_at <= end)
            && self.min_price.is_none_or(|min| price >= min)
            && self.max_price.is_none_or(|max| price <= max)
            && self.trade_type.as_deref().is_none_or(|side| {
                details.buy_sell_indicator().as_str().to_lowercase() == side
            })
    }
}

// ============================================================================
// Page
// ============================================================================

/// A bounded slice of a filtered, possibly sorted, result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in result order.
    pub items: Vec<T>,
    /// Number of records that matched the filters, across all pages.
    pub total_count: usize,
    /// 1-based page number.
    pub page: u32,
    /// Page size that was requested.
    pub per_page: u32,
}

impl<T> Page<T> {
    /// Returns the number of pages needed to hold `total_count` records.
    ///
    /// Zero when nothing matched.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.per_page.max(1) as usize)
    }

    /// Returns true if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Runs a query over the store and returns the requested page.
///
/// Never fails: unmatched filters and pages past the end both produce an
/// empty page.
#[must_use]
pub fn query(store: &[Trade], params: &TradeQuery) -> Page<Trade> {
    let mut matched: Vec<&Trade> = store.iter().filter(|trade| params.matches(trade)).collect();

    if let Some(field) = params.sort {
        let compare = field.comparator();
        // `sort_by` is stable: equal keys keep their filtered order.
        matched.sort_by(|a, b| compare(a, b));
    }

    let total_count = matched.len();
    let pagination = params.pagination;

    let items = matched
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page() as usize)
        .cloned()
        .collect();

    Page {
        items,
        total_count,
        page: pagination.page(),
        per_page: pagination.per_page(),
    }
}

/// Finds the first trade whose ID equals `id` exactly.
#[must_use]
pub fn find_by_id<'a>(store: &'a [Trade], id: &str) -> Option<&'a Trade> {
    store.iter().find(|trade| trade.trade_id().as_str() == id)
}
