//! # Query Pipeline Property Tests
//!
//! Property-based tests over arbitrary record stores and query parameters.
//!
//! These tests use proptest to generate small stores with deliberate key
//! collisions so that stability and inclusive bounds are exercised.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use trade_query::application::services::sort::{SORT_TABLE, SortField};
use trade_query::application::services::trade_query::{
    MAX_PER_PAGE, Pagination, TradeQuery, find_by_id, query,
};
use trade_query::domain::entities::{Trade, TradeDetails};
use trade_query::domain::value_objects::{BuySellIndicator, Price, Quantity, TradeId};

const ASSET_CLASSES: [&str; 5] = ["Equity", "Bond", "FX", "equity", "fx"];
const NAMES: [&str; 3] = ["alpha", "beta", "gamma"];

// ============================================================================
// Arbitrary Implementations
// ============================================================================

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Fields of a trade apart from its ID, which is assigned by position.
#[derive(Debug, Clone)]
struct TradeSeed {
    asset_class: usize,
    side: bool,
    cents: u32,
    hour: i64,
    name: usize,
    counterparty: Option<usize>,
}

fn arb_seed() -> impl Strategy<Value = TradeSeed> {
    (
        0..ASSET_CLASSES.len(),
        any::<bool>(),
        0u32..=10_000,
        0i64..48,
        0..NAMES.len(),
        proptest::option::of(0..NAMES.len()),
    )
        .prop_map(|(asset_class, side, cents, hour, name, counterparty)| TradeSeed {
            asset_class,
            side,
            cents,
            hour,
            name,
            counterparty,
        })
}

fn build(index: usize, seed: &TradeSeed) -> Trade {
    let side = if seed.side {
        BuySellIndicator::Buy
    } else {
        BuySellIndicator::Sell
    };
    let details = TradeDetails::new(
        side,
        Price::new(f64::from(seed.cents) / 100.0).unwrap(),
        Quantity::new(1).unwrap(),
    );
    let mut builder = Trade::builder(
        TradeId::new(format!("T{index:03}")),
        epoch() + Duration::hours(seed.hour),
        details,
    )
    .asset_class(ASSET_CLASSES[seed.asset_class])
    .instrument(NAMES[seed.name].to_uppercase(), NAMES[seed.name]);
    if let Some(cp) = seed.counterparty {
        builder = builder.counterparty(NAMES[cp]);
    }
    builder.build()
}

fn arb_store() -> impl Strategy<Value = Vec<Trade>> {
    proptest::collection::vec(arb_seed(), 0..40)
        .prop_map(|seeds| seeds.iter().enumerate().map(|(i, s)| build(i, s)).collect())
}

fn arb_sort() -> impl Strategy<Value = SortField> {
    (0..SORT_TABLE.len()).prop_map(|i| SORT_TABLE[i].field)
}

fn position(store: &[Trade], trade: &Trade) -> usize {
    store
        .iter()
        .position(|t| t.trade_id() == trade.trade_id())
        .unwrap()
}

fn all_pages(store: &[Trade], params: TradeQuery, per_page: u32) -> Vec<Trade> {
    let mut out = Vec::new();
    let mut page = 1;
    loop {
        let result = query(
            store,
            &params
                .clone()
                .with_pagination(Pagination::new(page, per_page).unwrap()),
        );
        if result.is_empty() {
            return out;
        }
        out.extend(result.items);
        page += 1;
    }
}

// ============================================================================
// Filter Properties
// ============================================================================

proptest! {
    #[test]
    fn asset_class_matches_case_insensitively(store in arb_store(), class in 0..ASSET_CLASSES.len()) {
        let wanted = ASSET_CLASSES[class];
        let params = TradeQuery::new()
            .with_asset_class(wanted)
            .with_pagination(Pagination::new(1, MAX_PER_PAGE).unwrap());
        let page = query(&store, &params);

        let expected = store
            .iter()
            .filter(|t| t.asset_class().eq_ignore_ascii_case(wanted))
            .count();
        prop_assert_eq!(page.total_count, expected);
        for trade in &page.items {
            prop_assert!(trade.asset_class().eq_ignore_ascii_case(wanted));
        }
    }

    #[test]
    fn time_bounds_are_inclusive(store in arb_store(), a in 0i64..48, b in 0i64..48) {
        let start = epoch() + Duration::hours(a.min(b));
        let end = epoch() + Duration::hours(a.max(b));
        let params = TradeQuery::new()
            .with_time_range(Some(start), Some(end))
            .with_pagination(Pagination::new(1, MAX_PER_PAGE).unwrap());
        let page = query(&store, &params);

        let expected = store
            .iter()
            .filter(|t| t.trade_date_time() >= start && t.trade_date_time() <= end)
            .count();
        prop_assert_eq!(page.total_count, expected);
        for trade in &page.items {
            prop_assert!(trade.trade_date_time() >= start);
            prop_assert!(trade.trade_date_time() <= end);
        }
    }

    #[test]
    fn price_bounds_are_inclusive(store in arb_store(), lo in 0u32..=10_000, hi in 0u32..=10_000) {
        let min = f64::from(lo) / 100.0;
        let max = f64::from(hi) / 100.0;
        let params = TradeQuery::new()
            .with_price_range(Some(min), Some(max))
            .with_pagination(Pagination::new(1, MAX_PER_PAGE).unwrap());
        let page = query(&store, &params);

        for trade in &page.items {
            let price = trade.price().get();
            prop_assert!(price >= min && price <= max);
        }
        if min > max {
            prop_assert_eq!(page.total_count, 0);
        }
    }
}

// ============================================================================
// Sort Properties
// ============================================================================

proptest! {
    #[test]
    fn sort_is_ordered_and_stable(store in arb_store(), field in arb_sort()) {
        let params = TradeQuery::new()
            .with_sort(field)
            .with_pagination(Pagination::new(1, MAX_PER_PAGE).unwrap());
        let page = query(&store, &params);
        let compare = field.comparator();

        for pair in page.items.windows(2) {
            let order = compare(&pair[0], &pair[1]);
            prop_assert!(order.is_le(), "{} out of order", field);
            if order.is_eq() {
                prop_assert!(position(&store, &pair[0]) < position(&store, &pair[1]));
            }
        }
    }

    #[test]
    fn unrecognized_sort_keeps_store_order(store in arb_store(), name in "[a-z]{1,12}") {
        prop_assume!(SortField::parse(&name).is_none());
        let unsorted = query(&store, &TradeQuery::new());
        let sorted = query(&store, &TradeQuery::new().with_sort_name(&name));
        prop_assert_eq!(unsorted, sorted);
    }

    #[test]
    fn query_never_mutates_store(store in arb_store(), field in arb_sort()) {
        let before = store.clone();
        let _ = query(&store, &TradeQuery::new().with_sort(field));
        prop_assert_eq!(before, store);
    }
}

// ============================================================================
// Pagination Properties
// ============================================================================

proptest! {
    #[test]
    fn pages_reconstruct_filtered_set(
        store in arb_store(),
        per_page in 1u32..=MAX_PER_PAGE,
        field in proptest::option::of(arb_sort()),
    ) {
        let mut params = TradeQuery::new().with_trade_type("buy");
        if let Some(field) = field {
            params = params.with_sort(field);
        }

        let everything = query(
            &store,
            &params.clone().with_pagination(Pagination::new(1, MAX_PER_PAGE).unwrap()),
        );
        let paged = all_pages(&store, params, per_page);

        prop_assert_eq!(paged, everything.items);
    }

    #[test]
    fn total_count_ignores_pagination(store in arb_store(), page in 1u32..10, per_page in 1u32..=MAX_PER_PAGE) {
        let base = query(&store, &TradeQuery::new()).total_count;
        let paged = query(
            &store,
            &TradeQuery::new().with_pagination(Pagination::new(page, per_page).unwrap()),
        );
        prop_assert_eq!(paged.total_count, base);
        prop_assert_eq!(base, store.len());
        prop_assert!(paged.items.len() <= per_page as usize);
    }
}

// ============================================================================
// Lookup Properties
// ============================================================================

proptest! {
    #[test]
    fn lookup_finds_every_record(store in arb_store()) {
        for trade in &store {
            let found = find_by_id(&store, trade.trade_id().as_str());
            prop_assert_eq!(found, Some(trade));
        }
    }

    #[test]
    fn lookup_of_absent_id_is_none(store in arb_store(), id in "[a-z]{1,8}") {
        // Generated IDs are upper-case `T` followed by digits.
        prop_assert!(find_by_id(&store, &id).is_none());
    }
}
