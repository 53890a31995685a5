//! # Record Generator
//!
//! Seeded generator of synthetic trade records.
//!
//! Output is fully determined by `(count, seed, anchor)`, so a run can be
//! replayed by logging the seed. Trade times fall within the 30 days before
//! `anchor`.

use crate::domain::entities::{Trade, TradeDetails};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{BuySellIndicator, Price, Quantity, TradeId, TraderId};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Asset classes assigned to generated trades.
pub const ASSET_CLASSES: [&str; 3] = ["Equity", "Bond", "FX"];

/// Span of trade times, counted back from the anchor.
const TRADE_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

const MAX_PRICE: f64 = 100.0;
const MAX_QUANTITY: u64 = 1000;

const SURNAMES: [&str; 16] = [
    "Abbott", "Barnes", "Castillo", "Dawson", "Ellison", "Fischer", "Garner", "Hayes",
    "Ingram", "Jensen", "Keller", "Lowe", "Moreno", "Nakamura", "Osborne", "Pruitt",
];

const COMPANY_SUFFIXES: [&str; 7] = [
    "Group", "LLC", "Inc", "PLC", "and Sons", "Partners", "Ltd",
];

const WORDS: [&str; 24] = [
    "anchor", "beacon", "canyon", "delta", "ember", "falcon", "glacier", "harbor",
    "iris", "juniper", "kestrel", "lumen", "meridian", "nova", "orchid", "pioneer",
    "quartz", "raven", "summit", "tundra", "umber", "vertex", "willow", "zephyr",
];

/// Generates `count` trades from `seed`, with times before `anchor`.
///
/// Trade IDs are random UUIDs; with a 128-bit space, collisions are not
/// expected for any practical `count`, and the store rejects them if they occur.
///
/// # Errors
///
/// Returns a `DomainError` if a generated price or quantity is out of range.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use trade_query::infrastructure::fixtures::generate_records;
///
/// let anchor = Utc::now();
/// let a = generate_records(5, 42, anchor).unwrap();
/// let b = generate_records(5, 42, anchor).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_records(count: usize, seed: u64, anchor: DateTime<Utc>) -> DomainResult<Vec<Trade>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| generate_trade(&mut rng, anchor)).collect()
}

/// Draws a fresh seed from the thread-local generator.
#[must_use]
pub fn random_seed() -> u64 {
    rand::rng().random()
}

fn generate_trade<R: Rng>(rng: &mut R, anchor: DateTime<Utc>) -> DomainResult<Trade> {
    let side = *BuySellIndicator::ALL.choose(rng).unwrap_or(&BuySellIndicator::Buy);
    let cents = (rng.random_range(0.0..=MAX_PRICE) * 100.0).round() / 100.0;
    let details = TradeDetails::new(
        side,
        Price::new(cents)?,
        Quantity::new(rng.random_range(1..=MAX_QUANTITY))?,
    );

    let executed_at = anchor - Duration::seconds(rng.random_range(0..TRADE_WINDOW_SECS));
    let word = pick(rng, &WORDS);

    Ok(Trade::builder(TradeId::from_uuid(uuid(rng)), executed_at, details)
        .asset_class(pick(rng, &ASSET_CLASSES))
        .counterparty(format!(
            "{} {}",
            pick(rng, &SURNAMES),
            pick(rng, &COMPANY_SUFFIXES)
        ))
        .instrument(word.to_uppercase(), pick(rng, &WORDS))
        .trader(TraderId::from_uuid(uuid(rng)))
        .build())
}

fn pick<R: Rng>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}
