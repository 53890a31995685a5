//! # Fixtures
//!
//! Synthetic data used to populate the record store at startup.

pub mod generator;

pub use generator::{generate_records, random_seed};
