//! # Domain Layer
//!
//! Core types of the trade store.
//!
//! This layer contains:
//! - **Entities**: The [`Trade`](entities::Trade) record
//! - **Value Objects**: Validated identifiers, prices, quantities and enums
//! - **Errors**: Domain-specific error types

pub mod entities;
pub mod errors;
pub mod value_objects;
