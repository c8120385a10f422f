//! Group ledger.
//!
//! This module implements:
//! - Transaction types and statuses
//! - The transaction record
//! - Balance aggregation over a scope (one member or the whole group)
//! - Ledger search
//!
//! Aggregation is a pure function; it never mutates or caches.

pub mod balance;
pub mod error;
pub mod transaction;
pub mod types;

#[cfg(test)]
mod balance_props;

pub use balance::{LedgerAggregator, LedgerScope, LedgerSummary, aggregate};
pub use error::LedgerError;
pub use transaction::Transaction;
pub use types::{TransactionStatus, TransactionType};
