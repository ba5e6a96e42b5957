#![doc(test(attr(deny(warnings))))]

//! Ledger Core records income and expense transactions, persists them as an
//! atomically replaced snapshot, and derives summaries and breakdowns from the
//! recorded sequence.
//!
//! ```
//! use ledger_core::{core::LedgerStore, ledger::Transaction, storage::MemoryStorage};
//! use rust_decimal::Decimal;
//!
//! let mut store = LedgerStore::load(Box::new(MemoryStorage::new())).unwrap();
//! store.append(Transaction::income(Decimal::from(100), "salary", "").unwrap()).unwrap();
//! store.append(Transaction::expense(Decimal::from(40), "groceries", "").unwrap()).unwrap();
//! assert_eq!(store.balance(), Decimal::from(60));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("ledger_core tracing initialized");
    });
}
