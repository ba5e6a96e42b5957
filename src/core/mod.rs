//! Ledger store and aggregation logic shared by every consumer.

pub mod aggregator;
pub mod ledger_store;
pub mod utils;

pub use aggregator::Aggregator;
pub use ledger_store::LedgerStore;
