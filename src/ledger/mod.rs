//! Ledger domain models and persistence-friendly types.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use ledger::Ledger;
pub use summary::{CategoryShare, MonthTotals, Summary, YearMonth};
pub use transaction::{
    parse_timestamp, title_case, Transaction, TransactionKind, TIMESTAMP_FORMAT,
};
