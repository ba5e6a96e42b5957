use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::aggregator::Aggregator;
use crate::ledger::{Summary, Transaction};

/// Ordered collection of every recorded transaction, in arrival order.
///
/// The balance is never stored; it is derived from `transactions` on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Income minus expenses over the full sequence.
    pub fn balance(&self) -> Decimal {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    pub fn summary(&self) -> Summary {
        Aggregator::summarize(&self.transactions)
    }

    pub(crate) fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub(crate) fn extend(&mut self, transactions: impl IntoIterator<Item = Transaction>) {
        self.transactions.extend(transactions);
    }

    /// Drops everything past `len`; used to undo an append whose persist failed.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.transactions.truncate(len);
    }
}
