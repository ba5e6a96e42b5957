use std::path::PathBuf;

use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::Result;
use crate::ledger::{Ledger, Summary, Transaction};
use crate::storage::{JsonSnapshotStorage, SnapshotBackend};

/// Owns the canonical transaction sequence and keeps the backend in step with it.
///
/// Construct once per session and hand it to whatever needs it. After every
/// successful append the backend holds exactly the in-memory sequence. When a
/// persist fails the append is rolled back, so memory also keeps matching the
/// last snapshot that made it to the backend.
pub struct LedgerStore {
    ledger: Ledger,
    backend: Box<dyn SnapshotBackend>,
}

impl LedgerStore {
    /// Reads the backend; a backend with no snapshot yields an empty ledger.
    pub fn load(backend: Box<dyn SnapshotBackend>) -> Result<Self> {
        let ledger = backend.load()?.unwrap_or_default();
        debug!(
            location = %backend.location(),
            transactions = ledger.len(),
            "ledger opened"
        );
        Ok(Self { ledger, backend })
    }

    /// Convenience for the JSON file backend.
    pub fn open_json(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load(Box::new(JsonSnapshotStorage::new(path)))
    }

    pub fn backend(&self) -> &dyn SnapshotBackend {
        self.backend.as_ref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Read-only view in insertion order.
    pub fn all(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn balance(&self) -> Decimal {
        self.ledger.balance()
    }

    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    /// Appends one transaction and rewrites the full snapshot.
    pub fn append(&mut self, transaction: Transaction) -> Result<&Ledger> {
        let previous_len = self.ledger.len();
        self.ledger.push(transaction);
        self.persist_or_rollback(previous_len)
    }

    /// Appends a batch and rewrites the snapshot once. All or nothing.
    pub fn append_all(
        &mut self,
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> Result<&Ledger> {
        let previous_len = self.ledger.len();
        self.ledger.extend(transactions);
        self.persist_or_rollback(previous_len)
    }

    /// Re-reads the backend, picking up snapshots written by other invocations.
    pub fn reload(&mut self) -> Result<&Ledger> {
        self.ledger = self.backend.load()?.unwrap_or_default();
        Ok(&self.ledger)
    }

    fn persist_or_rollback(&mut self, previous_len: usize) -> Result<&Ledger> {
        if let Err(err) = self.backend.save(&self.ledger) {
            self.ledger.truncate(previous_len);
            return Err(err);
        }
        debug!(
            location = %self.backend.location(),
            added = self.ledger.len() - previous_len,
            total = self.ledger.len(),
            "ledger persisted"
        );
        Ok(&self.ledger)
    }
}
