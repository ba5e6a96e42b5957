use std::sync::Mutex;

use crate::{
    errors::{LedgerError, Result},
    ledger::Ledger,
};

use super::SnapshotBackend;

const LOCATION: &str = "memory";

/// Keeps the serialized snapshot in process. Useful for tests and dry runs;
/// it goes through the same JSON encoding as the file backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    snapshot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw snapshot text, valid or not.
    pub fn with_snapshot(raw: impl Into<String>) -> Self {
        Self {
            snapshot: Mutex::new(Some(raw.into())),
        }
    }

    /// Current snapshot text, if anything was written.
    pub fn raw(&self) -> Option<String> {
        self.snapshot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SnapshotBackend for MemoryStorage {
    fn load(&self) -> Result<Option<Ledger>> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|err| LedgerError::corrupt(LOCATION, err))?;
        match guard.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|err| LedgerError::corrupt(LOCATION, err)),
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string(ledger).map_err(|err| LedgerError::persist(LOCATION, err))?;
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|err| LedgerError::persist(LOCATION, err))?;
        *guard = Some(json);
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
