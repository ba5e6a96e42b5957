use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

use crate::{
    errors::{LedgerError, Result},
    ledger::Ledger,
    utils::persistence::write_atomic,
};

use super::SnapshotBackend;

/// Filesystem-backed JSON snapshot: `{ "transactions": [ ... ] }`.
///
/// Writes stage the full document next to the target and rename it into
/// place, so readers only ever observe a complete snapshot.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStorage {
    path: PathBuf,
}

impl JsonSnapshotStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for JsonSnapshotStorage {
    fn load(&self) -> Result<Option<Ledger>> {
        let location = self.location();
        match fs::read_to_string(&self.path) {
            Ok(data) => parse_snapshot(&data, &location).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %location, "no ledger snapshot yet");
                Ok(None)
            }
            Err(err) => Err(LedgerError::corrupt(location, err)),
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Replaces the snapshot at `path` with `ledger`.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    let location = path.display().to_string();
    let json =
        serde_json::to_string_pretty(ledger).map_err(|err| LedgerError::persist(&location, err))?;
    write_atomic(path, &json).map_err(|err| LedgerError::persist(&location, err))?;
    trace!(path = %location, transactions = ledger.len(), "snapshot replaced");
    Ok(())
}

/// Reads a snapshot, failing on anything that is not a well-formed ledger.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let location = path.display().to_string();
    let data = fs::read_to_string(path).map_err(|err| LedgerError::corrupt(&location, err))?;
    parse_snapshot(&data, &location)
}

fn parse_snapshot(data: &str, location: &str) -> Result<Ledger> {
    let ledger: Ledger =
        serde_json::from_str(data).map_err(|err| LedgerError::corrupt(location, err))?;
    debug!(path = %location, transactions = ledger.len(), "snapshot loaded");
    Ok(ledger)
}
