pub mod json_backend;
pub mod legacy;
pub mod memory;

use crate::{errors::Result, ledger::Ledger};

/// Narrow persistence contract behind the ledger store.
///
/// Every `save` replaces the whole snapshot; a later `load` sees either the
/// previous snapshot or the new one, never a mix of both.
pub trait SnapshotBackend: Send + Sync {
    /// Returns `None` when no snapshot has been written yet.
    fn load(&self) -> Result<Option<Ledger>>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
    /// Human readable location used in error messages.
    fn location(&self) -> String;
}

pub use json_backend::JsonSnapshotStorage;
pub use legacy::LegacyExport;
pub use memory::MemoryStorage;
