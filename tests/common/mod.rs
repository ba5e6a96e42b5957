#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use ledger_core::core::LedgerStore;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Opens a JSON-backed store in an isolated directory, returning it with its file path.
pub fn setup_json_store() -> (LedgerStore, PathBuf) {
    let path = temp_dir().join("ledger.json");
    let store = LedgerStore::open_json(&path).expect("open json store");
    (store, path)
}
