use std::{path::PathBuf, sync::Mutex};

use budget_ledger::{storage::JsonStorage, Store};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh directory that outlives the calling test.
#[allow(dead_code)]
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Store backed by `data.json` inside an isolated directory.
#[allow(dead_code)]
pub fn setup_store() -> (Store, PathBuf) {
    let path = temp_dir().join("data.json");
    let store = Store::with_storage(JsonStorage::new(&path));
    (store, path)
}
