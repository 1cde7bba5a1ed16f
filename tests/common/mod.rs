use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use spendbook::JsonFileStore;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a file store backed by a unique temporary directory and returns it
/// with the path it writes to, for reopening in the same test.
pub fn setup_file_store() -> (JsonFileStore, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("store.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = JsonFileStore::open(&path).expect("open json store");
    (store, path)
}
