//! File-backed key-value store. The whole key map lives in one JSON object
//! file and is rewritten atomically on every set.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, Result};
use crate::utils::app_data_dir;

const STORE_FILE: &str = "store.json";

/// Key-value store persisted as a single JSON object on disk.
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at the default application data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(app_data_dir().join(STORE_FILE))
    }

    /// Opens the store file at `path`, loading existing entries. A missing
    /// file starts empty; an unreadable one is reported as a storage error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn persists_entries_across_reopen() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("budget", "1000").unwrap();
        store.set("expenses", "[]").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("budget").as_deref(), Some("1000"));
        assert_eq!(reopened.get("expenses").as_deref(), Some("[]"));
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = TempDir::new().expect("create temp dir");
        let store = JsonFileStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get("budget"), None);
    }

    #[test]
    fn rewrite_leaves_no_tmp_file() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("store.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("budget", "1").unwrap();
        store.set("budget", "2").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
