//! Common test utilities for integration tests
//!
//! Each test gets its own store file under the system temp directory,
//! removed again when the guard is dropped.

use std::fs;
use std::path::PathBuf;

use healthtrack_host::store::JsonFileStore;

/// Temporary JSON store file
pub struct TempStore {
    pub dir: PathBuf,
    pub path: PathBuf,
}

impl TempStore {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("healthtrack-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("users.json");
        Self { dir, path }
    }

    /// Seed the store file with raw JSON
    pub fn with_contents(contents: &str) -> Self {
        let temp = Self::new();
        fs::create_dir_all(&temp.dir).expect("Failed to create temp dir");
        fs::write(&temp.path, contents).expect("Failed to seed store");
        temp
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.path)
    }

    pub fn read_json(&self) -> serde_json::Value {
        let raw = fs::read_to_string(&self.path).expect("Failed to read store");
        serde_json::from_str(&raw).expect("Store is not valid JSON")
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}
