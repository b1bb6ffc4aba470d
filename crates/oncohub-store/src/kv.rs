//! Key-value store trait and its two implementations.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// String-keyed store of opaque JSON-encoded values. Injected into the
/// consumers so tests can substitute an in-memory store.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Lets one backing store serve several consumers (bookmarks and history
/// share a single file with distinct keys).
impl<S: KvStore> KvStore for std::sync::Arc<std::sync::Mutex<S>> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.lock()
            .map_err(|_| anyhow::anyhow!("store mutex poisoned"))?
            .get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.lock()
            .map_err(|_| anyhow::anyhow!("store mutex poisoned"))?
            .set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.lock()
            .map_err(|_| anyhow::anyhow!("store mutex poisoned"))?
            .remove(key)
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object, written back whole on every
/// mutation. A single process owns the file, so read-modify-write without
/// locking matches how the browser serialises local-storage access.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing content. A missing file
    /// is an empty store; the parent directory is created when absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory {:?}", parent))?;
        }

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file {:?}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Store file {:?} is not a JSON object", path))?
        } else {
            HashMap::new()
        };

        debug!(?path, keys = entries.len(), "Opened JSON file store");
        Ok(Self { path, entries })
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write store file {:?}", self.path))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set("bookmarks", r#"["111","222"]"#).unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("bookmarks").unwrap().as_deref(), Some(r#"["111","222"]"#));
    }

    #[test]
    fn test_file_store_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get("a").unwrap().is_none());
    }
}
