//! Recent search queries, persisted as a JSON list, most-recent-first.

use anyhow::Result;

use crate::kv::KvStore;

const KEY: &str = "search_history";

/// Bounded number of retained queries.
pub const MAX_ENTRIES: usize = 5;

/// Most-recent-first list of distinct past queries over a key-value store.
pub struct SearchHistory<S: KvStore> {
    store: S,
}

impl<S: KvStore> SearchHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<String>> {
        match self.store.get(KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(vec![]),
        }
    }

    /// Record a committed search. Blank queries are ignored; a duplicate is
    /// promoted to the front rather than re-inserted; the list is trimmed
    /// to `MAX_ENTRIES`.
    pub fn record(&mut self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let mut entries = self.load()?;
        entries.retain(|e| e != query);
        entries.insert(0, query.to_string());
        entries.truncate(MAX_ENTRIES);

        self.store.set(KEY, &serde_json::to_string(&entries)?)?;
        Ok(())
    }

    pub fn entries(&self) -> Result<Vec<String>> {
        self.load()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_most_recent_first() {
        let mut history = SearchHistory::new(MemoryStore::new());
        history.record("kras").unwrap();
        history.record("egfr").unwrap();
        assert_eq!(history.entries().unwrap(), vec!["egfr", "kras"]);
    }

    #[test]
    fn test_duplicate_promoted_not_reinserted() {
        let mut history = SearchHistory::new(MemoryStore::new());
        history.record("kras").unwrap();
        history.record("egfr").unwrap();
        history.record("kras").unwrap();
        assert_eq!(history.entries().unwrap(), vec!["kras", "egfr"]);
    }

    #[test]
    fn test_bounded_to_five() {
        let mut history = SearchHistory::new(MemoryStore::new());
        for q in ["a", "b", "c", "d", "e", "f"] {
            history.record(q).unwrap();
        }
        assert_eq!(history.entries().unwrap(), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_blank_queries_ignored() {
        let mut history = SearchHistory::new(MemoryStore::new());
        history.record("   ").unwrap();
        history.record("").unwrap();
        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let mut history = SearchHistory::new(MemoryStore::new());
        history.record("kras").unwrap();
        history.clear().unwrap();
        assert!(history.entries().unwrap().is_empty());
    }
}
