//! Bookmarked article ids, persisted as a JSON list.

use anyhow::Result;

use crate::kv::KvStore;

const KEY: &str = "bookmarks";

/// Set of bookmarked article ids over a key-value store. Insertion order
/// is preserved; membership survives reconstruction from the same store.
pub struct Bookmarks<S: KvStore> {
    store: S,
}

impl<S: KvStore> Bookmarks<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<String>> {
        match self.store.get(KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(vec![]),
        }
    }

    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.load()?.iter().any(|b| b == id))
    }

    /// Flip membership for `id`; returns the new membership state.
    /// Toggling twice restores the original set.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let mut ids = self.load()?;
        let bookmarked = if let Some(pos) = ids.iter().position(|b| b == id) {
            ids.remove(pos);
            false
        } else {
            ids.push(id.to_string());
            true
        };
        self.store.set(KEY, &serde_json::to_string(&ids)?)?;
        Ok(bookmarked)
    }

    pub fn all(&self) -> Result<Vec<String>> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_toggle_round_trip() {
        let mut bookmarks = Bookmarks::new(MemoryStore::new());
        assert!(!bookmarks.contains("111").unwrap());

        assert!(bookmarks.toggle("111").unwrap());
        assert!(bookmarks.contains("111").unwrap());

        assert!(!bookmarks.toggle("111").unwrap());
        assert!(!bookmarks.contains("111").unwrap());
        assert!(bookmarks.all().unwrap().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut bookmarks = Bookmarks::new(MemoryStore::new());
        bookmarks.toggle("b").unwrap();
        bookmarks.toggle("a").unwrap();
        bookmarks.toggle("c").unwrap();
        assert_eq!(bookmarks.all().unwrap(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_survives_store_reconstruction() {
        let mut store = MemoryStore::new();
        {
            let mut bookmarks = Bookmarks::new(&mut store);
            bookmarks.toggle("42").unwrap();
        }
        let bookmarks = Bookmarks::new(&mut store);
        assert!(bookmarks.contains("42").unwrap());
    }
}
