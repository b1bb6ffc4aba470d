//! oncohub-store — Key-value persistence for bookmarks and search history.
//!
//! The store interface mirrors browser local storage: string keys mapping
//! to opaque JSON-encoded values, no schema versioning, and loss of the
//! backing file is acceptable data loss.

pub mod bookmarks;
pub mod history;
pub mod kv;

pub use bookmarks::Bookmarks;
pub use history::SearchHistory;
pub use kv::{JsonFileStore, KvStore, MemoryStore};
