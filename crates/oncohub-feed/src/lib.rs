//! oncohub-feed — Accumulating article feed over a paginated search source.
//!
//! The session owns the merge policy (page 1 replaces, later pages append),
//! the continuation check, and a request sequence number that makes
//! out-of-order or superseded responses inert.

pub mod session;

pub use session::{FeedSession, PageRequest};
