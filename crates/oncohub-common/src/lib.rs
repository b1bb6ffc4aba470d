//! oncohub-common — Shared errors and the sandboxed HTTP client used across all OncoHub crates.

pub mod error;
pub mod sandbox;

pub use error::{ApiError, OncoHubError, Result};
pub use sandbox::SandboxClient;
