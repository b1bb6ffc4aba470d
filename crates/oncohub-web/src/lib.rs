//! oncohub-web — Axum server for the OncoHub article explorer.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
