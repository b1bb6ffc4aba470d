//! HTTP handlers for all web routes.

pub mod bookmarks;
pub mod feed;
pub mod history;
pub mod home;

/// Minimal HTML escaping for values interpolated into page markup.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
