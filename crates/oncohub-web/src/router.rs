//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    bookmarks::{bookmarks_list, bookmark_toggle},
    feed::{feed_more, feed_retry, feed_view, filters_submit, search_submit},
    history::{history_clear, history_list},
    home::home,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page shell
        .route("/", get(home))

        // Feed API
        .route("/api/feed",       get(feed_view))
        .route("/api/feed/more",  post(feed_more))
        .route("/api/feed/retry", post(feed_retry))
        .route("/api/search",     post(search_submit))
        .route("/api/filters",    post(filters_submit))

        // Bookmarks
        .route("/api/bookmarks",             get(bookmarks_list))
        .route("/api/bookmarks/{id}/toggle", post(bookmark_toggle))

        // Search history
        .route("/api/history", get(history_list).delete(history_clear))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
