//! Bookmark endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use oncohub_common::ApiError;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct BookmarkState {
    pub id: String,
    pub bookmarked: bool,
}

/// GET /api/bookmarks — all bookmarked article ids, insertion order.
pub async fn bookmarks_list(State(state): State<SharedState>) -> Result<Json<Vec<String>>, ApiError> {
    let bookmarks = state.bookmarks.lock().await;
    Ok(Json(bookmarks.all()?))
}

/// POST /api/bookmarks/{id}/toggle — flip membership, return the new state.
pub async fn bookmark_toggle(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<BookmarkState>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("empty article id".to_string()));
    }
    let mut bookmarks = state.bookmarks.lock().await;
    let bookmarked = bookmarks.toggle(&id)?;
    Ok(Json(BookmarkState { id, bookmarked }))
}
