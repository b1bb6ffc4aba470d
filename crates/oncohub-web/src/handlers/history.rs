//! Search-history endpoints.

use axum::{extract::State, http::StatusCode, Json};

use oncohub_common::ApiError;

use crate::state::SharedState;

/// GET /api/history — recent queries, most recent first.
pub async fn history_list(State(state): State<SharedState>) -> Result<Json<Vec<String>>, ApiError> {
    let history = state.history.lock().await;
    Ok(Json(history.entries()?))
}

/// DELETE /api/history — clear all recent queries.
pub async fn history_clear(State(state): State<SharedState>) -> Result<StatusCode, ApiError> {
    let mut history = state.history.lock().await;
    history.clear()?;
    Ok(StatusCode::NO_CONTENT)
}
