//! Message endpoints
//!
//! Fixed-table reads over the standard `messages` table.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::extractors::Page;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List messages, newest first
///
/// GET /api/messages?limit=&offset=
pub async fn list_messages(
    State(state): State<AppState>,
    page: Page,
) -> ApiResult<Json<Value>> {
    let messages = state
        .messages()
        .list(page.limit, page.offset)
        .await
        .map_err(|error| ApiError::api("Failed to fetch messages", error))?;

    Ok(Json(json!({
        "success": true,
        "count": messages.len(),
        "messages": messages,
    })))
}

/// Count messages
///
/// GET /api/messages/count
pub async fn count_messages(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let count = state
        .messages()
        .count()
        .await
        .map_err(|error| ApiError::api("Failed to count messages", error))?;

    Ok(Json(json!({
        "success": true,
        "count": count,
    })))
}
