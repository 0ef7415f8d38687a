//! Legacy WorkAdventure export endpoints
//!
//! The game client consumes a bare array of canonical messages from
//! whatever table this deployment points at. The delete is refused unless
//! the deployment explicitly allows destructive operations.

use axum::extract::State;
use axum::Json;
use chatlog_db::CanonicalMessage;
use serde_json::{json, Value};
use tracing::info;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Export every archived message
///
/// GET /workadventure/messages
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Json<Vec<CanonicalMessage>>> {
    let messages = state
        .archive()
        .list_messages()
        .await
        .map_err(|error| ApiError::legacy("Failed to fetch messages", error))?;

    Ok(Json(messages))
}

/// Delete every archived message
///
/// DELETE /workadventure/messages
pub async fn delete_messages(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let deleted = state
        .archive()
        .delete_all()
        .await
        .map_err(|error| ApiError::legacy("Failed to delete messages", error))?;

    info!(deleted, table = %state.table().qualified(), "Archive cleared");

    Ok(Json(json!({ "success": true })))
}
