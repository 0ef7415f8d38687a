//! User endpoints
//!
//! Reads over the standard `users` table plus the whitelisted moderation
//! patch. User ids are opaque strings end to end.

use axum::extract::{Path, State};
use axum::Json;
use chatlog_db::UserPatch;
use serde_json::{json, Value};

use crate::extractors::Page;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List users, newest first
///
/// GET /api/users?limit=&offset=
pub async fn list_users(State(state): State<AppState>, page: Page) -> ApiResult<Json<Value>> {
    let users = state
        .users()
        .list(page.limit, page.offset)
        .await
        .map_err(|error| ApiError::api("Failed to fetch users", error))?;

    Ok(Json(json!({
        "success": true,
        "count": users.len(),
        "users": users,
    })))
}

/// Count users
///
/// GET /api/users/count
pub async fn count_users(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let count = state
        .users()
        .count()
        .await
        .map_err(|error| ApiError::api("Failed to count users", error))?;

    Ok(Json(json!({
        "success": true,
        "count": count,
    })))
}

/// Get one user by id
///
/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let user = state
        .users()
        .get(&id)
        .await
        .map_err(|error| ApiError::api("Failed to fetch user", error))?;

    Ok(Json(json!({
        "success": true,
        "user": user,
    })))
}

/// Apply a moderation patch to one user
///
/// PATCH /api/users/:id (body: subset of `{is_admin, is_banned,
/// has_unlocked_pets}`; everything else in the body is ignored)
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let patch = UserPatch::from_body(&body);
    let user = state
        .users()
        .update(&id, patch)
        .await
        .map_err(|error| ApiError::api("Failed to update user", error))?;

    Ok(Json(json!({
        "success": true,
        "user": user,
    })))
}
