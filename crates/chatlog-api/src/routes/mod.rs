//! Route definitions
//!
//! The viewer's own API lives under `/api`, the legacy export keeps its
//! historical `/workadventure` prefix, and anything unmatched falls
//! through to the static front end.

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::{health, messages, schema, users, workadventure};
use crate::state::AppState;

/// Create the main router with all routes and the static fallback
pub fn create_router(static_dir: &str) -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(workadventure_routes())
        .route("/healthz", get(health::healthz))
        .fallback_service(ServeDir::new(static_dir))
}

/// Viewer API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::list_messages))
        .route("/messages/count", get(messages::count_messages))
        .route("/schema", get(schema::get_schema))
        .route("/users", get(users::list_users))
        .route("/users/count", get(users::count_users))
        .route("/users/:id", get(users::get_user).patch(users::update_user))
}

/// Legacy export routes; paths are load-bearing for existing consumers
fn workadventure_routes() -> Router<AppState> {
    Router::new().route(
        "/workadventure/messages",
        get(workadventure::list_messages).delete(workadventure::delete_messages),
    )
}
