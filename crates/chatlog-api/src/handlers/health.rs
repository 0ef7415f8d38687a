//! Health and diagnostics handler
//!
//! A single endpoint answering "is the database reachable and is the
//! configured table actually there". It never fails the request: any
//! error degrades to `{ok:false, error}` with a 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Health and configuration diagnostics
///
/// GET /healthz
pub async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match snapshot(&state).await {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false, "error": error })),
        ),
    }
}

async fn snapshot(state: &AppState) -> Result<Value, String> {
    chatlog_db::probe(state.pool())
        .await
        .map_err(|error| error.to_string())?;

    let table = state.table();
    let table_exists = state
        .resolver()
        .table_exists(table)
        .await
        .map_err(|error| error.to_string())?;

    Ok(json!({
        "ok": true,
        "db": true,
        "schema": table.schema(),
        "table": table.table(),
        "tableExists": table_exists,
    }))
}
