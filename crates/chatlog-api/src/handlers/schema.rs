//! Schema introspection endpoint

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Describe the configured archive table
///
/// GET /api/schema
///
/// Columns come back in declared order, freshly read from the catalog on
/// every call; an unknown table yields an empty column list, not an error.
pub async fn get_schema(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let table = state.table();
    let columns = state
        .resolver()
        .describe_columns(table)
        .await
        .map_err(|error| ApiError::api("Failed to fetch schema", error))?;

    Ok(Json(json!({
        "success": true,
        "schema": table.schema(),
        "table": table.table(),
        "columns": columns,
    })))
}
