//! Response types and error handling for API endpoints
//!
//! Every handler converts its own failures into a JSON envelope here;
//! nothing propagates to a framework-level catch-all. The two HTTP
//! surfaces render differently: `/api` uses the `{success:false, error,
//! details}` envelope, while the legacy export uses bare `{error, details,
//! hint?}` objects that its existing consumers parse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chatlog_db::StoreError;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, warn};

/// Remediation hint attached to a missing archive table.
const TABLE_HINT: &str =
    "Set MESSAGES_TABLE and DB_SCHEMA env vars to match your database, or create the table.";

/// Remediation hint attached to a missing database.
const DATABASE_HINT: &str = "Verify DB_NAME in your environment variables.";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure on the `/api` surface.
    #[error("{context}: {source}")]
    Api {
        context: &'static str,
        source: StoreError,
    },

    /// Failure on the legacy export surface.
    #[error("{context}: {source}")]
    Legacy {
        context: &'static str,
        source: StoreError,
    },

    /// A request parameter failed validation.
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn api(context: &'static str, source: StoreError) -> Self {
        Self::Api { context, source }
    }

    pub fn legacy(context: &'static str, source: StoreError) -> Self {
        Self::Legacy { context, source }
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Api { source, .. } => match source {
                StoreError::NoValidFields => StatusCode::BAD_REQUEST,
                StoreError::UserNotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Legacy { source, .. } => match source {
                StoreError::ReadOnly => StatusCode::METHOD_NOT_ALLOWED,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The JSON envelope for this error, shaped per surface.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::Api { context, source } => match source {
                StoreError::NoValidFields | StoreError::UserNotFound => json!({
                    "success": false,
                    "error": source.to_string(),
                }),
                _ => json!({
                    "success": false,
                    "error": context,
                    "details": source.to_string(),
                }),
            },
            Self::Legacy { context, source } => match source {
                StoreError::ReadOnly => json!({
                    "success": false,
                    "error": "read_only",
                    "message": source.to_string(),
                }),
                StoreError::TableNotFound { .. } => json!({
                    "error": "table_not_found",
                    "details": source.to_string(),
                    "hint": TABLE_HINT,
                }),
                StoreError::DatabaseNotFound { .. } => json!({
                    "error": "database_not_found",
                    "details": source.to_string(),
                    "hint": DATABASE_HINT,
                }),
                StoreError::Database { message, code } => {
                    let mut body = json!({
                        "error": context,
                        "details": message,
                    });
                    if let Some(code) = code {
                        body["code"] = json!(code);
                    }
                    body
                }
                _ => json!({
                    "error": context,
                    "details": source.to_string(),
                }),
            },
            Self::InvalidQuery(message) => json!({
                "success": false,
                "error": message,
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
