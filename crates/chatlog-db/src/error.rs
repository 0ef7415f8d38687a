//! Data layer error types

use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// Variants are shaped for the HTTP layer: each one carries exactly what
/// the response envelope for it needs, and nothing driver-specific beyond
/// the raw message and SQLSTATE.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The patch contained none of the updatable fields.
    #[error("No valid fields to update")]
    NoValidFields,

    /// No row matched the requested user id.
    #[error("User not found")]
    UserNotFound,

    /// Destructive operations are disabled for this deployment.
    #[error("Deleting messages is disabled. Data is sourced from the database only.")]
    ReadOnly,

    /// The configured archive table does not exist.
    #[error("Table {schema}.{table} not found")]
    TableNotFound { schema: String, table: String },

    /// The configured database does not exist or is not reachable.
    #[error("Database {database} does not exist or is not accessible")]
    DatabaseNotFound { database: String },

    /// Any other database failure, with the driver message and SQLSTATE
    /// when the server sent one.
    #[error("{message}")]
    Database {
        message: String,
        code: Option<String>,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
