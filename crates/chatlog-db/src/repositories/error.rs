//! Error mapping utilities for repositories

use crate::error::StoreError;
use crate::schema::TableConfig;

/// SQLSTATE for "relation does not exist".
const UNDEFINED_TABLE: &str = "42P01";

/// SQLSTATE for "database does not exist".
const INVALID_CATALOG: &str = "3D000";

/// Wraps a driver error, keeping the message and SQLSTATE when the server
/// sent one.
pub fn map_db_error(error: sqlx::Error) -> StoreError {
    let code = error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.to_string());

    StoreError::Database {
        message: error.to_string(),
        code,
    }
}

/// Refines a generic database error from the archive path into the
/// table-missing and database-missing cases consumers distinguish.
///
/// SQLSTATE is checked first; the message heuristic only applies when no
/// code is conclusive, so a missing database is never misreported as a
/// missing table even though its message also says "does not exist".
pub fn classify_missing_relation(
    error: StoreError,
    table: &TableConfig,
    database: &str,
) -> StoreError {
    let StoreError::Database { message, code } = error else {
        return error;
    };

    let table_not_found = || StoreError::TableNotFound {
        schema: table.schema().to_string(),
        table: table.table().to_string(),
    };

    match code.as_deref() {
        Some(UNDEFINED_TABLE) => table_not_found(),
        Some(INVALID_CATALOG) => StoreError::DatabaseNotFound {
            database: database.to_string(),
        },
        _ if message.to_lowercase().contains("does not exist") => table_not_found(),
        _ => StoreError::Database { message, code },
    }
}
