//! Live schema discovery and identifier safety
//!
//! The archive table is named by environment variables, so its identity and
//! shape are only known at runtime. Everything that ends up inside SQL text
//! instead of a bind parameter goes through [`sanitize_identifier`] and
//! [`quote_identifier`] first; [`TableConfig`] can only be built through
//! that filter.

use serde::Serialize;
use sqlx::prelude::FromRow;
use sqlx::PgPool;
use tracing::instrument;

use crate::error::StoreResult;
use crate::repositories::error::map_db_error;

/// Schema used when none is configured or the configured one is unusable.
pub const DEFAULT_SCHEMA: &str = "public";

/// Table used when none is configured or the configured one is unusable.
pub const DEFAULT_TABLE: &str = "messages";

/// Column names that can order the archive, most preferred first.
const TIMESTAMP_COLUMNS: &[&str] = &[
    "created_at",
    "timestamp",
    "createdat",
    "inserted_at",
    "created",
    "time",
    "date",
];

/// Accepts an identifier made of ASCII alphanumerics and underscores,
/// rejecting anything else rather than attempting to escape it.
pub fn sanitize_identifier(raw: &str) -> Option<&str> {
    let valid = !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    valid.then_some(raw)
}

/// Double-quotes an identifier for interpolation into SQL text, doubling
/// any embedded quote.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Picks the column the archive should be ordered by, if any.
///
/// Matching is case-insensitive against the live column list, but the
/// returned name is the candidate spelling, which is what the quoted
/// ORDER BY clause is built from.
pub fn pick_timestamp_column(columns: &[String]) -> Option<&'static str> {
    TIMESTAMP_COLUMNS.iter().copied().find(|candidate| {
        columns
            .iter()
            .any(|column| column.eq_ignore_ascii_case(candidate))
    })
}

/// The schema-qualified archive table, sanitized at construction.
#[derive(Debug, Clone)]
pub struct TableConfig {
    schema: String,
    table: String,
}

impl TableConfig {
    /// Resolves the configured schema and table, falling back to the
    /// defaults when a value is absent or fails the identifier filter.
    pub fn resolve(schema: Option<&str>, table: Option<&str>) -> Self {
        Self {
            schema: resolve_identifier(schema, DEFAULT_SCHEMA),
            table: resolve_identifier(table, DEFAULT_TABLE),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// `"schema"."table"`, ready for interpolation into SQL text.
    pub fn qualified(&self) -> String {
        format!(
            "{}.{}",
            quote_identifier(&self.schema),
            quote_identifier(&self.table)
        )
    }
}

fn resolve_identifier(configured: Option<&str>, default: &str) -> String {
    configured
        .and_then(sanitize_identifier)
        .unwrap_or(default)
        .to_string()
}

/// One column of the archive table, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

#[derive(Debug, FromRow)]
struct ColumnRow {
    column_name: String,
    data_type: String,
    is_nullable: String,
}

impl From<ColumnRow> for ColumnDescriptor {
    fn from(row: ColumnRow) -> Self {
        Self {
            name: row.column_name,
            data_type: row.data_type,
            nullable: row.is_nullable == "YES",
        }
    }
}

/// Reads table shapes from `information_schema`.
#[derive(Clone)]
pub struct SchemaResolver {
    pool: PgPool,
}

impl SchemaResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Column names of the table, in declared order. An empty list means
    /// the table does not exist.
    #[instrument(skip(self))]
    pub async fn list_columns(&self, table: &TableConfig) -> StoreResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT column_name
            FROM information_schema.columns
            WHERE table_schema = $1 AND table_name = $2
            ORDER BY ordinal_position
            ",
        )
        .bind(table.schema())
        .bind(table.table())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    /// Full column descriptions of the table, in declared order.
    #[instrument(skip(self))]
    pub async fn describe_columns(&self, table: &TableConfig) -> StoreResult<Vec<ColumnDescriptor>> {
        let rows = sqlx::query_as::<_, ColumnRow>(
            r"
            SELECT column_name, data_type, is_nullable
            FROM information_schema.columns
            WHERE table_schema = $1 AND table_name = $2
            ORDER BY ordinal_position
            ",
        )
        .bind(table.schema())
        .bind(table.table())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ColumnDescriptor::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn table_exists(&self, table: &TableConfig) -> StoreResult<bool> {
        let found = sqlx::query_scalar::<_, i32>(
            r"
            SELECT 1
            FROM information_schema.tables
            WHERE table_schema = $1 AND table_name = $2
            ",
        )
        .bind(table.schema())
        .bind(table.table())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(found.is_some())
    }
}
