//! Test fixtures and data generators
//!
//! Creates the standard tables, seeds rows directly over SQL (the API
//! deliberately has no write path for messages), and declares typed views
//! of the response envelopes.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chatlog_db::PgPool;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Guards the shared-table DDL; concurrent CREATE TABLE IF NOT EXISTS
/// statements can still collide inside Postgres.
static STANDARD_TABLES: OnceCell<()> = OnceCell::const_new();

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A table name no other test uses, including tests in other processes
pub fn unique_table_name(prefix: &str) -> String {
    format!("{prefix}_{}_{}", std::process::id(), unique_suffix())
}

/// Create the standard `messages` and `users` tables if absent
pub async fn ensure_standard_tables(pool: &PgPool) -> Result<()> {
    STANDARD_TABLES
        .get_or_try_init(|| create_standard_tables(pool))
        .await?;
    Ok(())
}

async fn create_standard_tables(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS messages (
            id BIGSERIAL PRIMARY KEY,
            author TEXT,
            text TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username TEXT,
            is_admin BOOLEAN NOT NULL DEFAULT false,
            is_banned BOOLEAN NOT NULL DEFAULT false,
            has_unlocked_pets BOOLEAN NOT NULL DEFAULT false,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert a message with an explicit timestamp, returning its id
pub async fn seed_message(
    pool: &PgPool,
    author: &str,
    text: &str,
    created_at: &str,
) -> Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r"
        INSERT INTO messages (author, text, created_at)
        VALUES ($1, $2, $3::timestamptz)
        RETURNING id
        ",
    )
    .bind(author)
    .bind(text)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Insert a user, returning their id
pub async fn seed_user(pool: &PgPool, username: &str) -> Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r"INSERT INTO users (username) VALUES ($1) RETURNING id",
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Create an archive table shaped nothing like the standard one
///
/// Columns exercise the alias chains: `user_id` for the author, `content`
/// for the body, `inserted_at` as the only timestamp candidate.
pub async fn create_archive_table(pool: &PgPool, name: &str) -> Result<()> {
    let sql = format!(
        r"
        CREATE TABLE {name} (
            id BIGSERIAL PRIMARY KEY,
            user_id TEXT,
            content TEXT,
            inserted_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "
    );
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}

/// Seed one row into an archive table created by [`create_archive_table`]
pub async fn seed_archive_row(
    pool: &PgPool,
    table: &str,
    user_id: &str,
    content: &str,
    inserted_at: &str,
) -> Result<()> {
    let sql = format!(
        r"INSERT INTO {table} (user_id, content, inserted_at) VALUES ($1, $2, $3::timestamptz)"
    );
    sqlx::query(&sql)
        .bind(user_id)
        .bind(content)
        .bind(inserted_at)
        .execute(pool)
        .await?;
    Ok(())
}

/// Drop a test table
pub async fn drop_table(pool: &PgPool, name: &str) -> Result<()> {
    let sql = format!("DROP TABLE IF EXISTS {name}");
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}

/// `{success, count, messages}` or `{success, count, users}` envelope
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub success: bool,
    pub count: i64,
    #[serde(default)]
    pub messages: Vec<Value>,
    #[serde(default)]
    pub users: Vec<Value>,
}

/// `{success, count}` envelope
#[derive(Debug, Deserialize)]
pub struct CountEnvelope {
    pub success: bool,
    pub count: i64,
}

/// `{success, schema, table, columns}` envelope
#[derive(Debug, Deserialize)]
pub struct SchemaEnvelope {
    pub success: bool,
    pub schema: String,
    pub table: String,
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnView {
    pub name: String,
    #[serde(rename = "dataType")]
    pub data_type: String,
    pub nullable: bool,
}

/// `{success, user}` envelope
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub success: bool,
    pub user: Value,
}

/// One canonical message from the legacy export
#[derive(Debug, Deserialize)]
pub struct CanonicalView {
    pub timestamp: Value,
    #[serde(rename = "rawData")]
    pub raw_data: Value,
}

/// `/healthz` success body
#[derive(Debug, Deserialize)]
pub struct HealthView {
    pub ok: bool,
    pub db: bool,
    pub schema: String,
    pub table: String,
    #[serde(rename = "tableExists")]
    pub table_exists: bool,
}

/// Flexible view over every error envelope the service emits
#[derive(Debug, Deserialize)]
pub struct ErrorView {
    #[serde(default)]
    pub success: Option<bool>,
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
