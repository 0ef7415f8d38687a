//! Fixed-table reads over `messages`

use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::instrument;

use super::error::map_db_error;
use crate::error::StoreResult;
use crate::rows::row_to_json;

/// Paginated reads over the standard `messages` table.
///
/// This path serves the viewer's own API and deliberately assumes the
/// table name and its `created_at` column; the archive path is the one
/// that adapts to arbitrary shapes.
#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of messages, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: i64, offset: i64) -> StoreResult<Vec<Map<String, Value>>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM messages
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.iter().map(row_to_json).collect())
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
