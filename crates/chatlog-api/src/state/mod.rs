//! Application state
//!
//! Holds the repositories and configuration shared across all handlers.
//! Everything is constructed once at startup and injected through Axum's
//! state mechanism; nothing reaches for globals.

use std::sync::Arc;

use chatlog_common::AppConfig;
use chatlog_db::{
    ArchiveRepository, MessageRepository, PgPool, SchemaResolver, TableConfig, UserRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    messages: MessageRepository,
    users: UserRepository,
    archive: ArchiveRepository,
    resolver: SchemaResolver,
    table: TableConfig,
    pool: PgPool,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, table: TableConfig, database: String, config: AppConfig) -> Self {
        let archive = ArchiveRepository::new(
            pool.clone(),
            table.clone(),
            database,
            config.archive.allow_destructive_ops,
        );

        Self {
            messages: MessageRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            archive,
            resolver: SchemaResolver::new(pool.clone()),
            table,
            pool,
            config: Arc::new(config),
        }
    }

    pub fn messages(&self) -> &MessageRepository {
        &self.messages
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn archive(&self) -> &ArchiveRepository {
        &self.archive
    }

    pub fn resolver(&self) -> &SchemaResolver {
        &self.resolver
    }

    /// The configured archive table, already sanitized.
    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
