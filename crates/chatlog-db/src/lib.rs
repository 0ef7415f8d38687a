//! # chatlog-db
//!
//! Database layer for the chat log viewer: connection pool construction,
//! live schema discovery, dynamic row decoding, and the repositories the
//! HTTP handlers are built on.
//!
//! ## Overview
//!
//! Two access styles coexist here. [`MessageRepository`] and
//! [`UserRepository`] serve the viewer's own API and assume the standard
//! `messages` and `users` tables. [`ArchiveRepository`] serves the legacy
//! export and assumes nothing: it discovers the configured table's columns
//! on every call and normalizes whatever it finds into the canonical
//! envelope.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chatlog_common::AppConfig;
//! use chatlog_db::{create_pool, MessageRepository};
//!
//! let config = AppConfig::from_env();
//! let pool = create_pool(&config.database)?;
//! let messages = MessageRepository::new(pool.clone());
//! let page = messages.list(100, 0).await?;
//! ```

pub mod canonical;
pub mod error;
pub mod pool;
pub mod repositories;
pub mod rows;
pub mod schema;

pub use canonical::{canonicalize, CanonicalMessage};
pub use error::{StoreError, StoreResult};
pub use pool::{create_pool, database_name, probe};
pub use repositories::{ArchiveRepository, MessageRepository, UserPatch, UserRepository};
pub use schema::{ColumnDescriptor, SchemaResolver, TableConfig};

pub use sqlx::PgPool;
