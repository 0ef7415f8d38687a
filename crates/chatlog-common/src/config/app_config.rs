//! Application configuration structs
//!
//! Loads configuration from environment variables, honoring a `.env` file.
//! Nothing here is required: every knob has a default so the service can
//! start against a local Postgres with no environment at all.

use std::env;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port
    pub port: u16,
    /// Database connection settings
    pub database: DatabaseSettings,
    /// Adaptive archive table settings
    pub archive: ArchiveSettings,
    /// Directory served for the landing page and its assets
    pub static_dir: String,
}

/// Database connection settings.
///
/// When `url` is set it wins over the discrete parts; parts left unset fall
/// back to the driver's libpq-style defaults (localhost:5432, current user).
#[derive(Debug, Clone, Default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Require TLS for the connection
    pub ssl: bool,
    /// Verify the server certificate when TLS is on
    pub ssl_reject_unauthorized: bool,
    /// Pool size ceiling
    pub max_connections: u32,
}

/// Settings for the schema-adaptive archive path.
///
/// `schema` and `table` are carried raw here; identifier sanitization and
/// default substitution happen where the table reference is resolved.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSettings {
    pub schema: Option<String>,
    pub table: Option<String>,
    /// Enables the destructive variant of the archive delete endpoint
    pub allow_destructive_ops: bool,
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_static_dir() -> String {
    "public".to_string()
}

/// `Some("true")` and nothing else enables a flag
fn truthy(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

/// Only an explicit `"false"` disables a default-on flag
fn not_falsy(value: Option<String>) -> bool {
    value.as_deref() != Some("false")
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_port),
            database: DatabaseSettings {
                url: env::var("DB_PUBLIC_URL").ok(),
                host: env::var("DB_HOST").ok(),
                port: env::var("DB_PORT").ok().and_then(|s| s.parse().ok()),
                name: env::var("DB_NAME").ok(),
                user: env::var("DB_USER").ok(),
                password: env::var("DB_PASSWORD").ok(),
                ssl: truthy(env::var("DB_SSL").ok()),
                ssl_reject_unauthorized: not_falsy(env::var("DB_SSL_REJECT_UNAUTHORIZED").ok()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
            },
            archive: ArchiveSettings {
                schema: env::var("DB_SCHEMA").ok(),
                table: env::var("MESSAGES_TABLE").ok(),
                allow_destructive_ops: truthy(env::var("ALLOW_DESTRUCTIVE_OPS").ok()),
            },
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            database: DatabaseSettings {
                ssl_reject_unauthorized: true,
                max_connections: default_max_connections(),
                ..DatabaseSettings::default()
            },
            archive: ArchiveSettings::default(),
            static_dir: default_static_dir(),
        }
    }
}
