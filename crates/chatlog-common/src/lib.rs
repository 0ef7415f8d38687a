//! # chatlog-common
//!
//! Shared utilities: configuration loading and telemetry setup.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppConfig, ArchiveSettings, DatabaseSettings};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
