//! Configuration structs

mod app_config;

pub use app_config::{AppConfig, ArchiveSettings, DatabaseSettings};
