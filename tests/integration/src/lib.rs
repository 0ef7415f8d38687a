//! Integration test utilities for the chat log viewer
//!
//! This crate provides helpers for running end-to-end tests against the
//! HTTP API with a real PostgreSQL instance behind it.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
