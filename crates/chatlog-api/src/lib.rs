//! # chatlog-api
//!
//! HTTP server exposing the chat log over JSON, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::run;
