//! Axum extractors for request handling

mod pagination;

pub use pagination::{Page, PageParams};
