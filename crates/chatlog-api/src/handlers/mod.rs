//! Route handlers
//!
//! All HTTP request handlers, one module per surface.

pub mod health;
pub mod messages;
pub mod schema;
pub mod users;
pub mod workadventure;
