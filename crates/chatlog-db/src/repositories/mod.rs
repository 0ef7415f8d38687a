//! Repository implementations
//!
//! Each repository is built once at startup around the shared pool and
//! handed to the HTTP layer. They return plain JSON objects rather than
//! typed models because the tables they read are owned by another system
//! and their exact shape is a deployment detail.

pub mod archive;
pub mod error;
pub mod messages;
pub mod users;

pub use archive::ArchiveRepository;
pub use messages::MessageRepository;
pub use users::{UserPatch, UserRepository};
