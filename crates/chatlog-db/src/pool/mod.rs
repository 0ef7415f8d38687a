//! Database connection pool management

mod postgres;

pub use postgres::{connect_options, create_pool, database_name, probe};
