//! Pressroom Database — SurrealDB connection management, schema
//! migrations, repository implementations, and seed routines.

mod connection;
mod error;
mod schema;
mod seed;

pub mod repository;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
pub use seed::{DEFAULT_PERMISSIONS, seed_permissions, seed_root_user};
