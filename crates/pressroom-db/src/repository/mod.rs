//! SurrealDB repository implementations.

mod article;
mod permission;
mod user;

pub use article::SurrealArticleRepository;
pub use permission::SurrealPermissionRepository;
pub use user::SurrealUserRepository;
