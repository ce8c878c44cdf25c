//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Soft-deleted records are
//! invisible through these traits: a tombstoned row behaves exactly
//! like an absent one.

use uuid::Uuid;

use crate::error::PressroomResult;
use crate::models::{
    article::{Article, CreateArticle, UpdateArticle},
    permission::{CreatePermission, Permission, UpdatePermission},
    user::{CreateUser, UpdateUser, User},
};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

pub trait UserRepository: Send + Sync {
    /// Create a user and attach the given permission set. Fails with
    /// `Conflict` if the email handle is taken (tombstones included —
    /// handles are never recycled).
    fn create(&self, input: CreateUser) -> impl Future<Output = PressroomResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = PressroomResult<User>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = PressroomResult<User>> + Send;
    /// A `Some` permission set replaces the previous one wholesale.
    fn update(
        &self,
        id: Uuid,
        input: UpdateUser,
    ) -> impl Future<Output = PressroomResult<User>> + Send;
    /// Soft-delete: sets the tombstone timestamp, never removes rows.
    fn delete(&self, id: Uuid) -> impl Future<Output = PressroomResult<()>> + Send;
    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = PressroomResult<PaginatedResult<User>>> + Send;
}

pub trait PermissionRepository: Send + Sync {
    /// Fails with `Conflict` if the name is already seeded.
    fn create(
        &self,
        input: CreatePermission,
    ) -> impl Future<Output = PressroomResult<Permission>> + Send;
    fn get_by_name(&self, name: &str) -> impl Future<Output = PressroomResult<Permission>> + Send;
    /// Description edits only; the name is immutable once seeded.
    fn update(
        &self,
        id: Uuid,
        input: UpdatePermission,
    ) -> impl Future<Output = PressroomResult<Permission>> + Send;
    fn list(&self) -> impl Future<Output = PressroomResult<Vec<Permission>>> + Send;
}

pub trait ArticleRepository: Send + Sync {
    /// Create an article owned by `author_id`. Ownership is bound
    /// here, exactly once.
    fn create(
        &self,
        author_id: Uuid,
        input: CreateArticle,
    ) -> impl Future<Output = PressroomResult<Article>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = PressroomResult<Article>> + Send;
    /// Content fields only — `author_id` is untouchable here.
    fn update(
        &self,
        id: Uuid,
        input: UpdateArticle,
    ) -> impl Future<Output = PressroomResult<Article>> + Send;
    /// Soft-delete via tombstone timestamp.
    fn delete(&self, id: Uuid) -> impl Future<Output = PressroomResult<()>> + Send;
    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = PressroomResult<PaginatedResult<Article>>> + Send;
}
