//! Article service — permission-checked CRUD with the ownership
//! override on mutations.

use pressroom_core::access::Action;
use pressroom_core::error::PressroomResult;
use pressroom_core::models::article::{Article, CreateArticle, UpdateArticle};
use pressroom_core::models::user::User;
use pressroom_core::repository::{ArticleRepository, PaginatedResult, Pagination};
use uuid::Uuid;

use crate::guard;

/// Guarded article operations.
///
/// Generic over the repository so the service layer has no dependency
/// on the database crate.
pub struct ArticleService<A: ArticleRepository> {
    articles: A,
}

impl<A: ArticleRepository> ArticleService<A> {
    pub fn new(articles: A) -> Self {
        Self { articles }
    }

    pub async fn list(
        &self,
        actor: &User,
        pagination: Pagination,
    ) -> PressroomResult<PaginatedResult<Article>> {
        guard::require(actor, Action::ListArticles)?;
        self.articles.list(pagination).await
    }

    pub async fn get(&self, actor: &User, id: Uuid) -> PressroomResult<Article> {
        guard::require(actor, Action::GetArticle)?;
        self.articles.get_by_id(id).await
    }

    /// Create an article owned by the actor. The owner binding
    /// happens here, once, and is never revisited.
    pub async fn create(&self, actor: &User, input: CreateArticle) -> PressroomResult<Article> {
        guard::require(actor, Action::CreateArticle)?;
        self.articles.create(actor.id, input).await
    }

    /// Update an article: role gate first (no fetch needed), then
    /// owner-or-admin against the stored owner.
    pub async fn update(
        &self,
        actor: &User,
        id: Uuid,
        input: UpdateArticle,
    ) -> PressroomResult<Article> {
        guard::require(actor, Action::UpdateArticle)?;

        let article = self.articles.get_by_id(id).await?;
        guard::require_owned(actor, Action::UpdateArticle, article.author_id)?;

        self.articles.update(id, input).await
    }

    /// Delete (tombstone) an article, owner-or-admin only.
    pub async fn delete(&self, actor: &User, id: Uuid) -> PressroomResult<()> {
        guard::require(actor, Action::DeleteArticle)?;

        let article = self.articles.get_by_id(id).await?;
        guard::require_owned(actor, Action::DeleteArticle, article.author_id)?;

        self.articles.delete(id).await
    }
}
