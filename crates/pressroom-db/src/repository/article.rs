//! SurrealDB implementation of [`ArticleRepository`].
//!
//! The owning identity is written once at creation. The update path
//! has no author binding at all, so ownership cannot drift no matter
//! what an update payload carries.

use chrono::{DateTime, Utc};
use pressroom_core::error::PressroomResult;
use pressroom_core::models::article::{Article, CreateArticle, UpdateArticle};
use pressroom_core::repository::{ArticleRepository, PaginatedResult, Pagination};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct ArticleRow {
    title: String,
    content: String,
    author_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ArticleRow {
    fn into_article(self, id: Uuid) -> Result<Article, DbError> {
        let author_id = Uuid::parse_str(&self.author_id)
            .map_err(|e| DbError::Decode(format!("invalid author UUID: {e}")))?;
        Ok(Article {
            id,
            title: self.title,
            content: self.content,
            author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}

#[derive(Debug, SurrealValue)]
struct ArticleRowWithId {
    record_id: String,
    title: String,
    content: String,
    author_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ArticleRowWithId {
    fn try_into_article(self) -> Result<Article, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        let author_id = Uuid::parse_str(&self.author_id)
            .map_err(|e| DbError::Decode(format!("invalid author UUID: {e}")))?;
        Ok(Article {
            id,
            title: self.title,
            content: self.content,
            author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}

#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// SurrealDB implementation of the Article repository.
#[derive(Clone)]
pub struct SurrealArticleRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealArticleRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ArticleRepository for SurrealArticleRepository<C> {
    async fn create(&self, author_id: Uuid, input: CreateArticle) -> PressroomResult<Article> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('article', $id) SET \
                 title = $title, content = $content, \
                 author_id = $author_id, \
                 deleted_at = NONE",
            )
            .bind(("id", id_str.clone()))
            .bind(("title", input.title))
            .bind(("content", input.content))
            .bind(("author_id", author_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<ArticleRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "article".into(),
            id: id_str,
        })?;

        Ok(row.into_article(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> PressroomResult<Article> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('article', $id) \
                 WHERE deleted_at IS NONE",
            )
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ArticleRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "article".into(),
            id: id_str,
        })?;

        Ok(row.into_article(id)?)
    }

    async fn update(&self, id: Uuid, input: UpdateArticle) -> PressroomResult<Article> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.title.is_some() {
            sets.push("title = $title");
        }
        if input.content.is_some() {
            sets.push("content = $content");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('article', $id) SET {} \
             WHERE deleted_at IS NONE",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(title) = input.title {
            builder = builder.bind(("title", title));
        }
        if let Some(content) = input.content {
            builder = builder.bind(("content", content));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<ArticleRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "article".into(),
            id: id_str,
        })?;

        Ok(row.into_article(id)?)
    }

    async fn delete(&self, id: Uuid) -> PressroomResult<()> {
        // Soft-delete: tombstone, keep the row.
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "UPDATE type::record('article', $id) SET \
                 deleted_at = time::now(), updated_at = time::now() \
                 WHERE deleted_at IS NONE",
            )
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ArticleRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "article".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> PressroomResult<PaginatedResult<Article>> {
        let mut count_result = self
            .db
            .query(
                "SELECT count() AS total FROM article \
                 WHERE deleted_at IS NONE GROUP ALL",
            )
            .await
            .map_err(DbError::from)?;
        let count_rows: Vec<CountRow> = count_result.take(0).map_err(DbError::from)?;
        let total = count_rows.first().map(|r| r.total).unwrap_or(0);

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM article \
                 WHERE deleted_at IS NONE \
                 ORDER BY created_at ASC \
                 LIMIT $limit START $offset",
            )
            .bind(("limit", pagination.limit))
            .bind(("offset", pagination.offset))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ArticleRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(|row| row.try_into_article())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }
}
