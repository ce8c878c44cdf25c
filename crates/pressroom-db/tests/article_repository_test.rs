//! Integration tests for the Article repository using in-memory
//! SurrealDB.

use pressroom_core::error::PressroomError;
use pressroom_core::models::article::{CreateArticle, UpdateArticle};
use pressroom_core::repository::{ArticleRepository, Pagination};
use pressroom_db::repository::SurrealArticleRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn setup() -> SurrealArticleRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    pressroom_db::run_migrations(&db).await.unwrap();

    SurrealArticleRepository::new(db)
}

fn draft() -> CreateArticle {
    CreateArticle {
        title: "First Post".into(),
        content: "Hello, world.".into(),
    }
}

#[tokio::test]
async fn create_and_get_article() {
    let repo = setup().await;
    let author = Uuid::new_v4();

    let article = repo.create(author, draft()).await.unwrap();
    assert_eq!(article.title, "First Post");
    assert_eq!(article.author_id, author);
    assert!(article.deleted_at.is_none());

    let fetched = repo.get_by_id(article.id).await.unwrap();
    assert_eq!(fetched.id, article.id);
    assert_eq!(fetched.author_id, author);
}

#[tokio::test]
async fn update_preserves_author() {
    let repo = setup().await;
    let author = Uuid::new_v4();

    let article = repo.create(author, draft()).await.unwrap();

    let updated = repo
        .update(
            article.id,
            UpdateArticle {
                title: Some("Revised".into()),
                content: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Revised");
    assert_eq!(updated.content, "Hello, world.");
    // The owner binding survives every update.
    assert_eq!(updated.author_id, author);
}

#[tokio::test]
async fn soft_delete_hides_article() {
    let repo = setup().await;
    let author = Uuid::new_v4();

    let article = repo.create(author, draft()).await.unwrap();
    repo.delete(article.id).await.unwrap();

    let err = repo.get_by_id(article.id).await.unwrap_err();
    assert!(matches!(err, PressroomError::NotFound { .. }));

    let err = repo
        .update(
            article.id,
            UpdateArticle {
                title: Some("Too late".into()),
                content: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PressroomError::NotFound { .. }));

    // Double delete behaves like an absent record.
    let err = repo.delete(article.id).await.unwrap_err();
    assert!(matches!(err, PressroomError::NotFound { .. }));
}

#[tokio::test]
async fn get_missing_article_not_found() {
    let repo = setup().await;

    let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, PressroomError::NotFound { .. }));
}

#[tokio::test]
async fn list_excludes_tombstones() {
    let repo = setup().await;
    let author = Uuid::new_v4();

    let kept = repo.create(author, draft()).await.unwrap();
    let dropped = repo
        .create(
            author,
            CreateArticle {
                title: "Second Post".into(),
                content: "Short-lived.".into(),
            },
        )
        .await
        .unwrap();
    repo.delete(dropped.id).await.unwrap();

    let page = repo.list(Pagination::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, kept.id);
}

#[tokio::test]
async fn list_paginates() {
    let repo = setup().await;
    let author = Uuid::new_v4();

    for i in 0..4 {
        repo.create(
            author,
            CreateArticle {
                title: format!("Post {i}"),
                content: "…".into(),
            },
        )
        .await
        .unwrap();
    }

    let page = repo
        .list(Pagination {
            offset: 0,
            limit: 3,
        })
        .await
        .unwrap();
    assert_eq!(page.total, 4);
    assert_eq!(page.items.len(), 3);

    let rest = repo
        .list(Pagination {
            offset: 3,
            limit: 3,
        })
        .await
        .unwrap();
    assert_eq!(rest.items.len(), 1);
}
