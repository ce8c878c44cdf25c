//! Integration tests for the Permission repository using in-memory
//! SurrealDB.

use pressroom_core::error::PressroomError;
use pressroom_core::models::permission::{CreatePermission, UpdatePermission};
use pressroom_core::repository::PermissionRepository;
use pressroom_db::repository::SurrealPermissionRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

async fn setup() -> SurrealPermissionRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    pressroom_db::run_migrations(&db).await.unwrap();

    SurrealPermissionRepository::new(db)
}

#[tokio::test]
async fn create_and_get_permission() {
    let repo = setup().await;

    let created = repo
        .create(CreatePermission {
            name: "editor".into(),
            description: "Access to manage articles".into(),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_name("editor").await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.description, "Access to manage articles");
}

#[tokio::test]
async fn duplicate_name_conflicts() {
    let repo = setup().await;

    repo.create(CreatePermission {
        name: "editor".into(),
        description: "first".into(),
    })
    .await
    .unwrap();

    let err = repo
        .create(CreatePermission {
            name: "editor".into(),
            description: "second".into(),
        })
        .await
        .unwrap_err();

    assert!(
        matches!(err, PressroomError::Conflict { .. }),
        "expected Conflict, got: {err:?}"
    );
}

#[tokio::test]
async fn get_missing_permission_not_found() {
    let repo = setup().await;

    let err = repo.get_by_name("ghost").await.unwrap_err();
    assert!(matches!(err, PressroomError::NotFound { .. }));
}

#[tokio::test]
async fn update_touches_description_only() {
    let repo = setup().await;

    let created = repo
        .create(CreatePermission {
            name: "reader".into(),
            description: "old".into(),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdatePermission {
                description: Some("new".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "reader");
    assert_eq!(updated.description, "new");
}

#[tokio::test]
async fn list_orders_by_name() {
    let repo = setup().await;

    for (name, description) in [("reader", "r"), ("admin", "a"), ("editor", "e")] {
        repo.create(CreatePermission {
            name: name.into(),
            description: description.into(),
        })
        .await
        .unwrap();
    }

    let catalog = repo.list().await.unwrap();
    let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["admin", "editor", "reader"]);
}
