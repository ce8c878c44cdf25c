//! Integration tests for the authentication service.

use pressroom_auth::config::AuthConfig;
use pressroom_auth::service::{AuthService, LoginInput, RegisterInput};
use pressroom_core::access;
use pressroom_core::error::PressroomError;
use pressroom_core::repository::UserRepository;
use pressroom_db::repository::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".into(),
        jwt_issuer: "pressroom-test".into(),
        access_token_lifetime_secs: 900,
    }
}

/// Spin up an in-memory DB with the schema and the seeded permission
/// catalog applied.
async fn setup() -> (
    SurrealUserRepository<surrealdb::engine::local::Db>,
    Surreal<surrealdb::engine::local::Db>, // raw db handle
) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    pressroom_db::run_migrations(&db).await.unwrap();
    pressroom_db::seed_permissions(&db).await.unwrap();

    (SurrealUserRepository::new(db.clone()), db)
}

fn register_alice() -> RegisterInput {
    RegisterInput {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        password: "correct-horse-battery".into(),
    }
}

#[tokio::test]
async fn register_grants_reader_only() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let profile = svc.register(register_alice()).await.unwrap();

    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.permissions, vec![access::READER.to_string()]);
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    svc.register(register_alice()).await.unwrap();
    let err = svc.register(register_alice()).await.unwrap_err();

    assert!(
        matches!(err, PressroomError::Conflict { .. }),
        "expected Conflict, got: {err:?}"
    );

    // The first registration is intact and can still log in.
    svc.login(LoginInput {
        email: "alice@example.com".into(),
        password: "correct-horse-battery".into(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn login_happy_path() {
    let (user_repo, _db) = setup().await;
    let config = test_config();
    let svc = AuthService::new(user_repo, config.clone());

    svc.register(register_alice()).await.unwrap();

    let out = svc
        .login(LoginInput {
            email: "alice@example.com".into(),
            password: "correct-horse-battery".into(),
        })
        .await
        .unwrap();

    assert!(!out.access_token.is_empty());
    assert_eq!(out.expires_in, 900);
    assert_eq!(out.user.email, "alice@example.com");

    // Verify JWT decodes correctly.
    let claims =
        pressroom_auth::token::decode_access_token(&out.access_token, &config).unwrap();
    assert_eq!(claims.sub, out.user.id.to_string());
    assert_eq!(claims.iss, "pressroom-test");
}

#[tokio::test]
async fn login_wrong_password() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    svc.register(register_alice()).await.unwrap();

    let err = svc
        .login(LoginInput {
            email: "alice@example.com".into(),
            password: "wrong-password".into(),
        })
        .await
        .unwrap_err();

    assert!(
        matches!(err, PressroomError::Unauthenticated { .. }),
        "expected Unauthenticated, got: {err:?}"
    );
}

#[tokio::test]
async fn login_unknown_email_is_indistinguishable() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let err = svc
        .login(LoginInput {
            email: "nobody@example.com".into(),
            password: "irrelevant".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PressroomError::Unauthenticated { .. }));
}

#[tokio::test]
async fn authenticate_resolves_live_identity() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    svc.register(register_alice()).await.unwrap();
    let out = svc
        .login(LoginInput {
            email: "alice@example.com".into(),
            password: "correct-horse-battery".into(),
        })
        .await
        .unwrap();

    let header = format!("Bearer {}", out.access_token);
    let user = svc.authenticate(Some(&header)).await.unwrap();

    assert_eq!(user.id, out.user.id);
    assert_eq!(user.permissions, vec![access::READER.to_string()]);
}

#[tokio::test]
async fn authenticate_missing_header_fails() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let err = svc.authenticate(None).await.unwrap_err();
    assert!(matches!(err, PressroomError::Unauthenticated { .. }));
}

#[tokio::test]
async fn authenticate_malformed_header_fails() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let err = svc.authenticate(Some("Basic abc123")).await.unwrap_err();
    assert!(matches!(err, PressroomError::Unauthenticated { .. }));
}

#[tokio::test]
async fn authenticate_tampered_token_fails() {
    let (user_repo, _db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    svc.register(register_alice()).await.unwrap();
    let out = svc
        .login(LoginInput {
            email: "alice@example.com".into(),
            password: "correct-horse-battery".into(),
        })
        .await
        .unwrap();

    let header = format!("Bearer {}x", out.access_token);
    let err = svc.authenticate(Some(&header)).await.unwrap_err();

    assert!(matches!(err, PressroomError::Unauthenticated { .. }));
}

#[tokio::test]
async fn authenticate_deleted_subject_fails() {
    let (user_repo, db) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    svc.register(register_alice()).await.unwrap();
    let out = svc
        .login(LoginInput {
            email: "alice@example.com".into(),
            password: "correct-horse-battery".into(),
        })
        .await
        .unwrap();

    // Tombstone the subject behind the token's back.
    let delete_repo = SurrealUserRepository::new(db);
    delete_repo.delete(out.user.id).await.unwrap();

    // Structurally valid token, dead identity: must fail as an
    // authentication problem, not a permission one.
    let header = format!("Bearer {}", out.access_token);
    let err = svc.authenticate(Some(&header)).await.unwrap_err();

    assert!(
        matches!(err, PressroomError::Unauthenticated { .. }),
        "expected Unauthenticated, got: {err:?}"
    );
}
