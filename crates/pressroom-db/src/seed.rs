//! Idempotent seed routines for the permission catalog and the root
//! administrator account. Safe to run on every boot.

use pressroom_core::access;
use pressroom_core::error::{PressroomError, PressroomResult};
use pressroom_core::models::permission::CreatePermission;
use pressroom_core::models::user::CreateUser;
use pressroom_core::repository::{PermissionRepository, UserRepository};
use surrealdb::{Connection, Surreal};
use tracing::info;

use crate::repository::{SurrealPermissionRepository, SurrealUserRepository};

/// The seeded permission vocabulary with its descriptions.
pub const DEFAULT_PERMISSIONS: &[(&str, &str)] = &[
    (access::ADMIN, "Full access to manage users and articles"),
    (access::EDITOR, "Access to manage articles"),
    (access::READER, "Read-only access to articles"),
];

/// Seed the permission catalog. Already-seeded names are skipped, so
/// repeated runs never create duplicates.
pub async fn seed_permissions<C: Connection>(db: &Surreal<C>) -> PressroomResult<()> {
    let repo = SurrealPermissionRepository::new(db.clone());

    for (name, description) in DEFAULT_PERMISSIONS {
        match repo.get_by_name(name).await {
            Ok(_) => {}
            Err(PressroomError::NotFound { .. }) => {
                repo.create(CreatePermission {
                    name: name.to_string(),
                    description: description.to_string(),
                })
                .await?;
                info!(permission = name, "Seeded permission");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Create the root administrator if it does not exist yet.
///
/// `password_hash` must be a ready Argon2id digest — plaintext never
/// reaches the database crate.
pub async fn seed_root_user<C: Connection>(
    db: &Surreal<C>,
    email: &str,
    password_hash: String,
) -> PressroomResult<()> {
    let repo = SurrealUserRepository::new(db.clone());

    match repo.get_by_email(email).await {
        Ok(_) => {
            info!(%email, "Root user already exists");
            Ok(())
        }
        Err(PressroomError::NotFound { .. }) => {
            repo.create(CreateUser {
                name: "Root Admin".into(),
                email: email.to_string(),
                password_hash,
                permissions: vec![access::ADMIN.to_string()],
            })
            .await?;
            info!(%email, "Root user created");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
