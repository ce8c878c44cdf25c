//! User administration service.
//!
//! All operations here are admin-gated; public self-registration
//! lives in `pressroom-auth`. Every return path carries a sanitized
//! [`UserProfile`] — the credential digest never leaves this module.

use pressroom_auth::password;
use pressroom_core::access::{self, Action};
use pressroom_core::error::{PressroomError, PressroomResult};
use pressroom_core::models::user::{CreateUser, UpdateUser, User, UserProfile};
use pressroom_core::repository::{PaginatedResult, Pagination, UserRepository};
use uuid::Uuid;

use crate::guard;

/// Admin-supplied user creation payload. Unlike self-registration,
/// the permission set is chosen explicitly.
#[derive(Debug)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// A `Some` set replaces the held permissions wholesale.
    pub permissions: Option<Vec<String>>,
}

/// Guarded user administration.
pub struct UserService<U: UserRepository> {
    users: U,
}

/// Reject permission names outside the seeded vocabulary before any
/// write happens.
fn validate_permission_names(names: &[String]) -> PressroomResult<()> {
    for name in names {
        if !access::is_known_permission(name) {
            return Err(PressroomError::Validation {
                message: format!("unknown permission: {name}"),
            });
        }
    }
    Ok(())
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    pub async fn create(&self, actor: &User, input: CreateUserInput) -> PressroomResult<UserProfile> {
        guard::require(actor, Action::CreateUser)?;
        validate_permission_names(&input.permissions)?;

        let password_hash = password::hash_password(&input.password)?;

        let user = self
            .users
            .create(CreateUser {
                name: input.name,
                email: input.email,
                password_hash,
                permissions: input.permissions,
            })
            .await?;

        Ok(user.into())
    }

    pub async fn list(
        &self,
        actor: &User,
        pagination: Pagination,
    ) -> PressroomResult<PaginatedResult<UserProfile>> {
        guard::require(actor, Action::ListUsers)?;

        let page = self.users.list(pagination).await?;
        Ok(PaginatedResult {
            items: page.items.into_iter().map(UserProfile::from).collect(),
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        })
    }

    pub async fn get(&self, actor: &User, id: Uuid) -> PressroomResult<UserProfile> {
        guard::require(actor, Action::GetUser)?;
        let user = self.users.get_by_id(id).await?;
        Ok(user.into())
    }

    pub async fn update(
        &self,
        actor: &User,
        id: Uuid,
        input: UpdateUserInput,
    ) -> PressroomResult<UserProfile> {
        guard::require(actor, Action::UpdateUser)?;

        if let Some(ref names) = input.permissions {
            validate_permission_names(names)?;
        }

        let password_hash = match input.password {
            Some(ref plaintext) => Some(password::hash_password(plaintext)?),
            None => None,
        };

        let user = self
            .users
            .update(
                id,
                UpdateUser {
                    name: input.name,
                    email: input.email,
                    password_hash,
                    permissions: input.permissions,
                },
            )
            .await?;

        Ok(user.into())
    }

    pub async fn delete(&self, actor: &User, id: Uuid) -> PressroomResult<()> {
        guard::require(actor, Action::DeleteUser)?;
        self.users.delete(id).await
    }
}
