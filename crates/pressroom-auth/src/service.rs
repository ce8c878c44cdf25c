//! Authentication service — registration, login, and per-request
//! bearer authentication.

use pressroom_core::access;
use pressroom_core::error::{PressroomError, PressroomResult};
use pressroom_core::models::user::{CreateUser, User, UserProfile};
use pressroom_core::repository::UserRepository;
use tracing::info;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Input for public self-registration.
#[derive(Debug)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed JWT access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    /// The authenticated identity, digest stripped.
    pub user: UserProfile,
}

/// Authentication service.
///
/// Generic over the user repository so that the auth layer has no
/// dependency on the database crate.
pub struct AuthService<U: UserRepository> {
    user_repo: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repo: U, config: AuthConfig) -> Self {
        Self { user_repo, config }
    }

    /// Public self-registration. New accounts start with the `reader`
    /// permission only; anything broader is granted by an admin.
    ///
    /// Fails with `Conflict` if the email handle is already taken.
    pub async fn register(&self, input: RegisterInput) -> PressroomResult<UserProfile> {
        let password_hash = password::hash_password(&input.password)?;

        let user = self
            .user_repo
            .create(CreateUser {
                name: input.name,
                email: input.email,
                password_hash,
                permissions: vec![access::READER.to_string()],
            })
            .await?;

        info!(user = %user.id, "User registered");
        Ok(user.into())
    }

    /// Authenticate with email + password and issue an access token.
    ///
    /// A missing user and a wrong password are indistinguishable to
    /// the caller.
    pub async fn login(&self, input: LoginInput) -> PressroomResult<LoginOutput> {
        let user = self
            .user_repo
            .get_by_email(&input.email)
            .await
            .map_err(|e| match e {
                PressroomError::NotFound { .. } => AuthError::InvalidCredentials.into(),
                other => other,
            })?;

        let valid = password::verify_password(&input.password, &user.password_hash)?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = token::issue_access_token(user.id, &self.config)?;
        info!(user = %user.id, "Login succeeded");

        Ok(LoginOutput {
            access_token,
            expires_in: self.config.access_token_lifetime_secs,
            user: user.into(),
        })
    }

    /// Resolve an `Authorization` header to a live identity.
    ///
    /// Verifies signature and expiry, then re-checks that the subject
    /// still exists — a structurally valid token whose identity was
    /// deleted after issuance must fail here, not later as a
    /// permission problem. Single-shot, no caching: callers
    /// authenticate on every request.
    pub async fn authenticate(&self, authorization: Option<&str>) -> PressroomResult<User> {
        let raw = token::bearer_token(authorization)?;
        let claims = token::decode_access_token(raw, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|e| AuthError::TokenInvalid(format!("bad subject claim: {e}")))?;

        let user = self
            .user_repo
            .get_by_id(user_id)
            .await
            .map_err(|e| match e {
                PressroomError::NotFound { .. } => AuthError::UnknownSubject.into(),
                other => other,
            })?;

        Ok(user)
    }
}
