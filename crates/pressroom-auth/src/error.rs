//! Authentication error types.

use pressroom_core::error::PressroomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    /// The token verified, but its subject identity no longer exists
    /// (deleted after issuance).
    #[error("token subject no longer exists")]
    UnknownSubject,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for PressroomError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken
            | AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_)
            | AuthError::UnknownSubject => PressroomError::Unauthenticated {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => PressroomError::Crypto(msg),
        }
    }
}
