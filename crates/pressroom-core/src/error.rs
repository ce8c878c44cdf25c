//! Error types for the Pressroom system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PressroomError {
    /// No token, an invalid/expired token, or a token whose subject
    /// identity no longer exists.
    #[error("Authentication failed: {reason}")]
    Unauthenticated { reason: String },

    /// Authenticated but lacking a required permission (and, where
    /// applicable, not the resource owner).
    #[error("Access denied: {reason}")]
    Forbidden { reason: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// Uniqueness violation, e.g. an email handle already in use.
    #[error("Entity already exists: {entity}")]
    Conflict { entity: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Storage-layer failure (connectivity, timeout, bad row). Must
    /// never be conflated with an authorization denial.
    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PressroomResult<T> = Result<T, PressroomError>;
