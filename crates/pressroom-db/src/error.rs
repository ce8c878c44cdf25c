//! Database-specific error types and conversions.

use pressroom_core::error::PressroomError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Row conversion failed: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Uniqueness violation: {entity}")]
    Conflict { entity: String },

    /// A permission name outside the seeded catalog.
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),
}

impl From<DbError> for PressroomError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => PressroomError::NotFound { entity, id },
            DbError::Conflict { entity } => PressroomError::Conflict { entity },
            DbError::UnknownPermission(name) => PressroomError::Validation {
                message: format!("unknown permission: {name}"),
            },
            other => PressroomError::Database(other.to_string()),
        }
    }
}
