//! Article domain model — the owned resource type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Owning identity, bound exactly once at creation. There is no
    /// update path for this field anywhere in the system.
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
}

/// Content fields only. An owner-like field in an incoming payload is
/// dropped at deserialization — it simply does not exist here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
}
