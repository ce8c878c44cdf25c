//! SurrealDB implementation of [`UserRepository`].
//!
//! Users carry their permission set through `holds` graph edges to
//! the `permission` table. Permission-set writes are a full
//! overwrite: existing edges are dropped and the new set is related
//! in one pass. The email uniqueness check spans tombstoned rows, so
//! a soft-deleted account keeps its handle reserved.

use chrono::{DateTime, Utc};
use pressroom_core::error::PressroomResult;
use pressroom_core::models::user::{CreateUser, UpdateUser, User};
use pressroom_core::repository::{PaginatedResult, Pagination, UserRepository};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for CREATE/UPDATE outputs, where the UUID is
/// already known and no edges are loaded.
#[derive(Debug, SurrealValue)]
struct UserRow {
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Row struct for SELECTs: record ID via `meta::id(id)` plus the
/// permission names pulled through the `holds` edge.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    name: String,
    email: String,
    password_hash: String,
    permissions: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        Ok(User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            permissions: self.permissions,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}

/// Resolved permission reference for edge writes.
#[derive(Debug, SurrealValue)]
struct PermissionRef {
    record_id: String,
    name: String,
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// Row struct for existence probes.
#[derive(Debug, SurrealValue)]
struct IdRow {
    #[allow(dead_code)]
    record_id: String,
}

/// SurrealDB implementation of the User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Fail with `Conflict` when the email is held by any record
    /// other than `exclude` — tombstones included.
    async fn check_email_free(&self, email: &str, exclude: Option<Uuid>) -> Result<(), DbError> {
        let query = match exclude {
            Some(_) => {
                "SELECT meta::id(id) AS record_id FROM user \
                 WHERE email = $email AND id != type::record('user', $exclude)"
            }
            None => "SELECT meta::id(id) AS record_id FROM user WHERE email = $email",
        };

        let mut builder = self.db.query(query).bind(("email", email.to_string()));
        if let Some(id) = exclude {
            builder = builder.bind(("exclude", id.to_string()));
        }

        let mut result = builder.await?;
        let rows: Vec<IdRow> = result.take(0)?;
        if rows.is_empty() {
            Ok(())
        } else {
            Err(DbError::Conflict {
                entity: "user".into(),
            })
        }
    }

    /// Resolve permission names to record IDs, erroring on any name
    /// missing from the seeded catalog.
    async fn resolve_permissions(&self, names: &[String]) -> Result<Vec<PermissionRef>, DbError> {
        let mut unique: Vec<String> = names.to_vec();
        unique.sort();
        unique.dedup();

        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, name FROM permission \
                 WHERE name IN $names",
            )
            .bind(("names", unique.clone()))
            .await?;
        let refs: Vec<PermissionRef> = result.take(0)?;

        for name in &unique {
            if !refs.iter().any(|r| &r.name == name) {
                return Err(DbError::UnknownPermission(name.clone()));
            }
        }

        Ok(refs)
    }

    /// Replace the user's `holds` edges with the given permission
    /// references.
    async fn set_permission_edges(
        &self,
        user_id: &str,
        refs: &[PermissionRef],
    ) -> Result<(), DbError> {
        let mut query = format!("DELETE holds WHERE in = user:`{user_id}`;");
        for perm in refs {
            let perm_id = &perm.record_id;
            query.push_str(&format!(
                " RELATE user:`{user_id}` -> holds -> permission:`{perm_id}`;"
            ));
        }

        self.db.query(query).await?;
        Ok(())
    }

    /// Fetch a live user with its permission set assembled.
    async fn fetch_live(&self, id: Uuid) -> Result<User, DbError> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, *, \
                 ->holds->permission.name AS permissions \
                 FROM type::record('user', $id) \
                 WHERE deleted_at IS NONE",
            )
            .bind(("id", id_str.clone()))
            .await?;

        let rows: Vec<UserRowWithId> = result.take(0)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str,
        })?;

        row.try_into_user()
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn create(&self, input: CreateUser) -> PressroomResult<User> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        self.check_email_free(&input.email, None).await?;
        let refs = self.resolve_permissions(&input.permissions).await?;

        let result = self
            .db
            .query(
                "CREATE type::record('user', $id) SET \
                 name = $name, email = $email, \
                 password_hash = $password_hash, \
                 deleted_at = NONE",
            )
            .bind(("id", id_str.clone()))
            .bind(("name", input.name))
            .bind(("email", input.email))
            .bind(("password_hash", input.password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str.clone(),
        })?;

        self.set_permission_edges(&id_str, &refs).await?;

        Ok(User {
            id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            permissions: refs.into_iter().map(|r| r.name).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> PressroomResult<User> {
        Ok(self.fetch_live(id).await?)
    }

    async fn get_by_email(&self, email: &str) -> PressroomResult<User> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, *, \
                 ->holds->permission.name AS permissions \
                 FROM user \
                 WHERE email = $email AND deleted_at IS NONE",
            )
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: format!("email={email}"),
        })?;

        Ok(row.try_into_user()?)
    }

    async fn update(&self, id: Uuid, input: UpdateUser) -> PressroomResult<User> {
        let id_str = id.to_string();

        if let Some(ref email) = input.email {
            self.check_email_free(email, Some(id)).await?;
        }

        // Resolve before any write so an unknown permission name
        // leaves the record untouched.
        let refs = match input.permissions {
            Some(ref names) => Some(self.resolve_permissions(names).await?),
            None => None,
        };

        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.email.is_some() {
            sets.push("email = $email");
        }
        if input.password_hash.is_some() {
            sets.push("password_hash = $password_hash");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('user', $id) SET {} \
             WHERE deleted_at IS NONE",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(name) = input.name {
            builder = builder.bind(("name", name));
        }
        if let Some(email) = input.email {
            builder = builder.bind(("email", email));
        }
        if let Some(password_hash) = input.password_hash {
            builder = builder.bind(("password_hash", password_hash));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "user".into(),
                id: id_str,
            }
            .into());
        }

        if let Some(refs) = refs {
            self.set_permission_edges(&id_str, &refs).await?;
        }

        Ok(self.fetch_live(id).await?)
    }

    async fn delete(&self, id: Uuid) -> PressroomResult<()> {
        // Soft-delete: tombstone, keep the row.
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "UPDATE type::record('user', $id) SET \
                 deleted_at = time::now(), updated_at = time::now() \
                 WHERE deleted_at IS NONE",
            )
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "user".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> PressroomResult<PaginatedResult<User>> {
        let mut count_result = self
            .db
            .query(
                "SELECT count() AS total FROM user \
                 WHERE deleted_at IS NONE GROUP ALL",
            )
            .await
            .map_err(DbError::from)?;
        let count_rows: Vec<CountRow> = count_result.take(0).map_err(DbError::from)?;
        let total = count_rows.first().map(|r| r.total).unwrap_or(0);

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, *, \
                 ->holds->permission.name AS permissions \
                 FROM user \
                 WHERE deleted_at IS NONE \
                 ORDER BY created_at ASC \
                 LIMIT $limit START $offset",
            )
            .bind(("limit", pagination.limit))
            .bind(("offset", pagination.offset))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(|row| row.try_into_user())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }
}
