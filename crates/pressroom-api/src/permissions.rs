//! Permission catalog service.
//!
//! Catalog reads carry no permission requirement — any authenticated
//! identity may inspect the vocabulary. Names are immutable once
//! seeded; the only write is the admin-gated description edit.

use pressroom_core::access::Action;
use pressroom_core::error::PressroomResult;
use pressroom_core::models::permission::{Permission, UpdatePermission};
use pressroom_core::models::user::User;
use pressroom_core::repository::PermissionRepository;

use crate::guard;

pub struct PermissionService<P: PermissionRepository> {
    permissions: P,
}

impl<P: PermissionRepository> PermissionService<P> {
    pub fn new(permissions: P) -> Self {
        Self { permissions }
    }

    pub async fn list(&self, actor: &User) -> PressroomResult<Vec<Permission>> {
        guard::require(actor, Action::ListPermissions)?;
        self.permissions.list().await
    }

    pub async fn get_by_name(&self, actor: &User, name: &str) -> PressroomResult<Permission> {
        guard::require(actor, Action::ListPermissions)?;
        self.permissions.get_by_name(name).await
    }

    /// Reword a seeded permission's description. The name itself
    /// never changes.
    pub async fn update_description(
        &self,
        actor: &User,
        name: &str,
        description: String,
    ) -> PressroomResult<Permission> {
        guard::require(actor, Action::UpdatePermission)?;

        let permission = self.permissions.get_by_name(name).await?;
        self.permissions
            .update(
                permission.id,
                UpdatePermission {
                    description: Some(description),
                },
            )
            .await
    }
}
