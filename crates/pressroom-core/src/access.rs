//! Access decision engine.
//!
//! Every operation in the system is named by an [`Action`], and each
//! action declares its required permission set and whether the
//! owner-or-admin override applies — the declarative replacement for
//! per-route guard metadata. The decision functions are pure: they
//! read only the arguments handed to them, so permission changes
//! between requests are always observed.

use uuid::Uuid;

use crate::error::PressroomError;

/// Full administrative capability, including user management and the
/// ownership override on articles.
pub const ADMIN: &str = "admin";
/// Article management capability.
pub const EDITOR: &str = "editor";
/// Read-only article access.
pub const READER: &str = "reader";

/// The seeded permission vocabulary. Update paths validate incoming
/// permission names against this list; the decision functions below
/// treat names as opaque strings, so extending the vocabulary needs
/// no engine changes.
pub const KNOWN_PERMISSIONS: &[&str] = &[ADMIN, EDITOR, READER];

pub fn is_known_permission(name: &str) -> bool {
    KNOWN_PERMISSIONS.contains(&name)
}

/// Every authorization-relevant operation in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RegisterUser,
    ListUsers,
    GetUser,
    CreateUser,
    UpdateUser,
    DeleteUser,
    ListArticles,
    GetArticle,
    CreateArticle,
    UpdateArticle,
    DeleteArticle,
    ListPermissions,
    UpdatePermission,
}

/// Declared requirements for one action.
#[derive(Debug, Clone, Copy)]
pub struct ActionPolicy {
    /// Permission names, any one of which satisfies the role check.
    /// Empty means no permission requirement (public, or
    /// authenticated-only when an identity is in hand).
    pub required: &'static [&'static str],
    /// Whether a passing role check must additionally be owner or
    /// admin. Only mutating article actions set this.
    pub ownership_override: bool,
}

impl Action {
    /// The per-action requirement table.
    pub fn policy(self) -> ActionPolicy {
        match self {
            Action::RegisterUser => ActionPolicy {
                required: &[],
                ownership_override: false,
            },
            Action::ListUsers
            | Action::GetUser
            | Action::CreateUser
            | Action::UpdateUser
            | Action::DeleteUser
            | Action::UpdatePermission => ActionPolicy {
                required: &[ADMIN],
                ownership_override: false,
            },
            Action::ListArticles | Action::GetArticle => ActionPolicy {
                required: &[ADMIN, EDITOR, READER],
                ownership_override: false,
            },
            Action::CreateArticle => ActionPolicy {
                required: &[ADMIN, EDITOR],
                ownership_override: false,
            },
            Action::UpdateArticle | Action::DeleteArticle => ActionPolicy {
                required: &[ADMIN, EDITOR],
                ownership_override: true,
            },
            Action::ListPermissions => ActionPolicy {
                required: &[],
                ownership_override: false,
            },
        }
    }
}

/// A denied decision, with enough detail for audit logging. All
/// variants surface to the caller as [`PressroomError::Forbidden`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    /// The identity holds no permissions at all.
    NoPermissions,
    /// The identity holds permissions, none of them required here.
    Insufficient,
    /// Role check passed, but the identity is neither the resource
    /// owner nor an admin.
    NotOwner,
}

impl From<AccessDenied> for PressroomError {
    fn from(denied: AccessDenied) -> Self {
        let reason = match denied {
            AccessDenied::NoPermissions => "no permissions found",
            AccessDenied::Insufficient => "insufficient permissions",
            AccessDenied::NotOwner => "not the resource owner",
        };
        PressroomError::Forbidden {
            reason: reason.into(),
        }
    }
}

/// Role check: allow iff the held set intersects the required set.
///
/// An empty `required` set means the action carries no permission
/// requirement and is always allowed.
pub fn authorize(held: &[String], required: &[&str]) -> Result<(), AccessDenied> {
    if required.is_empty() {
        return Ok(());
    }
    if held.is_empty() {
        return Err(AccessDenied::NoPermissions);
    }
    if held.iter().any(|h| required.contains(&h.as_str())) {
        Ok(())
    } else {
        Err(AccessDenied::Insufficient)
    }
}

/// Role check plus the ownership override for mutating actions on an
/// owned resource.
///
/// The role check runs first (cheaper — no resource fetch needed to
/// evaluate it), then the actor must be the owner or hold `admin`.
/// Evaluation order affects only which denial is reported, never the
/// outcome.
pub fn authorize_owned(
    actor_id: Uuid,
    held: &[String],
    required: &[&str],
    owner_id: Uuid,
) -> Result<(), AccessDenied> {
    authorize(held, required)?;

    if actor_id == owner_id || held.iter().any(|h| h == ADMIN) {
        Ok(())
    } else {
        Err(AccessDenied::NotOwner)
    }
}
