//! Thin wrappers over the decision engine that add audit logging.
//!
//! The engine distinguishes "holds nothing" from "holds the wrong
//! things" from "not the owner"; that distinction lands in the log
//! here, while callers see a uniform `Forbidden`.

use pressroom_core::access::{self, Action};
use pressroom_core::error::PressroomResult;
use pressroom_core::models::user::User;
use tracing::warn;
use uuid::Uuid;

/// Role check for `action` against the actor's current permission
/// set.
pub(crate) fn require(actor: &User, action: Action) -> PressroomResult<()> {
    let policy = action.policy();
    access::authorize(&actor.permissions, policy.required).map_err(|denied| {
        warn!(actor = %actor.id, ?action, ?denied, "access denied");
        denied.into()
    })
}

/// Role check plus the owner-or-admin override for a mutating action
/// on an owned resource.
pub(crate) fn require_owned(actor: &User, action: Action, owner_id: Uuid) -> PressroomResult<()> {
    let policy = action.policy();
    access::authorize_owned(actor.id, &actor.permissions, policy.required, owner_id).map_err(
        |denied| {
            warn!(actor = %actor.id, ?action, %owner_id, ?denied, "access denied");
            denied.into()
        },
    )
}
