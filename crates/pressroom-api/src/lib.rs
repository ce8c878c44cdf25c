//! Pressroom API — the guarded service layer.
//!
//! Each service method takes the authenticated [`User`] as an
//! explicit first argument (produced by `pressroom-auth`'s
//! `authenticate`), looks up the action's declared policy, runs the
//! access decision engine, and only then touches the store. No
//! per-request state lives anywhere else.
//!
//! [`User`]: pressroom_core::models::user::User

mod articles;
mod guard;
mod permissions;
mod users;

pub use articles::ArticleService;
pub use permissions::PermissionService;
pub use users::{CreateUserInput, UpdateUserInput, UserService};
