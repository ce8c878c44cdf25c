//! Pressroom Auth — password hashing/verification, JWT access token
//! issuance and validation, and bearer-header authentication.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, LoginInput, LoginOutput, RegisterInput};
pub use token::AccessTokenClaims;
