//! Authentication configuration.

/// Placeholder signing secret used when none is supplied.
///
/// INSECURE — anyone can forge tokens against it. The server logs a
/// warning whenever this value is in effect; a deployed instance must
/// always override it.
pub const INSECURE_DEFAULT_SECRET: &str = "default-secret-key";

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 signing secret for access tokens.
    pub jwt_secret: String,
    /// JWT issuer (`iss` claim).
    pub jwt_issuer: String,
    /// Access token lifetime in seconds (default: 3600 = 1 hour).
    pub access_token_lifetime_secs: u64,
}

impl AuthConfig {
    /// Whether the process is running on the documented insecure
    /// default secret.
    pub fn uses_insecure_secret(&self) -> bool {
        self.jwt_secret == INSECURE_DEFAULT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: INSECURE_DEFAULT_SECRET.into(),
            jwt_issuer: "pressroom".into(),
            access_token_lifetime_secs: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_secret_is_flagged() {
        assert!(AuthConfig::default().uses_insecure_secret());

        let config = AuthConfig {
            jwt_secret: "a-real-deployment-secret".into(),
            ..Default::default()
        };
        assert!(!config.uses_insecure_secret());
    }
}
