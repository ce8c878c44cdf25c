//! Server configuration from CLI flags and environment variables.

use clap::Parser;
use pressroom_auth::config::{AuthConfig, INSECURE_DEFAULT_SECRET};
use pressroom_db::DbConfig;

/// Pressroom — permissioned content-management backend.
#[derive(Parser, Debug)]
#[command(name = "pressroom", version, about)]
pub struct ServerConfig {
    /// Listening port for the HTTP surface.
    #[arg(long, default_value_t = 3000, env = "PRESSROOM_PORT")]
    pub port: u16,

    /// SurrealDB WebSocket URL.
    #[arg(long, default_value = "127.0.0.1:8000", env = "PRESSROOM_DB_URL")]
    pub db_url: String,

    /// SurrealDB namespace.
    #[arg(long, default_value = "pressroom", env = "PRESSROOM_DB_NAMESPACE")]
    pub db_namespace: String,

    /// SurrealDB database name.
    #[arg(long, default_value = "main", env = "PRESSROOM_DB_NAME")]
    pub db_name: String,

    /// SurrealDB root username.
    #[arg(long, default_value = "root", env = "PRESSROOM_DB_USER")]
    pub db_user: String,

    /// SurrealDB root password.
    #[arg(long, default_value = "root", env = "PRESSROOM_DB_PASS")]
    pub db_pass: String,

    /// Access token signing secret. The default is insecure and the
    /// server warns loudly whenever it is in effect.
    #[arg(long, default_value = INSECURE_DEFAULT_SECRET, env = "PRESSROOM_JWT_SECRET")]
    pub jwt_secret: String,

    /// Seeded root administrator email.
    #[arg(long, default_value = "root@example.com", env = "PRESSROOM_ROOT_EMAIL")]
    pub root_email: String,

    /// Seeded root administrator password.
    #[arg(long, default_value = "root123456", env = "PRESSROOM_ROOT_PASSWORD")]
    pub root_password: String,
}

impl ServerConfig {
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            ..AuthConfig::default()
        }
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.db_url.clone(),
            namespace: self.db_namespace.clone(),
            database: self.db_name.clone(),
            username: self.db_user.clone(),
            password: self.db_pass.clone(),
        }
    }
}
