//! Pressroom Server — application entry point.

mod config;

use clap::Parser;
use pressroom_auth::password;
use pressroom_core::PressroomResult;
use pressroom_db::{DbManager, run_migrations, seed_permissions, seed_root_user};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> PressroomResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pressroom=info".parse().unwrap()),
        )
        .json()
        .init();

    let config = ServerConfig::parse();

    tracing::info!("Starting Pressroom server...");

    let auth_config = config.auth_config();
    if auth_config.uses_insecure_secret() {
        tracing::warn!(
            "Running with the default token secret; set PRESSROOM_JWT_SECRET before deploying"
        );
    }

    let manager = DbManager::connect(&config.db_config()).await?;
    run_migrations(manager.client()).await?;
    seed_permissions(manager.client()).await?;

    let root_hash = password::hash_password(&config.root_password)?;
    seed_root_user(manager.client(), &config.root_email, root_hash).await?;

    // TODO: Start REST API server on config.port

    tracing::info!("Pressroom server stopped.");
    Ok(())
}
