//! Server entry point for the Bahia city guide.
//!
//! Initializes logging, loads configuration from environment variables,
//! connects to `PostgreSQL`, runs pending migrations, and serves the
//! guide API until the process is terminated.

mod config;
mod error;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bahia_api::{AppState, ServerConfig, start_server};
use bahia_db::{PostgresConfig, PostgresPool};

use crate::config::GuideConfig;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, database setup, or the HTTP
/// server fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("bahia-server starting");

    // Load configuration from environment
    let config = GuideConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        db_max_connections = config.db_max_connections,
        "configuration loaded"
    );

    // Connect to PostgreSQL and bring the schema up to date
    let pg_config = PostgresConfig::new(&config.database_url)
        .with_max_connections(config.db_max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    let state = Arc::new(AppState::new(pool));
    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };

    info!("guide server initialized, serving");
    start_server(&server_config, state).await?;

    Ok(())
}
