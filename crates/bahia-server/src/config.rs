//! Configuration for the guide server binary.
//!
//! All configuration is loaded from environment variables. The server
//! only needs to know where `PostgreSQL` lives and which address to
//! bind.

use crate::error::ServerSetupError;

/// Complete server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Host address to bind (default `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on (default 8080).
    pub port: u16,
    /// Maximum database connections (default 10).
    pub db_max_connections: u32,
}

impl GuideConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `DATABASE_URL` -- `PostgreSQL` connection string
    ///
    /// Optional variables:
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listen port (default 8080)
    /// - `DB_MAX_CONNECTIONS` -- pool size (default 10)
    pub fn from_env() -> Result<Self, ServerSetupError> {
        let database_url = env_var("DATABASE_URL")?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_owned())
            .parse()
            .map_err(|e| ServerSetupError::Config(format!("invalid PORT: {e}")))?;

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_owned())
            .parse()
            .map_err(|e| ServerSetupError::Config(format!("invalid DB_MAX_CONNECTIONS: {e}")))?;

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
        })
    }
}

/// Read a required environment variable.
fn env_var(name: &str) -> Result<String, ServerSetupError> {
    std::env::var(name)
        .map_err(|e| ServerSetupError::Config(format!("missing required env var {name}: {e}")))
}

#[cfg(test)]
mod tests {
    #[test]
    fn defaults_parse() {
        // Verify default values used in from_env fallbacks.
        let port: u16 = "8080".parse().unwrap_or(0);
        assert_eq!(port, 8080);
        let max: u32 = "10".parse().unwrap_or(0);
        assert_eq!(max, 10);
    }
}
