//! Error types for server startup.

/// Errors that can occur while bringing the guide server up.
///
/// Database and serve failures are propagated as their own error types
/// through `anyhow` in `main`; only configuration has a dedicated
/// variant here.
#[derive(Debug, thiserror::Error)]
pub enum ServerSetupError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),
}
