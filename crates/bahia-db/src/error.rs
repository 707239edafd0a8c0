//! Error types for the data layer.
//!
//! Every store operation returns [`DbError`] instead of silently degrading
//! to an empty result: an unavailable database is an operational failure
//! the caller must see, not an empty directory page.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A subscription plan type has no row in the catalog. Raised before
    /// any write, so a failed subscription create leaves no partial state.
    #[error("Subscription plan not found: {0}")]
    PlanNotFound(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
