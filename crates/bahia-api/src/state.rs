//! Shared application state for the guide API server.

use bahia_db::PostgresPool;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Store structs are constructed per request against the
/// pooled connection, so the pool is the only thing worth sharing.
#[derive(Clone)]
pub struct AppState {
    /// The `PostgreSQL` connection pool.
    pub db: PostgresPool,
}

impl AppState {
    /// Create application state around a connected pool.
    pub const fn new(db: PostgresPool) -> Self {
        Self { db }
    }
}
