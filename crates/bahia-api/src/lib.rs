//! HTTP API server for the Bahia city guide.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Directory endpoints** for restaurants (with conjunctive filters
//!   and a great-circle "near me" search), events, curated experiences,
//!   amenities, notifications and cross-directory search
//! - **Business dashboard endpoints** for analytics, interaction
//!   tracking, promotions, menus and geo impressions
//! - **Subscription endpoints** for the plan catalog and plan purchases
//! - **Minimal HTML landing page** (`GET /`) listing the API surface
//!
//! # Architecture
//!
//! Handlers are thin: each constructs the relevant store from
//! `bahia-db` against the shared pool, runs one operation, and shapes
//! the JSON response. All validation that does not need the database
//! happens before the store call.

pub mod business;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod subscriptions;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
