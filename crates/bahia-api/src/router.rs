//! Axum router construction for the guide API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin frontend access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{business, handlers, subscriptions};

/// Build the complete Axum router for the guide server.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted to the frontend's origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Directory
        .route("/api/restaurants", get(handlers::list_restaurants))
        .route("/api/restaurants/nearby", get(handlers::nearby_restaurants))
        .route("/api/restaurants/{id}", get(handlers::get_restaurant))
        .route("/api/events", get(handlers::list_events))
        .route("/api/events/{id}", get(handlers::get_event))
        .route("/api/experiences", get(handlers::list_experiences))
        .route("/api/experiences/{slug}", get(handlers::get_experience))
        .route("/api/amenities", get(handlers::list_amenities))
        .route(
            "/api/notifications/recent",
            get(handlers::recent_notifications),
        )
        .route(
            "/api/notifications/subscribe",
            post(handlers::subscribe_notifications),
        )
        .route("/api/search", get(handlers::global_search))
        // Business dashboard
        .route(
            "/api/business/analytics",
            get(business::restaurant_analytics),
        )
        .route("/api/business/track", post(business::track))
        .route(
            "/api/business/promotions",
            get(business::list_promotions).post(business::create_promotion),
        )
        .route(
            "/api/business/menus",
            get(business::list_menus).post(business::upload_menu),
        )
        .route("/api/business/menus/{id}", delete(business::delete_menu))
        .route(
            "/api/business/geo-impressions",
            post(business::record_geo_impression),
        )
        // Subscriptions
        .route("/api/subscriptions/plans", get(subscriptions::list_plans))
        .route(
            "/api/subscriptions/{restaurant_id}",
            get(subscriptions::get_subscription),
        )
        .route("/api/subscriptions", post(subscriptions::create_subscription))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
