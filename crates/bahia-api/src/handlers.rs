//! Public directory endpoint handlers.
//!
//! Everything under this module is anonymous-read territory: listings,
//! detail pages, curated routes, notifications and search. Business
//! dashboard and subscription endpoints live in their own modules.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/restaurants` | Filtered restaurant directory |
//! | `GET` | `/api/restaurants/nearby` | Restaurants within a radius |
//! | `GET` | `/api/restaurants/:id` | Restaurant detail (counts a view) |
//! | `GET` | `/api/events` | Filtered event directory |
//! | `GET` | `/api/events/:id` | Event detail |
//! | `GET` | `/api/experiences` | List curated experiences |
//! | `GET` | `/api/experiences/:slug` | Experience with resolved stops |
//! | `GET` | `/api/amenities` | Amenity directory |
//! | `GET` | `/api/notifications/recent` | Latest city notifications |
//! | `POST` | `/api/notifications/subscribe` | Create a subscription |
//! | `GET` | `/api/search` | Cross-directory search |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use validator::Validate;

use bahia_db::geo::Coordinates;
use bahia_db::{
    AmenityStore, EventStore, ExperienceStore, NewNotificationSubscription, NotificationStore,
    RestaurantStore, SearchStore,
};
use bahia_types::filters::{AmenityFilter, EventFilter, RestaurantFilter};
use bahia_types::{NotificationType, TargetNeighborhood};

use crate::error::ApiError;
use crate::state::AppState;

/// Default search radius for the nearby endpoint, in kilometers.
const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

/// Default number of notifications returned by the recent endpoint.
const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Hard cap on the recent-notifications limit.
const MAX_RECENT_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/restaurants/nearby`.
#[derive(Debug, serde::Deserialize)]
pub struct NearbyQuery {
    /// Reference latitude in decimal degrees.
    pub latitude: f64,
    /// Reference longitude in decimal degrees.
    pub longitude: f64,
    /// Search radius in kilometers (default 5).
    pub radius_km: Option<f64>,
}

/// Query parameters for `GET /api/notifications/recent`.
#[derive(Debug, serde::Deserialize)]
pub struct RecentQuery {
    /// Maximum number of notifications (default 10, max 100).
    pub limit: Option<i64>,
}

/// Query parameters for `GET /api/search`.
#[derive(Debug, serde::Deserialize)]
pub struct SearchQuery {
    /// Free-text search term.
    pub query: String,
}

/// Request body for `POST /api/notifications/subscribe`.
#[derive(Debug, serde::Deserialize, Validate)]
pub struct SubscribeRequest {
    /// Subscribing user account, when signed in.
    pub user_id: Option<i32>,
    /// Contact email, for anonymous subscriptions.
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    /// Neighborhood scope; omitted means city-wide.
    pub neighborhood: Option<TargetNeighborhood>,
    /// Notification types to receive.
    #[serde(default)]
    pub notification_types: Vec<NotificationType>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page listing the API surface.
///
/// This is the placeholder landing page until the bilingual frontend is
/// deployed.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Bahia Guide API</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        a { color: #58a6ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        li::before { content: "GET "; color: #7ee787; font-weight: bold; }
        li.post::before { content: "POST "; color: #d2a8ff; }
        .status { color: #3fb950; font-weight: bold; }
        hr { border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }
    </style>
</head>
<body>
    <h1>Bahia Guide API</h1>
    <p class="subtitle">Bilingual city directory backend</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <hr>

    <h2>Directory</h2>
    <ul>
        <li><a href="/api/restaurants">/api/restaurants</a> -- Filtered restaurant directory</li>
        <li><a href="/api/restaurants/nearby?latitude=32.64&amp;longitude=-117.08">/api/restaurants/nearby</a> -- Restaurants near a point</li>
        <li>/api/restaurants/:id -- Restaurant detail</li>
        <li><a href="/api/events">/api/events</a> -- Event directory</li>
        <li><a href="/api/experiences">/api/experiences</a> -- Curated experiences</li>
        <li>/api/experiences/:slug -- Experience with stops</li>
        <li><a href="/api/amenities">/api/amenities</a> -- Trails, parks and amenities</li>
        <li><a href="/api/notifications/recent">/api/notifications/recent</a> -- City notifications</li>
        <li class="post">/api/notifications/subscribe -- Subscribe to notifications</li>
        <li>/api/search?query=... -- Cross-directory search</li>
    </ul>

    <h2>Business</h2>
    <ul>
        <li>/api/business/analytics?restaurant_id=... -- Analytics dashboard data</li>
        <li class="post">/api/business/track -- Record an interaction</li>
        <li>/api/business/promotions?restaurant_id=... -- List promotions</li>
        <li>/api/business/menus?restaurant_id=... -- List menus</li>
        <li><a href="/api/subscriptions/plans">/api/subscriptions/plans</a> -- Plan catalog</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// Restaurants
// ---------------------------------------------------------------------------

/// List restaurants matching the conjunctive filter, most viewed first.
pub async fn list_restaurants(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<RestaurantFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = RestaurantStore::new(state.db.pool()).list(&filter).await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "restaurants": rows,
    })))
}

/// List restaurants within a radius of a reference point.
pub async fn nearby_restaurants(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if !params.latitude.is_finite() || !params.longitude.is_finite() {
        return Err(ApiError::Validation(
            "latitude and longitude must be finite".into(),
        ));
    }
    let radius_km = params.radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
    if !(radius_km.is_finite() && radius_km > 0.0) {
        return Err(ApiError::Validation("radius_km must be positive".into()));
    }

    let reference = Coordinates {
        latitude: params.latitude,
        longitude: params.longitude,
    };
    let rows = RestaurantStore::new(state.db.pool())
        .nearby(reference, radius_km)
        .await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "radius_km": radius_km,
        "restaurants": rows,
    })))
}

/// Restaurant detail. Each call counts one detail view.
pub async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let row = RestaurantStore::new(state.db.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("restaurant {id}")))?;
    Ok(Json(row))
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// List events matching the conjunctive filter, soonest first.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<EventFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = EventStore::new(state.db.pool()).list(&filter).await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "events": rows,
    })))
}

/// Event detail.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let row = EventStore::new(state.db.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("event {id}")))?;
    Ok(Json(row))
}

// ---------------------------------------------------------------------------
// Experiences
// ---------------------------------------------------------------------------

/// List all curated experiences.
pub async fn list_experiences(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = ExperienceStore::new(state.db.pool()).list().await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "experiences": rows,
    })))
}

/// Experience detail by slug, with stops resolved in route order.
pub async fn get_experience(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let assembled = ExperienceStore::new(state.db.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("experience {slug}")))?;
    Ok(Json(assembled))
}

// ---------------------------------------------------------------------------
// Amenities
// ---------------------------------------------------------------------------

/// List amenities, optionally restricted to one category.
pub async fn list_amenities(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<AmenityFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = AmenityStore::new(state.db.pool())
        .list(filter.category)
        .await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "amenities": rows,
    })))
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// The most recently sent city notifications.
pub async fn recent_notifications(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);
    let rows = NotificationStore::new(state.db.pool()).recent(limit).await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "notifications": rows,
    })))
}

/// Subscribe to city notifications.
///
/// Either a user id or an email must be supplied; anonymous
/// subscriptions are keyed by email.
pub async fn subscribe_notifications(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubscribeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    if req.user_id.is_none() && req.email.is_none() {
        return Err(ApiError::Validation(
            "either user_id or email is required".into(),
        ));
    }

    let id = NotificationStore::new(state.db.pool())
        .subscribe(&NewNotificationSubscription {
            user_id: req.user_id,
            email: req.email,
            neighborhood: req.neighborhood,
            notification_types: req.notification_types,
        })
        .await?;
    Ok(Json(serde_json::json!({ "id": id })))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Cross-directory search over restaurants, events and experiences.
pub async fn global_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(ApiError::Validation("query must not be empty".into()));
    }
    let results = SearchStore::new(state.db.pool()).global(query).await?;
    Ok(Json(results))
}
