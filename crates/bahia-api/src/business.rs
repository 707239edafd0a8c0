//! Business dashboard endpoint handlers.
//!
//! Analytics reads, interaction tracking, promotion and menu management,
//! and geo impression reporting for subscribed restaurants.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/business/analytics?restaurant_id=N` | Windowed analytics |
//! | `POST` | `/api/business/track` | Record one interaction |
//! | `GET` | `/api/business/promotions?restaurant_id=N` | List promotions |
//! | `POST` | `/api/business/promotions` | Create a promotion |
//! | `GET` | `/api/business/menus?restaurant_id=N` | List menus |
//! | `POST` | `/api/business/menus` | Upload a menu |
//! | `DELETE` | `/api/business/menus/:id` | Delete a menu |
//! | `POST` | `/api/business/geo-impressions` | Record a geo impression |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use axum::response::IntoResponse;

use bahia_db::{
    MenuStore, NewGeoImpression, NewMenu, NewPromotion, NewTrackingEvent, PromotionStore,
    RestaurantStore, TrackingStore,
};
use bahia_types::{AnalyticsPeriod, EntityType, FileType, InteractionType};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/business/analytics`.
#[derive(Debug, serde::Deserialize)]
pub struct AnalyticsQuery {
    /// The restaurant whose dashboard is being viewed.
    pub restaurant_id: i32,
    /// Aggregation window; defaults to 30 days.
    #[serde(default)]
    pub period: AnalyticsPeriod,
}

/// Query parameters for the promotion and menu list endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct RestaurantScopeQuery {
    /// The restaurant whose records are listed.
    pub restaurant_id: i32,
}

/// Request body for `POST /api/business/track`.
#[derive(Debug, serde::Deserialize)]
pub struct TrackRequest {
    /// Which kind of entity was interacted with.
    pub entity_type: EntityType,
    /// The entity's id.
    pub entity_id: i32,
    /// The interaction kind.
    pub event_type: InteractionType,
    /// Signed-in user, when known.
    pub user_id: Option<i32>,
    /// Anonymous session identifier, when known.
    pub session_id: Option<String>,
}

/// Request body for `POST /api/business/promotions`.
#[derive(Debug, serde::Deserialize)]
pub struct CreatePromotionRequest {
    /// Owning restaurant.
    pub restaurant_id: i32,
    /// English title.
    pub title_en: String,
    /// Spanish title.
    pub title_es: String,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Promotion artwork URL.
    pub image_url: Option<String>,
    /// Promotion start.
    pub start_date: chrono::DateTime<chrono::Utc>,
    /// Promotion end.
    pub end_date: chrono::DateTime<chrono::Utc>,
}

/// Request body for `POST /api/business/menus`.
#[derive(Debug, serde::Deserialize)]
pub struct UploadMenuRequest {
    /// Owning restaurant.
    pub restaurant_id: i32,
    /// Menu title.
    pub title: String,
    /// URL of the already-stored file.
    pub file_url: String,
    /// File type.
    pub file_type: FileType,
}

/// Request body for `POST /api/business/geo-impressions`.
#[derive(Debug, serde::Deserialize)]
pub struct GeoImpressionRequest {
    /// The restaurant shown to the user.
    pub restaurant_id: i32,
    /// Signed-in user, when known.
    pub user_id: Option<i32>,
    /// Anonymous session identifier, when known.
    pub session_id: Option<String>,
    /// The user's latitude as a decimal string.
    pub user_latitude: String,
    /// The user's longitude as a decimal string.
    pub user_longitude: String,
    /// Distance between user and restaurant, in meters.
    pub distance_meters: i32,
    /// Whether the user tapped through to the listing.
    #[serde(default)]
    pub was_clicked: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Windowed analytics for a restaurant's dashboard.
pub async fn restaurant_analytics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // 404 for a restaurant that does not exist beats silently returning
    // all-zero analytics for it.
    RestaurantStore::new(state.db.pool())
        .get_plain(params.restaurant_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("restaurant {}", params.restaurant_id)))?;

    let analytics = TrackingStore::new(state.db.pool())
        .restaurant_analytics(params.restaurant_id, params.period)
        .await?;
    Ok(Json(analytics))
}

/// Record one interaction, capturing the requesting user agent and
/// forwarded client IP.
pub async fn track(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<TrackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    // Behind the reverse proxy the client address is the first entry of
    // X-Forwarded-For.
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_owned());

    TrackingStore::new(state.db.pool())
        .record(&NewTrackingEvent {
            entity_type: req.entity_type,
            entity_id: req.entity_id,
            event_type: req.event_type,
            user_id: req.user_id,
            session_id: req.session_id,
            user_agent,
            ip_address,
        })
        .await?;
    Ok(Json(serde_json::json!({ "recorded": true })))
}

/// List a restaurant's promotions, newest first.
pub async fn list_promotions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RestaurantScopeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = PromotionStore::new(state.db.pool())
        .list_for_restaurant(params.restaurant_id)
        .await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "promotions": rows,
    })))
}

/// Create a promotion for a restaurant.
pub async fn create_promotion(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePromotionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.end_date <= req.start_date {
        return Err(ApiError::Validation(
            "end_date must be after start_date".into(),
        ));
    }

    let id = PromotionStore::new(state.db.pool())
        .create(&NewPromotion {
            restaurant_id: req.restaurant_id,
            title_en: req.title_en,
            title_es: req.title_es,
            description_en: req.description_en,
            description_es: req.description_es,
            image_url: req.image_url,
            start_date: req.start_date,
            end_date: req.end_date,
        })
        .await?;
    Ok(Json(serde_json::json!({ "id": id })))
}

/// List a restaurant's menus, most recently uploaded first.
pub async fn list_menus(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RestaurantScopeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = MenuStore::new(state.db.pool())
        .list_for_restaurant(params.restaurant_id)
        .await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "menus": rows,
    })))
}

/// Record an uploaded menu.
pub async fn upload_menu(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UploadMenuRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".into()));
    }

    let id = MenuStore::new(state.db.pool())
        .upload(&NewMenu {
            restaurant_id: req.restaurant_id,
            title: req.title,
            file_url: req.file_url,
            file_type: req.file_type,
        })
        .await?;
    Ok(Json(serde_json::json!({ "id": id })))
}

/// Delete a menu.
pub async fn delete_menu(
    State(state): State<Arc<AppState>>,
    Path(menu_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = MenuStore::new(state.db.pool()).delete(menu_id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("menu {menu_id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Record a geo impression for a "near me" result.
pub async fn record_geo_impression(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GeoImpressionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.distance_meters < 0 {
        return Err(ApiError::Validation(
            "distance_meters must be non-negative".into(),
        ));
    }

    TrackingStore::new(state.db.pool())
        .record_geo_impression(&NewGeoImpression {
            restaurant_id: req.restaurant_id,
            user_id: req.user_id,
            session_id: req.session_id,
            user_latitude: req.user_latitude,
            user_longitude: req.user_longitude,
            distance_meters: req.distance_meters,
            was_clicked: req.was_clicked,
        })
        .await?;
    Ok(Json(serde_json::json!({ "recorded": true })))
}
