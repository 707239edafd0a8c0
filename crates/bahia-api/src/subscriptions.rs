//! Subscription lifecycle endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/subscriptions/plans` | Purchasable plan catalog |
//! | `GET` | `/api/subscriptions/:restaurant_id` | A restaurant's subscription |
//! | `POST` | `/api/subscriptions` | Purchase a plan |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use bahia_db::{NewSubscription, SubscriptionStore};
use bahia_types::PlanType;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/subscriptions`.
#[derive(Debug, serde::Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Restaurant taking out the subscription.
    pub restaurant_id: i32,
    /// Plan being purchased.
    pub plan_type: PlanType,
    /// External billing reference, when the payment flow supplies one.
    pub stripe_subscription_id: Option<String>,
}

/// The purchasable plan catalog in pricing-page order.
pub async fn list_plans(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let rows = SubscriptionStore::new(state.db.pool()).plans().await?;
    Ok(Json(serde_json::json!({
        "count": rows.len(),
        "plans": rows,
    })))
}

/// A restaurant's subscription, if it has one.
pub async fn get_subscription(
    State(state): State<Arc<AppState>>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let row = SubscriptionStore::new(state.db.pool())
        .get_by_restaurant(restaurant_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("no subscription for restaurant {restaurant_id}"))
        })?;
    Ok(Json(row))
}

/// Purchase a plan for a restaurant.
///
/// Fails with 422 if the plan type does not match an active plan. The
/// subscription row and the restaurant's listing level are written in
/// one transaction.
pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let row = SubscriptionStore::new(state.db.pool())
        .create(&NewSubscription {
            restaurant_id: req.restaurant_id,
            plan_type: req.plan_type,
            stripe_subscription_id: req.stripe_subscription_id,
        })
        .await?;
    Ok(Json(row))
}
