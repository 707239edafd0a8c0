//! Business subscription plans and per-restaurant subscriptions.
//!
//! Creating a subscription snapshots the plan's monthly price into the
//! subscription row and promotes the restaurant's `subscription_level`
//! in the same transaction, so a later plan price change never rewrites
//! what an existing subscriber agreed to pay.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use bahia_types::PlanType;

use crate::error::DbError;

/// Length of one billing term.
const TERM_DAYS: i64 = 30;

/// Column list shared by every plan query.
const PLAN_COLUMNS: &str = "id, plan_type::TEXT AS plan_type, name_en, name_es, \
     description_en, description_es, price_monthly, features_en, features_es, \
     is_active, display_order, created_at";

/// Column list shared by every subscription query.
const SUBSCRIPTION_COLUMNS: &str = "id, restaurant_id, plan_type::TEXT AS plan_type, \
     price_monthly, start_date, end_date, is_active, auto_renew, \
     stripe_subscription_id, created_at";

/// A row from the `subscription_plans` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct PlanRow {
    /// Surrogate primary key.
    pub id: i32,
    /// Plan type label (`basic`, `pro`, `partner`).
    pub plan_type: String,
    /// English plan name.
    pub name_en: String,
    /// Spanish plan name.
    pub name_es: String,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Monthly price in cents.
    pub price_monthly: i32,
    /// JSON array of English feature strings.
    pub features_en: Option<String>,
    /// JSON array of Spanish feature strings.
    pub features_es: Option<String>,
    /// Whether the plan can currently be purchased.
    pub is_active: bool,
    /// Position in the pricing page, ascending.
    pub display_order: i32,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A row from the `subscriptions` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct SubscriptionRow {
    /// Surrogate primary key.
    pub id: i32,
    /// Subscribed restaurant. One subscription per restaurant.
    pub restaurant_id: i32,
    /// Plan type label at purchase time.
    pub plan_type: String,
    /// Monthly price snapshot in cents, taken from the plan at purchase
    /// time.
    pub price_monthly: i32,
    /// When the subscription began.
    pub start_date: chrono::DateTime<chrono::Utc>,
    /// When the current term ends. Stored for display and billing;
    /// nothing sweeps expired rows.
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Whether the subscription is live.
    pub is_active: bool,
    /// Whether the term renews automatically.
    pub auto_renew: bool,
    /// External billing reference. Stored, never acted on here.
    pub stripe_subscription_id: Option<String>,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields for creating a subscription.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    /// Restaurant taking out the subscription.
    pub restaurant_id: i32,
    /// Plan being purchased.
    pub plan_type: PlanType,
    /// External billing reference, when the payment flow supplies one.
    pub stripe_subscription_id: Option<String>,
}

/// Operations on the `subscription_plans` and `subscriptions` tables.
pub struct SubscriptionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> SubscriptionStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Purchasable plans in pricing-page order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn plans(&self) -> Result<Vec<PlanRow>, DbError> {
        let rows = sqlx::query_as::<_, PlanRow>(&format!(
            "SELECT {PLAN_COLUMNS} FROM subscription_plans WHERE is_active = TRUE \
             ORDER BY display_order ASC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// A restaurant's subscription, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Option<SubscriptionRow>, DbError> {
        let row = sqlx::query_as::<_, SubscriptionRow>(&format!(
            "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE restaurant_id = $1"
        ))
        .bind(restaurant_id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Create a subscription and promote the restaurant's listing level,
    /// atomically.
    ///
    /// The plan's current monthly price is snapshotted into the
    /// subscription row and the term runs 30 days from now. Both the
    /// subscription insert and the restaurant update commit together or
    /// not at all.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::PlanNotFound`] if no active plan matches the
    /// requested type, or [`DbError::Postgres`] on any other failure.
    pub async fn create(&self, new: &NewSubscription) -> Result<SubscriptionRow, DbError> {
        let mut tx = self.pool.begin().await?;

        let plan: Option<(i32,)> = sqlx::query_as(
            "SELECT price_monthly FROM subscription_plans \
             WHERE plan_type = $1::plan_type AND is_active = TRUE",
        )
        .bind(new.plan_type.as_str())
        .fetch_optional(&mut *tx)
        .await?;
        let Some((price_monthly,)) = plan else {
            return Err(DbError::PlanNotFound(new.plan_type.as_str().to_owned()));
        };

        let start_date = Utc::now();
        let end_date = start_date + Duration::days(TERM_DAYS);

        let row = sqlx::query_as::<_, SubscriptionRow>(&format!(
            "INSERT INTO subscriptions (restaurant_id, plan_type, price_monthly, start_date, \
             end_date, stripe_subscription_id) \
             VALUES ($1, $2::plan_type, $3, $4, $5, $6) \
             RETURNING {SUBSCRIPTION_COLUMNS}"
        ))
        .bind(new.restaurant_id)
        .bind(new.plan_type.as_str())
        .bind(price_monthly)
        .bind(start_date)
        .bind(end_date)
        .bind(&new.stripe_subscription_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE restaurants SET subscription_level = $1::subscription_level, \
             subscription_start_date = $2, subscription_end_date = $3, updated_at = NOW() \
             WHERE id = $4",
        )
        .bind(new.plan_type.as_subscription_level().as_str())
        .bind(start_date)
        .bind(end_date)
        .bind(new.restaurant_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            id = row.id,
            restaurant_id = new.restaurant_id,
            plan = new.plan_type.as_str(),
            "Subscription created"
        );
        Ok(row)
    }
}
