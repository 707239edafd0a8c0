//! Append-only interaction tracking and the analytics aggregates built
//! on top of it.
//!
//! Tracking rows are never updated or deleted by the application; a bulk
//! retention policy, if ever needed, lives outside this service.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use sqlx::PgPool;

use bahia_types::analytics::{DailyViewCount, RestaurantAnalytics};
use bahia_types::{AnalyticsPeriod, EntityType, InteractionType};

use crate::error::DbError;

/// Fields for one tracking event.
#[derive(Debug, Clone)]
pub struct NewTrackingEvent {
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
    /// Requesting user agent.
    pub user_agent: Option<String>,
    /// Requesting client IP.
    pub ip_address: Option<String>,
}

impl NewTrackingEvent {
    /// Create an event with only the required discriminators set.
    pub const fn new(entity_type: EntityType, entity_id: i32, event_type: InteractionType) -> Self {
        Self {
            entity_type,
            entity_id,
            event_type,
            user_id: None,
            session_id: None,
            user_agent: None,
            ip_address: None,
        }
    }
}

/// Fields for one geo impression ("near me" marketing record).
#[derive(Debug, Clone)]
pub struct NewGeoImpression {
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
    pub was_clicked: bool,
}

/// Operations on the `tracking_events` and `geo_impressions` tables.
pub struct TrackingStore<'a> {
    pool: &'a PgPool,
}

impl<'a> TrackingStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append one tracking event.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn record(&self, event: &NewTrackingEvent) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO tracking_events (entity_type, entity_id, event_type, user_id, \
             session_id, user_agent, ip_address) \
             VALUES ($1::entity_type, $2, $3::event_type, $4, $5, $6, $7)",
        )
        .bind(event.entity_type.as_str())
        .bind(event.entity_id)
        .bind(event.event_type.as_str())
        .bind(event.user_id)
        .bind(&event.session_id)
        .bind(&event.user_agent)
        .bind(&event.ip_address)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Aggregate a restaurant's tracking log over the period window.
    ///
    /// Three independent aggregates over the same window (`now - period`):
    /// total `view` count, per-interaction-type counts, and a
    /// day-bucketed `view` series ascending by date. Days with zero views
    /// are absent from the series; the dashboard gap-fills for its chart.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if any of the aggregate queries fail.
    pub async fn restaurant_analytics(
        &self,
        restaurant_id: i32,
        period: AnalyticsPeriod,
    ) -> Result<RestaurantAnalytics, DbError> {
        let since = Utc::now() - Duration::days(period.days());

        let (total_views,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM tracking_events \
             WHERE entity_type = 'restaurant' AND entity_id = $1 \
               AND event_type = 'view' AND created_at >= $2",
        )
        .bind(restaurant_id)
        .bind(since)
        .fetch_one(self.pool)
        .await?;

        let click_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT event_type::TEXT, COUNT(*) FROM tracking_events \
             WHERE entity_type = 'restaurant' AND entity_id = $1 AND created_at >= $2 \
             GROUP BY event_type",
        )
        .bind(restaurant_id)
        .bind(since)
        .fetch_all(self.pool)
        .await?;
        let clicks: BTreeMap<String, i64> = click_rows.into_iter().collect();

        let daily_rows: Vec<(chrono::NaiveDate, i64)> = sqlx::query_as(
            "SELECT created_at::DATE AS day, COUNT(*) FROM tracking_events \
             WHERE entity_type = 'restaurant' AND entity_id = $1 \
               AND event_type = 'view' AND created_at >= $2 \
             GROUP BY day ORDER BY day",
        )
        .bind(restaurant_id)
        .bind(since)
        .fetch_all(self.pool)
        .await?;
        let daily_views = daily_rows
            .into_iter()
            .map(|(date, count)| DailyViewCount { date, count })
            .collect();

        Ok(RestaurantAnalytics {
            total_views,
            clicks,
            daily_views,
        })
    }

    /// Append one geo impression.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn record_geo_impression(&self, imp: &NewGeoImpression) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO geo_impressions (restaurant_id, user_id, session_id, user_latitude, \
             user_longitude, distance_meters, was_clicked) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(imp.restaurant_id)
        .bind(imp.user_id)
        .bind(&imp.session_id)
        .bind(&imp.user_latitude)
        .bind(&imp.user_longitude)
        .bind(imp.distance_meters)
        .bind(imp.was_clicked)
        .execute(self.pool)
        .await?;
        Ok(())
    }
}
