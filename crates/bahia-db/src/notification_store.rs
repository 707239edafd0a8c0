//! City notifications and resident subscriptions.

use sqlx::PgPool;

use bahia_types::{NotificationType, TargetNeighborhood};

use crate::error::DbError;

/// Column list shared by every notification query.
const NOTIFICATION_COLUMNS: &str = "id, title_en, title_es, message_en, message_es, \
     type::TEXT AS notification_type, target_neighborhood::TEXT AS target_neighborhood, \
     sent_at, created_by";

/// A row from the `notifications` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct NotificationRow {
    /// Surrogate primary key.
    pub id: i32,
    /// English title.
    pub title_en: String,
    /// Spanish title.
    pub title_es: String,
    /// English message body.
    pub message_en: String,
    /// Spanish message body.
    pub message_es: String,
    /// Notification type label (`alert`, `traffic`, ...).
    pub notification_type: String,
    /// Targeted neighborhood label; `all` means city-wide.
    pub target_neighborhood: Option<String>,
    /// When the notification was sent.
    pub sent_at: chrono::DateTime<chrono::Utc>,
    /// Admin account that created it.
    pub created_by: i32,
}

/// A row from the `notification_subscriptions` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct NotificationSubscriptionRow {
    /// Surrogate primary key.
    pub id: i32,
    /// Subscribed user account, when signed in.
    pub user_id: Option<i32>,
    /// Subscribed email, for anonymous subscriptions.
    pub email: Option<String>,
    /// Neighborhood scope label; `all` means city-wide.
    pub neighborhood: Option<String>,
    /// JSON array of subscribed notification type labels.
    pub notification_types: Option<String>,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields for creating a notification subscription.
#[derive(Debug, Clone, Default)]
pub struct NewNotificationSubscription {
    /// Subscribing user account, when signed in.
    pub user_id: Option<i32>,
    /// Email, for anonymous subscriptions.
    pub email: Option<String>,
    /// Neighborhood scope; defaults to city-wide.
    pub neighborhood: Option<TargetNeighborhood>,
    /// Notification types to receive; an empty list is stored as `[]`.
    pub notification_types: Vec<NotificationType>,
}

/// Fields for inserting a notification (admin path).
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// English title.
    pub title_en: String,
    /// Spanish title.
    pub title_es: String,
    /// English message body.
    pub message_en: String,
    /// Spanish message body.
    pub message_es: String,
    /// Notification type.
    pub notification_type: NotificationType,
    /// Neighborhood scope; defaults to city-wide.
    pub target_neighborhood: TargetNeighborhood,
    /// Admin account creating it.
    pub created_by: i32,
}

/// Operations on the `notifications` and `notification_subscriptions`
/// tables.
pub struct NotificationStore<'a> {
    pool: &'a PgPool,
}

impl<'a> NotificationStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The most recently sent notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn recent(&self, limit: i64) -> Result<Vec<NotificationRow>, DbError> {
        let rows = sqlx::query_as::<_, NotificationRow>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications ORDER BY sent_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a notification subscription. The neighborhood defaults to
    /// city-wide and the type list is stored as a JSON array. Returns
    /// the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails, or
    /// [`DbError::Serialization`] if the type list cannot be encoded.
    pub async fn subscribe(&self, new: &NewNotificationSubscription) -> Result<i32, DbError> {
        let neighborhood = new.neighborhood.unwrap_or(TargetNeighborhood::All);
        let types_json = serde_json::to_string(
            &new.notification_types
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>(),
        )?;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO notification_subscriptions (user_id, email, neighborhood, \
             notification_types) \
             VALUES ($1, $2, $3::target_neighborhood, $4) RETURNING id",
        )
        .bind(new.user_id)
        .bind(&new.email)
        .bind(neighborhood.as_str())
        .bind(types_json)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id, "Notification subscription created");
        Ok(id)
    }

    /// Insert a notification (admin path). Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, new: &NewNotification) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO notifications (title_en, title_es, message_en, message_es, type, \
             target_neighborhood, created_by) \
             VALUES ($1, $2, $3, $4, $5::notification_type, $6::target_neighborhood, $7) \
             RETURNING id",
        )
        .bind(&new.title_en)
        .bind(&new.title_es)
        .bind(&new.message_en)
        .bind(&new.message_es)
        .bind(new.notification_type.as_str())
        .bind(new.target_neighborhood.as_str())
        .bind(new.created_by)
        .fetch_one(self.pool)
        .await?;
        Ok(id)
    }
}
