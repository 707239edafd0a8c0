//! Restaurant promotions (business dashboard).

use sqlx::PgPool;

use crate::error::DbError;

/// Column list shared by every promotion query.
const PROMOTION_COLUMNS: &str = "id, restaurant_id, title_en, title_es, description_en, \
     description_es, image_url, start_date, end_date, is_active, views, clicks, \
     created_at, updated_at";

/// A row from the `promotions` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct PromotionRow {
    /// Surrogate primary key.
    pub id: i32,
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
    /// Whether the promotion is live.
    pub is_active: bool,
    /// Impression counter.
    pub views: i32,
    /// Click-through counter.
    pub clicks: i32,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update time.
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Fields for creating a promotion.
#[derive(Debug, Clone)]
pub struct NewPromotion {
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

/// Operations on the `promotions` table.
pub struct PromotionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PromotionStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All promotions for a restaurant, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_for_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<PromotionRow>, DbError> {
        let rows = sqlx::query_as::<_, PromotionRow>(&format!(
            "SELECT {PROMOTION_COLUMNS} FROM promotions WHERE restaurant_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(restaurant_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a promotion. Starts active with zeroed counters. Returns
    /// the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn create(&self, new: &NewPromotion) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO promotions (restaurant_id, title_en, title_es, description_en, \
             description_es, image_url, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(new.restaurant_id)
        .bind(&new.title_en)
        .bind(&new.title_es)
        .bind(&new.description_en)
        .bind(&new.description_es)
        .bind(&new.image_url)
        .bind(new.start_date)
        .bind(new.end_date)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id, restaurant_id = new.restaurant_id, "Promotion created");
        Ok(id)
    }
}
