//! Restaurant directory operations.
//!
//! Restaurants are the central entity of the guide: listings are filtered
//! and ordered by popularity, detail reads feed the denormalized view
//! counter, and the "near me" feature filters the whole table by
//! great-circle distance.

use sqlx::{PgPool, Postgres, QueryBuilder};

use bahia_types::filters::RestaurantFilter;

use crate::error::DbError;
use crate::geo::{Coordinates, within_radius};

/// Column list shared by every restaurant query. Enum columns are cast to
/// `TEXT` so rows decode without compile-time database access.
pub(crate) const RESTAURANT_COLUMNS: &str = "id, name_en, name_es, \
     cuisine::TEXT AS cuisine, neighborhood::TEXT AS neighborhood, \
     address, latitude, longitude, description_en, description_es, \
     phone, website, image_url, family_friendly, \
     price_range::TEXT AS price_range, rating, hours_en, hours_es, \
     created_at, updated_at, owner_id, views, \
     subscription_level::TEXT AS subscription_level, \
     subscription_start_date, subscription_end_date, \
     video_url, badges, is_featured, sponsored_experience_id";

/// A row from the `restaurants` table.
///
/// Enum columns are carried as their database labels (strings); the typed
/// enums in `bahia-types` validate them at the API boundary.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct RestaurantRow {
    /// Surrogate primary key.
    pub id: i32,
    /// English display name.
    pub name_en: String,
    /// Spanish display name.
    pub name_es: String,
    /// Cuisine label (`mexican`, `asian`, ...).
    pub cuisine: String,
    /// Neighborhood label (`downtown`, `bayfront`, ...).
    pub neighborhood: String,
    /// Street address.
    pub address: String,
    /// Latitude as a decimal string, as imported.
    pub latitude: String,
    /// Longitude as a decimal string, as imported.
    pub longitude: String,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Whether the restaurant is family friendly.
    pub family_friendly: bool,
    /// Price tier label (`$` through `$$$$`).
    pub price_range: Option<String>,
    /// Display rating, e.g. `4.5`.
    pub rating: Option<String>,
    /// Opening hours, English.
    pub hours_en: Option<String>,
    /// Opening hours, Spanish.
    pub hours_es: Option<String>,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update time.
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Owning business account, when claimed.
    pub owner_id: Option<i32>,
    /// Denormalized detail-view counter.
    pub views: i32,
    /// Denormalized subscription tier label.
    pub subscription_level: String,
    /// Subscription period start, when subscribed.
    pub subscription_start_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Subscription period end. Stored for display; nothing reads it to
    /// auto-revert the tier.
    pub subscription_end_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Promotional video URL (Pro/Partner tiers).
    pub video_url: Option<String>,
    /// JSON array of badge labels, e.g. `["verified"]`.
    pub badges: Option<String>,
    /// Whether the listing is featured.
    pub is_featured: bool,
    /// Sponsored curated experience, Partner tier only.
    pub sponsored_experience_id: Option<i32>,
}

/// Fields for inserting a restaurant (admin seeding/import path).
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    /// English display name.
    pub name_en: String,
    /// Spanish display name.
    pub name_es: String,
    /// Cuisine category.
    pub cuisine: bahia_types::Cuisine,
    /// Neighborhood.
    pub neighborhood: bahia_types::Neighborhood,
    /// Street address.
    pub address: String,
    /// Latitude as a decimal string.
    pub latitude: String,
    /// Longitude as a decimal string.
    pub longitude: String,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Whether the restaurant is family friendly.
    pub family_friendly: bool,
    /// Price tier.
    pub price_range: bahia_types::PriceRange,
    /// Display rating, e.g. `4.5`.
    pub rating: Option<String>,
    /// Opening hours, English.
    pub hours_en: Option<String>,
    /// Opening hours, Spanish.
    pub hours_es: Option<String>,
    /// Owning business account.
    pub owner_id: Option<i32>,
    /// Badge labels, stored as a JSON array.
    pub badges: Option<Vec<String>>,
    /// Whether the listing is featured.
    pub is_featured: bool,
}

impl NewRestaurant {
    /// Create a record with the required columns set and everything else
    /// defaulted (no description, `$$`, not featured).
    pub fn new(
        name_en: impl Into<String>,
        name_es: impl Into<String>,
        cuisine: bahia_types::Cuisine,
        neighborhood: bahia_types::Neighborhood,
        address: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            name_en: name_en.into(),
            name_es: name_es.into(),
            cuisine,
            neighborhood,
            address: address.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            description_en: None,
            description_es: None,
            phone: None,
            website: None,
            image_url: None,
            family_friendly: false,
            price_range: bahia_types::PriceRange::Moderate,
            rating: None,
            hours_en: None,
            hours_es: None,
            owner_id: None,
            badges: None,
            is_featured: false,
        }
    }
}

/// Operations on the `restaurants` table.
pub struct RestaurantStore<'a> {
    pool: &'a PgPool,
}

impl<'a> RestaurantStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List restaurants matching the conjunctive filter, most viewed
    /// first.
    ///
    /// Every present filter field narrows the result set; an absent field
    /// is omitted entirely. The free-text search is a case-insensitive
    /// substring match across both-language name and description columns.
    /// Returns the full filtered set; the directory has no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self, filter: &RestaurantFilter) -> Result<Vec<RestaurantRow>, DbError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE TRUE"));

        if let Some(cuisine) = filter.cuisine {
            qb.push(" AND cuisine = ");
            qb.push_bind(cuisine.as_str());
            qb.push("::cuisine");
        }
        if let Some(neighborhood) = filter.neighborhood {
            qb.push(" AND neighborhood = ");
            qb.push_bind(neighborhood.as_str());
            qb.push("::neighborhood");
        }
        // The family-friendly toggle only ever narrows; `false` means
        // "no preference", not "exclude family-friendly places".
        if filter.family_friendly == Some(true) {
            qb.push(" AND family_friendly = TRUE");
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            qb.push(" AND (name_en ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR name_es ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR description_en ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR description_es ILIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }

        qb.push(" ORDER BY views DESC");

        let rows = qb
            .build_query_as::<RestaurantRow>()
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Fetch a restaurant by id, counting the read as a detail view.
    ///
    /// The increment and the read are one atomic
    /// `UPDATE ... SET views = views + 1 ... RETURNING` statement, so
    /// concurrent detail reads cannot lose updates. The returned row
    /// carries the post-increment counter.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RestaurantRow>, DbError> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "UPDATE restaurants SET views = views + 1 WHERE id = $1 RETURNING {RESTAURANT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Fetch a restaurant by id without touching the view counter.
    ///
    /// Used where a restaurant record is inlined into another payload
    /// (experience stops) and by tests that assert counter behavior.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_plain(&self, id: i32) -> Result<Option<RestaurantRow>, DbError> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Restaurants within `radius_km` of the reference point
    /// (great-circle distance).
    ///
    /// Loads the whole table and filters in memory. O(n) per call, which
    /// is fine at directory scale; a spatial index (`PostGIS`) is the
    /// upgrade path if the table outgrows this. Rows with unparsable
    /// coordinates are excluded.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn nearby(
        &self,
        reference: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<RestaurantRow>, DbError> {
        let all = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants"
        ))
        .fetch_all(self.pool)
        .await?;

        let nearby: Vec<RestaurantRow> = all
            .into_iter()
            .filter(|r| within_radius(reference, &r.latitude, &r.longitude, radius_km))
            .collect();

        tracing::debug!(
            count = nearby.len(),
            radius_km,
            "Nearby restaurants filtered"
        );
        Ok(nearby)
    }

    /// Insert a restaurant (admin seeding/import path). Returns the new
    /// id; `views` starts at zero and the tier at `free`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails, or
    /// [`DbError::Serialization`] if the badge list cannot be encoded.
    pub async fn insert(&self, new: &NewRestaurant) -> Result<i32, DbError> {
        let badges_json = new
            .badges
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO restaurants (name_en, name_es, cuisine, neighborhood, address, \
             latitude, longitude, description_en, description_es, phone, website, image_url, \
             family_friendly, price_range, rating, hours_en, hours_es, owner_id, badges, \
             is_featured) \
             VALUES ($1, $2, $3::cuisine, $4::neighborhood, $5, $6, $7, $8, $9, $10, $11, $12, \
             $13, $14::price_range, $15, $16, $17, $18, $19, $20) \
             RETURNING id",
        )
        .bind(&new.name_en)
        .bind(&new.name_es)
        .bind(new.cuisine.as_str())
        .bind(new.neighborhood.as_str())
        .bind(&new.address)
        .bind(&new.latitude)
        .bind(&new.longitude)
        .bind(&new.description_en)
        .bind(&new.description_es)
        .bind(&new.phone)
        .bind(&new.website)
        .bind(&new.image_url)
        .bind(new.family_friendly)
        .bind(new.price_range.as_str())
        .bind(&new.rating)
        .bind(&new.hours_en)
        .bind(&new.hours_es)
        .bind(new.owner_id)
        .bind(badges_json)
        .bind(new.is_featured)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
