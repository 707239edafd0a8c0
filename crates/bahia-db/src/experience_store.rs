//! Curated experience routes and their ordered stops.
//!
//! An experience is a hand-authored multi-stop route. Stops either
//! reference a restaurant by id or carry a custom location; `order_index`
//! is unique per experience and defines the display sequence.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::DbError;
use crate::restaurant_store::{RESTAURANT_COLUMNS, RestaurantRow};

/// Column list shared by every experience query.
pub(crate) const EXPERIENCE_COLUMNS: &str = "id, title_en, title_es, description_en, description_es, \
     slug, image_url, duration, parking_tips_en, parking_tips_es, best_time, \
     created_at, updated_at";

/// A row from the `curated_experiences` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct ExperienceRow {
    /// Surrogate primary key.
    pub id: i32,
    /// English title.
    pub title_en: String,
    /// Spanish title.
    pub title_es: String,
    /// English description.
    pub description_en: String,
    /// Spanish description.
    pub description_es: String,
    /// URL slug, unique per experience.
    pub slug: String,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Rough duration, e.g. `3-4 hours`.
    pub duration: Option<String>,
    /// Parking advice, English.
    pub parking_tips_en: Option<String>,
    /// Parking advice, Spanish.
    pub parking_tips_es: Option<String>,
    /// Best time to go, e.g. `Friday evening`.
    pub best_time: Option<String>,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update time.
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A row from the `experience_stops` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct StopRow {
    /// Surrogate primary key.
    pub id: i32,
    /// Owning experience.
    pub experience_id: i32,
    /// Referenced restaurant, when the stop is a restaurant.
    pub restaurant_id: Option<i32>,
    /// Custom location name, English.
    pub custom_location_en: Option<String>,
    /// Custom location name, Spanish.
    pub custom_location_es: Option<String>,
    /// Custom street address.
    pub custom_address: Option<String>,
    /// Latitude as a decimal string, when known.
    pub latitude: Option<String>,
    /// Longitude as a decimal string, when known.
    pub longitude: Option<String>,
    /// Position in the route; unique per experience.
    pub order_index: i32,
    /// Stop notes, English.
    pub notes_en: Option<String>,
    /// Stop notes, Spanish.
    pub notes_es: Option<String>,
}

/// A stop with its referenced restaurant inlined, when resolvable.
///
/// `restaurant` is `None` both for custom-location stops and for stops
/// whose referenced restaurant no longer exists; the route renders the
/// stop's own fields in either case.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolvedStop {
    /// The stop record.
    #[serde(flatten)]
    pub stop: StopRow,
    /// The referenced restaurant's current record.
    pub restaurant: Option<RestaurantRow>,
}

/// An experience with its stops resolved in route order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExperienceWithStops {
    /// The experience record.
    #[serde(flatten)]
    pub experience: ExperienceRow,
    /// Stops ascending by `order_index`.
    pub stops: Vec<ResolvedStop>,
}

/// Fields for inserting an experience (admin seeding path).
#[derive(Debug, Clone)]
pub struct NewExperience {
    /// English title.
    pub title_en: String,
    /// Spanish title.
    pub title_es: String,
    /// English description.
    pub description_en: String,
    /// Spanish description.
    pub description_es: String,
    /// URL slug, unique per experience.
    pub slug: String,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Rough duration.
    pub duration: Option<String>,
    /// Parking advice, English.
    pub parking_tips_en: Option<String>,
    /// Parking advice, Spanish.
    pub parking_tips_es: Option<String>,
    /// Best time to go.
    pub best_time: Option<String>,
}

/// Fields for inserting an experience stop (admin seeding path).
#[derive(Debug, Clone)]
pub struct NewStop {
    /// Owning experience.
    pub experience_id: i32,
    /// Referenced restaurant, for restaurant stops.
    pub restaurant_id: Option<i32>,
    /// Custom location name, English.
    pub custom_location_en: Option<String>,
    /// Custom location name, Spanish.
    pub custom_location_es: Option<String>,
    /// Custom street address.
    pub custom_address: Option<String>,
    /// Latitude as a decimal string.
    pub latitude: Option<String>,
    /// Longitude as a decimal string.
    pub longitude: Option<String>,
    /// Position in the route; unique per experience.
    pub order_index: i32,
    /// Stop notes, English.
    pub notes_en: Option<String>,
    /// Stop notes, Spanish.
    pub notes_es: Option<String>,
}

/// Operations on the `curated_experiences` and `experience_stops` tables.
pub struct ExperienceStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ExperienceStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all experiences, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<ExperienceRow>, DbError> {
        let rows = sqlx::query_as::<_, ExperienceRow>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM curated_experiences ORDER BY created_at"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Fetch an experience by slug, with stops in route order and each
    /// referenced restaurant inlined.
    ///
    /// All referenced restaurants are resolved with a single batched
    /// lookup (`id = ANY(...)`) rather than one query per stop. The
    /// resolution does not go through the view-counting detail read:
    /// rendering a route is not a detail view.
    ///
    /// Returns `Ok(None)` when the slug does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if any query fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ExperienceWithStops>, DbError> {
        let Some(experience) = sqlx::query_as::<_, ExperienceRow>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM curated_experiences WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        else {
            return Ok(None);
        };

        let stops = sqlx::query_as::<_, StopRow>(
            "SELECT id, experience_id, restaurant_id, custom_location_en, custom_location_es, \
             custom_address, latitude, longitude, order_index, notes_en, notes_es \
             FROM experience_stops WHERE experience_id = $1 ORDER BY order_index",
        )
        .bind(experience.id)
        .fetch_all(self.pool)
        .await?;

        let referenced: Vec<i32> = stops.iter().filter_map(|s| s.restaurant_id).collect();
        let restaurants: HashMap<i32, RestaurantRow> = if referenced.is_empty() {
            HashMap::new()
        } else {
            sqlx::query_as::<_, RestaurantRow>(&format!(
                "SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = ANY($1)"
            ))
            .bind(&referenced)
            .fetch_all(self.pool)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect()
        };

        let resolved = stops
            .into_iter()
            .map(|stop| {
                // `get` rather than `remove`: two stops may reference the
                // same restaurant.
                let restaurant = stop.restaurant_id.and_then(|id| restaurants.get(&id).cloned());
                ResolvedStop { stop, restaurant }
            })
            .collect();

        Ok(Some(ExperienceWithStops {
            experience,
            stops: resolved,
        }))
    }

    /// Insert an experience (admin seeding path). Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails (including a
    /// duplicate slug).
    pub async fn insert(&self, new: &NewExperience) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO curated_experiences (title_en, title_es, description_en, \
             description_es, slug, image_url, duration, parking_tips_en, parking_tips_es, \
             best_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
        )
        .bind(&new.title_en)
        .bind(&new.title_es)
        .bind(&new.description_en)
        .bind(&new.description_es)
        .bind(&new.slug)
        .bind(&new.image_url)
        .bind(&new.duration)
        .bind(&new.parking_tips_en)
        .bind(&new.parking_tips_es)
        .bind(&new.best_time)
        .fetch_one(self.pool)
        .await?;
        Ok(id)
    }

    /// Insert a stop (admin seeding path). Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails (including a
    /// duplicate `order_index` within the experience).
    pub async fn insert_stop(&self, new: &NewStop) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO experience_stops (experience_id, restaurant_id, custom_location_en, \
             custom_location_es, custom_address, latitude, longitude, order_index, notes_en, \
             notes_es) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
        )
        .bind(new.experience_id)
        .bind(new.restaurant_id)
        .bind(&new.custom_location_en)
        .bind(&new.custom_location_es)
        .bind(&new.custom_address)
        .bind(&new.latitude)
        .bind(&new.longitude)
        .bind(new.order_index)
        .bind(&new.notes_en)
        .bind(&new.notes_es)
        .fetch_one(self.pool)
        .await?;
        Ok(id)
    }
}
