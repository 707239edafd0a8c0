//! Community event operations.

use sqlx::{PgPool, Postgres, QueryBuilder};

use bahia_types::filters::EventFilter;

use crate::error::DbError;

/// Column list shared by every event query.
pub(crate) const EVENT_COLUMNS: &str = "id, title_en, title_es, description_en, description_es, \
     start_date, end_date, location, address, latitude, longitude, \
     category::TEXT AS category, image_url, website, is_free, created_at, updated_at";

/// A row from the `events` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct EventRow {
    /// Surrogate primary key.
    pub id: i32,
    /// English title.
    pub title_en: String,
    /// Spanish title.
    pub title_es: String,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Event start.
    pub start_date: chrono::DateTime<chrono::Utc>,
    /// Event end, when known.
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Venue name or free-form location text.
    pub location: String,
    /// Street address, when known.
    pub address: Option<String>,
    /// Latitude as a decimal string, when known.
    pub latitude: Option<String>,
    /// Longitude as a decimal string, when known.
    pub longitude: Option<String>,
    /// Category label (`arts`, `music`, ...).
    pub category: String,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Event website.
    pub website: Option<String>,
    /// Whether attendance is free.
    pub is_free: bool,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update time.
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Fields for inserting an event (admin seeding/import path).
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// English title.
    pub title_en: String,
    /// Spanish title.
    pub title_es: String,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Event start.
    pub start_date: chrono::DateTime<chrono::Utc>,
    /// Event end, when known.
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Venue name or free-form location text.
    pub location: String,
    /// Street address.
    pub address: Option<String>,
    /// Latitude as a decimal string.
    pub latitude: Option<String>,
    /// Longitude as a decimal string.
    pub longitude: Option<String>,
    /// Category.
    pub category: bahia_types::EventCategory,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Event website.
    pub website: Option<String>,
    /// Whether attendance is free.
    pub is_free: bool,
}

impl NewEvent {
    /// Create a record with the required columns set; everything else is
    /// empty and the event is marked free.
    pub fn new(
        title_en: impl Into<String>,
        title_es: impl Into<String>,
        start_date: chrono::DateTime<chrono::Utc>,
        location: impl Into<String>,
        category: bahia_types::EventCategory,
    ) -> Self {
        Self {
            title_en: title_en.into(),
            title_es: title_es.into(),
            description_en: None,
            description_es: None,
            start_date,
            end_date: None,
            location: location.into(),
            address: None,
            latitude: None,
            longitude: None,
            category,
            image_url: None,
            website: None,
            is_free: true,
        }
    }
}

/// Operations on the `events` table.
pub struct EventStore<'a> {
    pool: &'a PgPool,
}

impl<'a> EventStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List events matching the conjunctive filter, soonest first.
    ///
    /// `upcoming = true` restricts to events starting now or later;
    /// `false` is a no-op. The free-text search is a case-insensitive
    /// substring match across both-language title and description
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self, filter: &EventFilter) -> Result<Vec<EventRow>, DbError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {EVENT_COLUMNS} FROM events WHERE TRUE"));

        if let Some(category) = filter.category {
            qb.push(" AND category = ");
            qb.push_bind(category.as_str());
            qb.push("::event_category");
        }
        if filter.upcoming == Some(true) {
            qb.push(" AND start_date >= NOW()");
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            qb.push(" AND (title_en ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR title_es ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR description_en ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR description_es ILIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }

        qb.push(" ORDER BY start_date ASC");

        let rows = qb
            .build_query_as::<EventRow>()
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Fetch an event by id. No side effects; only restaurant detail
    /// reads are counted.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventRow>, DbError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Insert an event (admin seeding/import path). Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, new: &NewEvent) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO events (title_en, title_es, description_en, description_es, \
             start_date, end_date, location, address, latitude, longitude, category, \
             image_url, website, is_free) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11::event_category, $12, $13, $14) \
             RETURNING id",
        )
        .bind(&new.title_en)
        .bind(&new.title_es)
        .bind(&new.description_en)
        .bind(&new.description_es)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(&new.location)
        .bind(&new.address)
        .bind(&new.latitude)
        .bind(&new.longitude)
        .bind(new.category.as_str())
        .bind(&new.image_url)
        .bind(&new.website)
        .bind(new.is_free)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
