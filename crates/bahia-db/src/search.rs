//! Cross-directory search.

use sqlx::PgPool;

use crate::error::DbError;
use crate::event_store::{EventRow, EVENT_COLUMNS};
use crate::experience_store::{ExperienceRow, EXPERIENCE_COLUMNS};
use crate::restaurant_store::{RestaurantRow, RESTAURANT_COLUMNS};

/// Matches from every searchable directory for one query.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GlobalSearchResults {
    /// Restaurant matches, at most ten.
    pub restaurants: Vec<RestaurantRow>,
    /// Event matches, at most ten.
    pub events: Vec<EventRow>,
    /// Experience matches, at most ten.
    pub experiences: Vec<ExperienceRow>,
}

/// Read-only search across restaurants, events and experiences.
pub struct SearchStore<'a> {
    pool: &'a PgPool,
}

impl<'a> SearchStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring search over names and descriptions in
    /// both languages, capped at ten matches per directory.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if any of the queries fail.
    pub async fn global(&self, query: &str) -> Result<GlobalSearchResults, DbError> {
        let pattern = format!("%{query}%");

        let restaurants = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants \
             WHERE name_en ILIKE $1 OR name_es ILIKE $1 \
                OR description_en ILIKE $1 OR description_es ILIKE $1 \
             LIMIT 10"
        ))
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        let events = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE title_en ILIKE $1 OR title_es ILIKE $1 \
                OR description_en ILIKE $1 OR description_es ILIKE $1 \
             LIMIT 10"
        ))
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        let experiences = sqlx::query_as::<_, ExperienceRow>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM curated_experiences \
             WHERE title_en ILIKE $1 OR title_es ILIKE $1 \
                OR description_en ILIKE $1 OR description_es ILIKE $1 \
             LIMIT 10"
        ))
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(GlobalSearchResults {
            restaurants,
            events,
            experiences,
        })
    }
}
