//! Local amenity operations (trails, parks, nature centers).

use sqlx::{PgPool, Postgres, QueryBuilder};

use bahia_types::AmenityCategory;

use crate::error::DbError;

/// Column list shared by every amenity query.
const AMENITY_COLUMNS: &str = "id, name_en, name_es, category::TEXT AS category, \
     description_en, description_es, address, latitude, longitude, image_url, website, \
     created_at";

/// A row from the `amenities` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct AmenityRow {
    /// Surrogate primary key.
    pub id: i32,
    /// English display name.
    pub name_en: String,
    /// Spanish display name.
    pub name_es: String,
    /// Category label (`trails`, `parks`, ...).
    pub category: String,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Street address, when known.
    pub address: Option<String>,
    /// Latitude as a decimal string, when known.
    pub latitude: Option<String>,
    /// Longitude as a decimal string, when known.
    pub longitude: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Row creation time.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields for inserting an amenity (admin seeding path).
#[derive(Debug, Clone)]
pub struct NewAmenity {
    /// English display name.
    pub name_en: String,
    /// Spanish display name.
    pub name_es: String,
    /// Category.
    pub category: AmenityCategory,
    /// English description.
    pub description_en: Option<String>,
    /// Spanish description.
    pub description_es: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Latitude as a decimal string.
    pub latitude: Option<String>,
    /// Longitude as a decimal string.
    pub longitude: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Website URL.
    pub website: Option<String>,
}

impl NewAmenity {
    /// Create a record with the required columns set and everything else
    /// empty.
    pub fn new(
        name_en: impl Into<String>,
        name_es: impl Into<String>,
        category: AmenityCategory,
    ) -> Self {
        Self {
            name_en: name_en.into(),
            name_es: name_es.into(),
            category,
            description_en: None,
            description_es: None,
            address: None,
            latitude: None,
            longitude: None,
            image_url: None,
            website: None,
        }
    }
}

/// Operations on the `amenities` table.
pub struct AmenityStore<'a> {
    pool: &'a PgPool,
}

impl<'a> AmenityStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List amenities, optionally restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self, category: Option<AmenityCategory>) -> Result<Vec<AmenityRow>, DbError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {AMENITY_COLUMNS} FROM amenities"));

        if let Some(category) = category {
            qb.push(" WHERE category = ");
            qb.push_bind(category.as_str());
            qb.push("::amenity_category");
        }

        let rows = qb
            .build_query_as::<AmenityRow>()
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert an amenity (admin seeding path). Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, new: &NewAmenity) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO amenities (name_en, name_es, category, description_en, \
             description_es, address, latitude, longitude, image_url, website) \
             VALUES ($1, $2, $3::amenity_category, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
        )
        .bind(&new.name_en)
        .bind(&new.name_es)
        .bind(new.category.as_str())
        .bind(&new.description_en)
        .bind(&new.description_es)
        .bind(&new.address)
        .bind(&new.latitude)
        .bind(&new.longitude)
        .bind(&new.image_url)
        .bind(&new.website)
        .fetch_one(self.pool)
        .await?;
        Ok(id)
    }
}
