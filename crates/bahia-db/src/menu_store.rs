//! Restaurant menu uploads (business dashboard).
//!
//! The store only keeps the pre-encoded file reference; encoding and
//! storage of the file itself happen outside this service.

use sqlx::PgPool;

use bahia_types::FileType;

use crate::error::DbError;

/// Column list shared by every menu query.
const MENU_COLUMNS: &str =
    "id, restaurant_id, title, file_url, file_type::TEXT AS file_type, uploaded_at";

/// A row from the `menus` table.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct MenuRow {
    /// Surrogate primary key.
    pub id: i32,
    /// Owning restaurant.
    pub restaurant_id: i32,
    /// Menu title, e.g. `Dinner Menu`.
    pub title: String,
    /// URL of the uploaded PDF or image.
    pub file_url: String,
    /// File type label (`pdf` or `image`).
    pub file_type: String,
    /// Upload time.
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

/// Fields for uploading a menu.
#[derive(Debug, Clone)]
pub struct NewMenu {
    /// Owning restaurant.
    pub restaurant_id: i32,
    /// Menu title.
    pub title: String,
    /// URL of the already-stored file.
    pub file_url: String,
    /// File type.
    pub file_type: FileType,
}

/// Operations on the `menus` table.
pub struct MenuStore<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All menus for a restaurant, most recently uploaded first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_for_restaurant(&self, restaurant_id: i32) -> Result<Vec<MenuRow>, DbError> {
        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE restaurant_id = $1 ORDER BY uploaded_at DESC"
        ))
        .bind(restaurant_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Record an uploaded menu. Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn upload(&self, new: &NewMenu) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO menus (restaurant_id, title, file_url, file_type) \
             VALUES ($1, $2, $3, $4::file_type) RETURNING id",
        )
        .bind(new.restaurant_id)
        .bind(&new.title)
        .bind(&new.file_url)
        .bind(new.file_type.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id, restaurant_id = new.restaurant_id, "Menu uploaded");
        Ok(id)
    }

    /// Delete a menu by id. Returns whether a row was deleted, so the
    /// caller can distinguish a no-op from a removal.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete(&self, menu_id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(menu_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
