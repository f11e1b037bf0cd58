//! Repository for the `images` manifest table.
//!
//! Rows are created on upload and deleted on removal; the file itself is
//! handled by the API layer.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{ImageAsset, NewImageAsset};

/// Column list for `images` queries.
const IMAGE_COLUMNS: &str = "\
    id, file_name, url, description, hint, width, height, size_bytes, created_at";

/// Provides CRUD operations for the image manifest.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a manifest row for a freshly written upload.
    pub async fn create(pool: &PgPool, input: &NewImageAsset) -> Result<ImageAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (\
                file_name, url, description, hint, width, height, size_bytes\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, ImageAsset>(&query)
            .bind(&input.file_name)
            .bind(&input.url)
            .bind(&input.description)
            .bind(&input.hint)
            .bind(input.width)
            .bind(input.height)
            .bind(input.size_bytes)
            .fetch_one(pool)
            .await
    }

    /// Find a manifest row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ImageAsset>, sqlx::Error> {
        let query = format!("SELECT {IMAGE_COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, ImageAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all manifest rows, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ImageAsset>, sqlx::Error> {
        let query = format!("SELECT {IMAGE_COLUMNS} FROM images ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ImageAsset>(&query).fetch_all(pool).await
    }

    /// Delete a manifest row by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
