//! Repository for the `posts` table.
//!
//! Posts are insert-only: a duplicate slug violates `uq_posts_slug` and
//! bubbles up as a database error for the API layer to classify, and
//! there is no update method.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, PostSummary};

/// Column list for `posts` queries.
const POST_COLUMNS: &str = "\
    id, title, slug, description, content, image_data, created_at";

/// Column list for post summaries (listing without heavy columns).
const SUMMARY_COLUMNS: &str = "id, title, slug, description, created_at";

/// Provides CRUD operations for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a post. `slug` is the resolved slug (derived or supplied),
    /// validated by the caller.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePost,
        slug: &str,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, slug, description, content, image_data) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {POST_COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.image_data)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List post summaries, newest first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<PostSummary>, sqlx::Error> {
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, PostSummary>(&query).fetch_all(pool).await
    }

    /// Delete a post by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
