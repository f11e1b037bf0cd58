//! Repository for the `testimonials` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list for `testimonials` queries.
const TESTIMONIAL_COLUMNS: &str = "\
    id, author, role, quote, image_id, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (author, role, quote, image_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {TESTIMONIAL_COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.author)
            .bind(&input.role)
            .bind(&input.quote)
            .bind(input.image_id)
            .fetch_one(pool)
            .await
    }

    /// Find a testimonial by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {TESTIMONIAL_COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all testimonials, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {TESTIMONIAL_COLUMNS} FROM testimonials ORDER BY id");
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    /// Partially update a testimonial.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                author = COALESCE($2, author), \
                role = COALESCE($3, role), \
                quote = COALESCE($4, quote), \
                image_id = COALESCE($5, image_id), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {TESTIMONIAL_COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(input.author.as_deref())
            .bind(input.role.as_deref())
            .bind(input.quote.as_deref())
            .bind(input.image_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
