//! Testimonial models and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author: String,
    pub role: String,
    pub quote: String,
    /// Manifest image reference for the author's avatar.
    pub image_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub author: String,
    #[serde(default)]
    pub role: String,
    pub quote: String,
    pub image_id: Option<DbId>,
}

/// DTO for partially updating a testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTestimonial {
    pub author: Option<String>,
    pub role: Option<String>,
    pub quote: Option<String>,
    pub image_id: Option<DbId>,
}
