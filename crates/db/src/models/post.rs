//! Blog post models and DTOs.
//!
//! Posts are immutable once published: there is a create DTO but no
//! update DTO. The cover image travels inline as base64 data produced by
//! the generation pipeline.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    /// Base64-encoded cover image.
    pub image_data: String,
    pub created_at: Timestamp,
}

/// Post listing row without the heavy `content` and `image_data` columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for saving a post.
///
/// `slug` is optional; when absent the API derives one from the title.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub content: String,
    pub image_data: String,
}
