//! Image manifest models and DTOs.
//!
//! A manifest row maps an uploaded file to its public URL plus the
//! descriptive metadata the frontend needs (alt text, AI hint text,
//! dimensions). Rows are created on upload and deleted on removal;
//! there is no update path.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageAsset {
    pub id: DbId,
    /// Stored file name under the public upload directory.
    pub file_name: String,
    /// Public URL path (e.g. `/uploads/<file_name>`).
    pub url: String,
    /// Alt text.
    pub description: String,
    /// Hint text for image placement/search.
    pub hint: String,
    pub width: i32,
    pub height: i32,
    pub size_bytes: i64,
    pub created_at: Timestamp,
}

/// Insert payload for a manifest row, assembled by the upload handler
/// after the file has been written and its dimensions read.
#[derive(Debug, Clone)]
pub struct NewImageAsset {
    pub file_name: String,
    pub url: String,
    pub description: String,
    pub hint: String,
    pub width: i32,
    pub height: i32,
    pub size_bytes: i64,
}
