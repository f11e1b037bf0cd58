//! Site-settings models and DTOs.
//!
//! One row per section; the payload is an opaque JSON document whose
//! section names are validated against `folio_core::settings`.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub section: String,
    pub data: serde_json::Value,
    pub updated_at: Timestamp,
}

/// DTO for upserting a settings section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSiteSetting {
    pub data: serde_json::Value,
}
