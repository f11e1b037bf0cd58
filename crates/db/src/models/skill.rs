//! Skill models and DTOs.
//!
//! The `icon` column stores an identifier from the closed icon catalogue
//! in `folio_core::icons`; the API validates it before any write.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub icon: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub icon: String,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a skill.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}
