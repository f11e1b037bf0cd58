//! Public form submission models and DTOs: contact messages, newsletter
//! subscribers, and resume-download requests.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// A row from the `subscribers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscriber {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}

/// A row from the `resume_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResumeRequest {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for the public contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// DTO for the newsletter subscribe form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriber {
    pub email: String,
}

/// DTO for the resume-download request form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResumeRequest {
    pub name: String,
    pub email: String,
}
