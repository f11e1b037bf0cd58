//! Repository for the public-submission tables: contact messages,
//! subscribers, and resume-download requests.

use sqlx::PgPool;

use crate::models::submission::{
    ContactMessage, CreateContactMessage, CreateResumeRequest, CreateSubscriber, ResumeRequest,
    Subscriber,
};

/// Column list for `contact_messages` queries.
const CONTACT_COLUMNS: &str = "id, name, email, message, created_at";

/// Column list for `subscribers` queries.
const SUBSCRIBER_COLUMNS: &str = "id, email, created_at";

/// Column list for `resume_requests` queries.
const RESUME_COLUMNS: &str = "id, name, email, created_at";

/// Provides insert/list operations for public form submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    // -----------------------------------------------------------------------
    // Contact messages
    // -----------------------------------------------------------------------

    /// Insert a contact message.
    pub async fn create_contact(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, message) \
             VALUES ($1, $2, $3) \
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List contact messages, newest first.
    pub async fn list_contacts(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_messages ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactMessage>(&query).fetch_all(pool).await
    }

    // -----------------------------------------------------------------------
    // Subscribers
    // -----------------------------------------------------------------------

    /// Insert a subscriber. A duplicate email violates `uq_subscribers_email`.
    pub async fn create_subscriber(
        pool: &PgPool,
        input: &CreateSubscriber,
    ) -> Result<Subscriber, sqlx::Error> {
        let query = format!(
            "INSERT INTO subscribers (email) VALUES ($1) RETURNING {SUBSCRIBER_COLUMNS}"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// List subscribers, newest first.
    pub async fn list_subscribers(pool: &PgPool) -> Result<Vec<Subscriber>, sqlx::Error> {
        let query =
            format!("SELECT {SUBSCRIBER_COLUMNS} FROM subscribers ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Subscriber>(&query).fetch_all(pool).await
    }

    // -----------------------------------------------------------------------
    // Resume requests
    // -----------------------------------------------------------------------

    /// Insert a resume-download request.
    pub async fn create_resume_request(
        pool: &PgPool,
        input: &CreateResumeRequest,
    ) -> Result<ResumeRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO resume_requests (name, email) \
             VALUES ($1, $2) \
             RETURNING {RESUME_COLUMNS}"
        );
        sqlx::query_as::<_, ResumeRequest>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// List resume requests, newest first.
    pub async fn list_resume_requests(pool: &PgPool) -> Result<Vec<ResumeRequest>, sqlx::Error> {
        let query =
            format!("SELECT {RESUME_COLUMNS} FROM resume_requests ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ResumeRequest>(&query).fetch_all(pool).await
    }
}
