//! Handlers for public form submissions and the studio overview.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::submission::{
    ContactMessage, CreateContactMessage, CreateResumeRequest, CreateSubscriber, ResumeRequest,
    Subscriber,
};
use folio_db::repositories::SubmissionRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::{require_non_empty, validate_email};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for `GET /studio/submissions`.
#[derive(Debug, Serialize)]
pub struct SubmissionsOverview {
    pub contacts: Vec<ContactMessage>,
    pub subscribers: Vec<Subscriber>,
    pub resume_requests: Vec<ResumeRequest>,
}

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    require_non_empty(&input.name, "name")?;
    validate_email(&input.email)?;
    require_non_empty(&input.message, "message")?;

    let message = SubmissionRepo::create_contact(&state.pool, &input).await?;

    tracing::info!(contact_id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// POST /api/v1/subscribe
///
/// A duplicate email violates `uq_subscribers_email` and surfaces as 409.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<CreateSubscriber>,
) -> AppResult<impl IntoResponse> {
    validate_email(&input.email)?;

    let subscriber = SubmissionRepo::create_subscriber(&state.pool, &input).await?;

    tracing::info!(subscriber_id = subscriber.id, "New subscriber");

    Ok((StatusCode::CREATED, Json(DataResponse { data: subscriber })))
}

/// POST /api/v1/resume-requests
pub async fn request_resume(
    State(state): State<AppState>,
    Json(input): Json<CreateResumeRequest>,
) -> AppResult<impl IntoResponse> {
    require_non_empty(&input.name, "name")?;
    validate_email(&input.email)?;

    let request = SubmissionRepo::create_resume_request(&state.pool, &input).await?;

    tracing::info!(request_id = request.id, "Resume download requested");

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /studio/submissions
///
/// All three submission tables in one response. The reads are independent
/// and issued concurrently purely to cut latency.
pub async fn list_submissions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (contacts, subscribers, resume_requests) = tokio::try_join!(
        SubmissionRepo::list_contacts(&state.pool),
        SubmissionRepo::list_subscribers(&state.pool),
        SubmissionRepo::list_resume_requests(&state.pool),
    )?;

    Ok(Json(DataResponse {
        data: SubmissionsOverview {
            contacts,
            subscribers,
            resume_requests,
        },
    }))
}
