//! Route definitions for public form submissions and the studio overview.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Public submission routes.
///
/// ```text
/// POST /contact          -> submit_contact
/// POST /subscribe        -> subscribe
/// POST /resume-requests  -> request_resume
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submissions::submit_contact))
        .route("/subscribe", post(submissions::subscribe))
        .route("/resume-requests", post(submissions::request_resume))
}

/// Studio submission routes.
///
/// ```text
/// GET /submissions  -> list_submissions (three concurrent table reads)
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new().route("/submissions", get(submissions::list_submissions))
}
