//! Handlers for studio login, logout, and the session probe.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::session::{issue_session_token, verify_password, SESSION_COOKIE};
use crate::state::AppState;

/// Request body for `POST /studio/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /studio/login
///
/// Verify the studio password and set the session cookie. Always
/// reachable without a session, so failed logins never redirect-loop.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if !verify_password(&input.password, &state.config.studio.password) {
        tracing::warn!("Studio login failed");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let token = issue_session_token(&state.config.studio)
        .map_err(|e| AppError::InternalError(format!("Failed to issue session token: {e}")))?;

    let max_age = state.config.studio.session_expiry_hours * 3600;
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");

    tracing::info!("Studio login succeeded");

    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)]))
}

/// POST /studio/logout
///
/// Clears the session cookie unconditionally. Deliberately outside the
/// session gate: an expired session should still be able to log out.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    (StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)])
}

/// GET /studio/session
///
/// Reachable only through the session gate; the studio frontend uses it
/// to probe login state.
pub async fn session_check() -> StatusCode {
    StatusCode::NO_CONTENT
}
