//! Route definitions for the studio (password-gated admin area).
//!
//! Login and logout are mounted outside the session gate so they are
//! always reachable. Everything else -- including unmatched `/studio/*`
//! paths, via the explicit fallback -- passes through
//! [`require_session`] and is redirected to `/studio/login` without a
//! valid session.

use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::studio_auth;
use crate::middleware::studio::require_session;
use crate::routes::{
    generate, images, posts, projects, settings, skills, submissions, testimonials,
};
use crate::state::AppState;

/// Build the `/studio` route tree.
///
/// ```text
/// POST /login                  -> login (always reachable)
/// POST /logout                 -> logout (always reachable)
///
/// -- everything below requires a valid session --
///
/// GET  /session                -> session probe
/// POST /generate               -> draft a post via the generation pipeline
///
/// GET|POST   /posts            GET|DELETE /posts/{id}
/// GET|POST   /projects         PUT|DELETE /projects/{id}
/// GET|POST   /skills           PUT|DELETE /skills/{id}
/// GET|POST   /testimonials     PUT|DELETE /testimonials/{id}
/// GET|POST   /images           DELETE     /images/{id}
/// GET|PUT    /settings/{section}
/// GET        /submissions
/// ```
pub fn router(state: AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/session", get(studio_auth::session_check))
        .merge(generate::studio_router())
        .merge(posts::studio_router())
        .merge(projects::studio_router())
        .merge(skills::studio_router())
        .merge(testimonials::studio_router())
        .merge(settings::studio_router())
        .merge(images::studio_router())
        .merge(submissions::studio_router())
        .fallback(studio_not_found)
        .layer(middleware::from_fn_with_state(state, require_session));

    Router::new()
        .route("/login", post(studio_auth::login))
        .route("/logout", post(studio_auth::logout))
        .merge(gated)
}

/// Fallback inside the gated tree, so unknown `/studio/*` paths still go
/// through the session gate: unauthenticated requests are redirected,
/// authenticated ones get a plain 404.
async fn studio_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
