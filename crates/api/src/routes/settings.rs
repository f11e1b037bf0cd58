//! Route definitions for site settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Public settings routes (read-only).
///
/// ```text
/// GET /settings/{section}  -> get_settings
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/settings/{section}", get(settings::get_settings))
}

/// Studio settings routes.
///
/// ```text
/// GET /settings/{section}  -> get_settings
/// PUT /settings/{section}  -> update_settings
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new().route(
        "/settings/{section}",
        get(settings::get_settings).put(settings::update_settings),
    )
}
