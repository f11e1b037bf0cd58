//! Route definition for the content-generation pipeline.

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Studio generation route.
///
/// ```text
/// POST /generate  -> generate_post
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new().route("/generate", post(generate::generate_post))
}
