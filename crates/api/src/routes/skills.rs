//! Route definitions for the skills list.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Public skill routes.
///
/// ```text
/// GET /skills  -> list_skills
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/skills", get(skills::list_skills))
}

/// Studio skill routes.
///
/// ```text
/// GET    /skills       -> list_skills
/// POST   /skills       -> create_skill
/// PUT    /skills/{id}  -> update_skill
/// DELETE /skills/{id}  -> delete_skill
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new()
        .route("/skills", get(skills::list_skills).post(skills::create_skill))
        .route(
            "/skills/{id}",
            put(skills::update_skill).delete(skills::delete_skill),
        )
}
