//! Route definitions for portfolio projects.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public project routes.
///
/// ```text
/// GET /projects         -> list_projects
/// GET /projects/{slug}  -> get_project_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/projects/{slug}", get(projects::get_project_by_slug))
}

/// Studio project routes.
///
/// ```text
/// GET    /projects       -> list_projects
/// POST   /projects       -> create_project
/// PUT    /projects/{id}  -> update_project
/// DELETE /projects/{id}  -> delete_project
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            put(projects::update_project).delete(projects::delete_project),
        )
}
