pub mod generate;
pub mod health;
pub mod images;
pub mod posts;
pub mod projects;
pub mod settings;
pub mod skills;
pub mod studio;
pub mod submissions;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the public `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts                 list post summaries
/// /posts/{slug}          get one post
///
/// /projects              list projects
/// /projects/{slug}       get one project
///
/// /skills                list skills
/// /testimonials          list testimonials
/// /images                list the image manifest
/// /settings/{section}    get a settings section
///
/// /contact               submit a contact message (POST)
/// /subscribe             subscribe to the newsletter (POST)
/// /resume-requests       request the resume (POST)
/// ```
///
/// The studio tree is separate (see [`studio::router`]), as are the
/// health check and `/uploads` static files (see `router.rs`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(posts::public_router())
        .merge(projects::public_router())
        .merge(skills::public_router())
        .merge(testimonials::public_router())
        .merge(images::public_router())
        .merge(settings::public_router())
        .merge(submissions::public_router())
}
