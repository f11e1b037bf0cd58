//! Route definitions for blog posts.
//!
//! Two routers are provided:
//! - `public_router()` merged into `/api/v1`
//! - `studio_router()` merged into the gated `/studio` tree
//!
//! There is deliberately no update route: posts are immutable once
//! published.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Public post routes.
///
/// ```text
/// GET /posts         -> list_posts
/// GET /posts/{slug}  -> get_post_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts))
        .route("/posts/{slug}", get(posts::get_post_by_slug))
}

/// Studio post routes.
///
/// ```text
/// GET    /posts       -> list_posts
/// POST   /posts       -> create_post
/// GET    /posts/{id}  -> get_post
/// DELETE /posts/{id}  -> delete_post
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/{id}",
            get(posts::get_post).delete(posts::delete_post),
        )
}
