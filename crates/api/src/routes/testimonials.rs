//! Route definitions for testimonials.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Public testimonial routes.
///
/// ```text
/// GET /testimonials  -> list_testimonials
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/testimonials", get(testimonials::list_testimonials))
}

/// Studio testimonial routes.
///
/// ```text
/// GET    /testimonials       -> list_testimonials
/// POST   /testimonials       -> create_testimonial
/// PUT    /testimonials/{id}  -> update_testimonial
/// DELETE /testimonials/{id}  -> delete_testimonial
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new()
        .route(
            "/testimonials",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/testimonials/{id}",
            put(testimonials::update_testimonial).delete(testimonials::delete_testimonial),
        )
}
