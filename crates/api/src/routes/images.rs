//! Route definitions for the image manifest.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Public image routes.
///
/// ```text
/// GET /images  -> list_images
/// ```
///
/// The files themselves are served from `/uploads` (see `router.rs`).
pub fn public_router() -> Router<AppState> {
    Router::new().route("/images", get(images::list_images))
}

/// Studio image routes.
///
/// ```text
/// GET    /images       -> list_images
/// POST   /images       -> upload_image (multipart)
/// DELETE /images/{id}  -> delete_image
/// ```
pub fn studio_router() -> Router<AppState> {
    Router::new()
        .route("/images", get(images::list_images).post(images::upload_image))
        .route("/images/{id}", delete(images::delete_image))
        // The default axum body limit (2 MB) is below the upload cap; the
        // handler still enforces MAX_UPLOAD_BYTES on the file itself.
        .layer(DefaultBodyLimit::max(images::MAX_UPLOAD_BYTES + 64 * 1024))
}
