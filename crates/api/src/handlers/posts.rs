//! Handlers for blog posts.
//!
//! Posts are immutable once published: the studio can create and delete
//! them but there is no update endpoint. A duplicate slug is rejected
//! (409), never merged or overwritten.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::slug::{slugify, validate_slug};
use folio_core::types::DbId;
use folio_db::models::post::CreatePost;
use folio_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/posts (and GET /studio/posts)
///
/// List post summaries, newest first. The heavy content and image columns
/// are not included.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/posts/{slug}
///
/// Fetch a full post by its slug.
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with slug '{slug}'")))?;

    Ok(Json(DataResponse { data: post }))
}

/// GET /studio/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(DataResponse { data: post }))
}

/// POST /studio/posts
///
/// Persist a post -- typically a generated draft the studio user has
/// accepted. This is the explicit save step; generation itself never
/// writes anything.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    require_non_empty(&input.title, "title")?;
    require_non_empty(&input.description, "description")?;
    require_non_empty(&input.content, "content")?;
    require_non_empty(&input.image_data, "image_data")?;

    let slug = match &input.slug {
        Some(slug) => {
            validate_slug(slug)?;
            slug.clone()
        }
        None => {
            let derived = slugify(&input.title);
            if derived.is_empty() {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "No slug could be derived from title '{}'",
                    input.title
                ))));
            }
            derived
        }
    };

    let post = PostRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, "Post published");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// DELETE /studio/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PostRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
