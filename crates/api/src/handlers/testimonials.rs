//! Handlers for testimonials.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use folio_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_image_exists, require_non_empty};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/testimonials (and GET /studio/testimonials)
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// POST /studio/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<impl IntoResponse> {
    require_non_empty(&input.author, "author")?;
    require_non_empty(&input.quote, "quote")?;
    if let Some(image_id) = input.image_id {
        ensure_image_exists(&state, image_id).await?;
    }

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;

    tracing::info!(
        testimonial_id = testimonial.id,
        author = %testimonial.author,
        "Testimonial created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// PUT /studio/testimonials/{id}
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<impl IntoResponse> {
    if let Some(author) = &input.author {
        require_non_empty(author, "author")?;
    }
    if let Some(quote) = &input.quote {
        require_non_empty(quote, "quote")?;
    }
    if let Some(image_id) = input.image_id {
        ensure_image_exists(&state, image_id).await?;
    }

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;

    tracing::info!(testimonial_id = id, "Testimonial updated");

    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /studio/testimonials/{id}
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    tracing::info!(testimonial_id = id, "Testimonial deleted");

    Ok(StatusCode::NO_CONTENT)
}
