//! Handlers for portfolio projects.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::slug::{slugify, validate_slug};
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_image_exists, require_non_empty};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects (and GET /studio/projects)
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{slug}
pub async fn get_project_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No project with slug '{slug}'")))?;

    Ok(Json(DataResponse { data: project }))
}

/// POST /studio/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    require_non_empty(&input.title, "title")?;
    if let Some(image_id) = input.image_id {
        ensure_image_exists(&state, image_id).await?;
    }

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

    let project = ProjectRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /studio/projects/{id}
///
/// Partial update; the slug is fixed at creation.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        require_non_empty(title, "title")?;
    }
    if let Some(image_id) = input.image_id {
        ensure_image_exists(&state, image_id).await?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /studio/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
