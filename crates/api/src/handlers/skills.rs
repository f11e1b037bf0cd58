//! Handlers for the skills list.
//!
//! Icon identifiers are validated against the closed catalogue in
//! `folio_core::icons`; unknown identifiers are rejected rather than
//! falling back to a default glyph.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::icons::Icon;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkill, UpdateSkill};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/skills (and GET /studio/skills)
pub async fn list_skills(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// POST /studio/skills
pub async fn create_skill(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    require_non_empty(&input.name, "name")?;
    Icon::from_name(&input.icon)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;

    tracing::info!(skill_id = skill.id, name = %skill.name, "Skill created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT /studio/skills/{id}
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        require_non_empty(name, "name")?;
    }
    if let Some(icon) = &input.icon {
        Icon::from_name(icon)?;
    }

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;

    tracing::info!(skill_id = id, "Skill updated");

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /studio/skills/{id}
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }));
    }

    tracing::info!(skill_id = id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}
