//! Handlers for site settings.
//!
//! Settings are stored one row per section; section names come from the
//! closed set in `folio_core::settings` and the payload is an opaque JSON
//! object.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::settings::{validate_settings_payload, SettingsSection};
use folio_db::models::settings::UpsertSiteSetting;
use folio_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings/{section} (and GET /studio/settings/{section})
///
/// Fetch a settings section. Returns 204 if the section has never been
/// saved.
pub async fn get_settings(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<impl IntoResponse> {
    let section = SettingsSection::from_name(&section)?;
    let setting = SettingsRepo::get(&state.pool, section.name()).await?;

    match setting {
        Some(s) => Ok(Json(DataResponse { data: s }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// PUT /studio/settings/{section}
///
/// Create or replace a section's settings document.
pub async fn update_settings(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(input): Json<UpsertSiteSetting>,
) -> AppResult<impl IntoResponse> {
    let section = SettingsSection::from_name(&section)?;
    validate_settings_payload(&input.data)?;

    let setting = SettingsRepo::upsert(&state.pool, section.name(), &input.data).await?;

    tracing::info!(section = section.name(), "Site settings updated");

    Ok(Json(DataResponse { data: setting }))
}
