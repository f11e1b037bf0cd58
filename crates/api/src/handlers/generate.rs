//! Handler for the studio content-generation pipeline.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_genai::pipeline::{self, GenerationRequest};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum topic length, in characters.
const MIN_TOPIC_CHARS: usize = 10;

/// POST /studio/generate
///
/// Draft a post from a topic and skill list. The draft goes back to the
/// studio only; saving it is a separate, explicit `POST /studio/posts`.
/// Repeated generation attempts therefore have no side effects.
pub async fn generate_post(
    State(state): State<AppState>,
    Json(input): Json<GenerationRequest>,
) -> AppResult<impl IntoResponse> {
    let topic = input.topic.trim();
    if topic.chars().count() < MIN_TOPIC_CHARS {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Topic must be at least {MIN_TOPIC_CHARS} characters"
        ))));
    }
    if input.skills.is_empty() || input.skills.iter().any(|s| s.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "At least one non-empty skill is required".into(),
        )));
    }

    let result = pipeline::generate(&state.genai, topic, &input.skills).await?;

    tracing::info!(slug = %result.slug, title = %result.title, "Post draft generated");

    Ok(Json(DataResponse { data: result }))
}
