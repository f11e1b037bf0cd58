//! Two-step post-generation pipeline.
//!
//! Step 1 asks the text model for a schema-constrained draft (title, slug,
//! description, content, image prompt). Step 2 feeds the draft's image
//! prompt -- never caller input -- to the image model. The merged result is
//! returned to the caller; nothing is persisted here, and a failure at
//! either step aborts the whole operation.

use serde::{Deserialize, Serialize};

use folio_core::slug::{is_valid_slug, slugify};

use crate::client::GenAiClient;
use crate::error::GenerationError;
use crate::prompt::{post_prompt, post_response_schema};

/// A request to draft a post. Transient; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Free-text topic for the post.
    pub topic: String,
    /// Skill names to weave into the draft.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A complete post draft: all five text fields plus the cover image.
///
/// Either every field is populated or the pipeline returned an error;
/// partially-populated results are never produced.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub image_prompt: String,
    /// Base64-encoded cover image.
    pub image_data: String,
}

/// The text model's structured draft, before the image step.
#[derive(Debug, Deserialize)]
struct PostDraft {
    title: String,
    slug: String,
    description: String,
    content: String,
    image_prompt: String,
}

/// Draft a post for the given topic and skills.
///
/// The caller is responsible for input policy (topic length, non-empty
/// skill list); this function only talks to the generation endpoints and
/// validates their output.
pub async fn generate(
    client: &GenAiClient,
    topic: &str,
    skills: &[String],
) -> Result<GenerationResult, GenerationError> {
    let raw = client
        .generate_structured(&post_prompt(topic, skills), &post_response_schema())
        .await?;
    let draft = parse_draft(&raw)?;

    tracing::debug!(title = %draft.title, "Post draft generated, requesting cover image");

    let image_data = client.generate_image(&draft.image_prompt).await?;

    finalize(draft, image_data)
}

/// Parse the raw structured-output text into a draft.
fn parse_draft(raw: &str) -> Result<PostDraft, GenerationError> {
    serde_json::from_str(raw).map_err(|e| GenerationError::Malformed(e.to_string()))
}

/// Merge draft and image into the final result, enforcing completeness.
///
/// The model's slug suggestion is kept only if it is already canonical;
/// otherwise one is re-derived from the title.
fn finalize(draft: PostDraft, image_data: String) -> Result<GenerationResult, GenerationError> {
    if draft.title.trim().is_empty() {
        return Err(GenerationError::MissingOutput("title"));
    }
    if draft.description.trim().is_empty() {
        return Err(GenerationError::MissingOutput("description"));
    }
    if draft.content.trim().is_empty() {
        return Err(GenerationError::MissingOutput("content"));
    }
    if draft.image_prompt.trim().is_empty() {
        return Err(GenerationError::MissingOutput("image prompt"));
    }
    if image_data.is_empty() {
        return Err(GenerationError::MissingOutput("image data"));
    }

    let slug = if is_valid_slug(&draft.slug) {
        draft.slug
    } else {
        slugify(&draft.title)
    };
    if slug.is_empty() {
        return Err(GenerationError::Malformed(format!(
            "No slug could be derived from title '{}'",
            draft.title
        )));
    }

    Ok(GenerationResult {
        title: draft.title,
        slug,
        description: draft.description,
        content: draft.content,
        image_prompt: draft.image_prompt,
        image_data,
    })
}
