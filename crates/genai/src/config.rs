//! Generation service configuration.

/// Connection settings for the hosted generation service.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Base API URL (default: the hosted service's public endpoint).
    pub api_base: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Model id used for structured text generation.
    pub text_model: String,
    /// Model id used for image generation.
    pub image_model: String,
}

/// Default base URL for the hosted generation API.
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text-generation model.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default image-generation model.
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

impl GenAiConfig {
    /// Load generation configuration from environment variables.
    ///
    /// | Env Var             | Required | Default                       |
    /// |---------------------|----------|-------------------------------|
    /// | `GENAI_API_KEY`     | **yes**  | --                            |
    /// | `GENAI_API_BASE`    | no       | hosted service public URL     |
    /// | `GENAI_TEXT_MODEL`  | no       | `gemini-2.5-flash`            |
    /// | `GENAI_IMAGE_MODEL` | no       | `gemini-2.5-flash-image`      |
    ///
    /// # Panics
    ///
    /// Panics if `GENAI_API_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("GENAI_API_KEY").expect("GENAI_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "GENAI_API_KEY must not be empty");

        let api_base =
            std::env::var("GENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let text_model =
            std::env::var("GENAI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.into());
        let image_model =
            std::env::var("GENAI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into());

        Self {
            api_base,
            api_key,
            text_model,
            image_model,
        }
    }
}
