//! REST client for the hosted generation endpoints.
//!
//! Wraps the generation API's `generateContent` calls (schema-constrained
//! text and inline-image responses) using [`reqwest`].

use serde::Deserialize;

use crate::config::GenAiConfig;
use crate::error::GenerationError;

/// HTTP client handle for the generation service.
///
/// Created once at process start and shared; holds a pooled
/// [`reqwest::Client`] internally.
pub struct GenAiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

// ---------------------------------------------------------------------------
// Response payload types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

/// Inline binary payload (base64) inside a response part.
#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    #[allow(dead_code)]
    mime_type: String,
    data: String,
}

impl GenAiClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GenAiConfig) -> Self {
        Self { client, config }
    }

    /// The configured connection settings.
    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    /// Submit a prompt to the text model, constraining the response to the
    /// given JSON schema.
    ///
    /// Returns the raw JSON text of the first candidate. Fails with
    /// [`GenerationError::MissingOutput`] if the response carries no text
    /// part.
    pub async fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });

        let response = self
            .client
            .post(self.model_url(&self.config.text_model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let payload: GenerateContentResponse = Self::parse_response(response).await?;
        extract_text(payload).ok_or(GenerationError::MissingOutput("structured text"))
    }

    /// Submit a prompt to the image model and return the base64 image data.
    ///
    /// Fails with [`GenerationError::MissingOutput`] if no inline image part
    /// is present.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
            },
        });

        let response = self
            .client
            .post(self.model_url(&self.config.image_model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let payload: GenerateContentResponse = Self::parse_response(response).await?;
        extract_inline_data(payload).ok_or(GenerationError::MissingOutput("image data"))
    }

    // ---- private helpers ----

    /// Full `generateContent` URL for a model.
    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.api_base, model)
    }

    /// Parse a successful JSON response body into the expected type, or
    /// surface the status and body text on a non-2xx response.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GenerationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// First text part of the first candidate, if any.
fn extract_text(payload: GenerateContentResponse) -> Option<String> {
    payload
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|p| p.text)
}

/// First inline (base64) data part of the first candidate, if any.
fn extract_inline_data(payload: GenerateContentResponse) -> Option<String> {
    payload
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|p| p.inline_data.map(|d| d.data))
}
