//! Error type for the generation service layer.

/// Errors from the generation endpoints or from interpreting their output.
///
/// Any variant aborts the whole generation operation; there is no retry
/// or partial-failure recovery.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Generation endpoint error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response that did not contain the expected output.
    #[error("Generation response missing {0}")]
    MissingOutput(&'static str),

    /// Structured output that could not be interpreted.
    #[error("Malformed generation response: {0}")]
    Malformed(String),
}
