use std::sync::Arc;

use folio_genai::client::GenAiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Both client handles are constructed once in `main` and passed in here;
/// nothing in the workspace holds ambient global state. This is cheaply
/// cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client handle for the hosted generation service.
    pub genai: Arc<GenAiClient>,
}
