use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields except the studio secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Studio authentication configuration (password, session signing).
    pub studio: StudioConfig,
}

/// Studio authentication configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// The studio password. Compared digest-to-digest at login.
    pub password: String,
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub session_secret: String,
    /// Session token lifetime in hours (default: 12).
    pub session_expiry_hours: i64,
}

/// Default session lifetime in hours.
const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 12;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `public/uploads`           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".into()));

        let studio = StudioConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            studio,
        }
    }
}

impl StudioConfig {
    /// Load studio configuration from environment variables.
    ///
    /// | Env Var                       | Required | Default |
    /// |-------------------------------|----------|---------|
    /// | `STUDIO_PASSWORD`             | **yes**  | --      |
    /// | `STUDIO_SESSION_SECRET`       | **yes**  | --      |
    /// | `STUDIO_SESSION_EXPIRY_HOURS` | no       | `12`    |
    ///
    /// # Panics
    ///
    /// Panics if either secret is not set or is empty.
    pub fn from_env() -> Self {
        let password = std::env::var("STUDIO_PASSWORD")
            .expect("STUDIO_PASSWORD must be set in the environment");
        assert!(!password.is_empty(), "STUDIO_PASSWORD must not be empty");

        let session_secret = std::env::var("STUDIO_SESSION_SECRET")
            .expect("STUDIO_SESSION_SECRET must be set in the environment");
        assert!(
            !session_secret.is_empty(),
            "STUDIO_SESSION_SECRET must not be empty"
        );

        let session_expiry_hours: i64 = std::env::var("STUDIO_SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
            .parse()
            .expect("STUDIO_SESSION_EXPIRY_HOURS must be a valid i64");

        Self {
            password,
            session_secret,
            session_expiry_hours,
        }
    }
}
