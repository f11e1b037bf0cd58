#![allow(dead_code)] // each test binary uses a different subset of helpers

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use folio_api::config::{ServerConfig, StudioConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_genai::client::GenAiClient;
use folio_genai::config::GenAiConfig;

/// Password accepted by the test studio config.
pub const TEST_STUDIO_PASSWORD: &str = "test-studio-password";

/// Boundary used by [`png_multipart_body`].
pub const MULTIPART_BOUNDARY: &str = "folio-test-boundary";

/// A valid 67-byte 1x1 RGBA PNG.
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1 x 1
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89,
    0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01,
    0x0D, 0x0A, 0x2D, 0xB4,
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, // IEND
    0xAE, 0x42, 0x60, 0x82,
];

/// Build a test `ServerConfig` with safe defaults and the given upload
/// directory.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir,
        studio: StudioConfig {
            password: TEST_STUDIO_PASSWORD.to_string(),
            session_secret: "test-session-secret".to_string(),
            session_expiry_hours: 12,
        },
    }
}

/// Generation config pointing at a closed local port. Tests never reach
/// the generation service; requests against this config fail fast.
pub fn test_genai_config() -> GenAiConfig {
    GenAiConfig {
        api_base: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        text_model: "test-text-model".to_string(),
        image_model: "test-image-model".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a throwaway upload directory.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, session gate) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let upload_dir =
        std::env::temp_dir().join(format!("folio-test-{}", uuid::Uuid::new_v4()));
    build_test_app_with_config(pool, test_config(upload_dir))
}

/// Build the application router with an explicit config (used by the
/// upload and session-expiry tests).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        genai: Arc::new(GenAiClient::new(test_genai_config())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request through the router.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// GET a path.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET a path with a `Cookie` header.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a JSON body with a `Cookie` header.
pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// PUT a JSON body with a `Cookie` header.
pub async fn put_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// DELETE a path with a `Cookie` header.
pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a multipart body (see [`png_multipart_body`]) with a `Cookie`
/// header.
pub async fn post_multipart_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: Vec<u8>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Log in to the studio and return the `Cookie` header value for
/// subsequent requests (`studio_session=<token>`).
pub async fn studio_login(app: Router) -> String {
    let response = post_json(
        app,
        "/studio/login",
        serde_json::json!({ "password": TEST_STUDIO_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap();

    // "studio_session=<token>; Path=/; ..." -> "studio_session=<token>"
    set_cookie.split(';').next().unwrap().to_string()
}

/// Build a multipart upload body with a file part plus description and
/// hint fields.
pub fn png_multipart_body(
    file_name: &str,
    bytes: &[u8],
    description: &str,
    hint: &str,
) -> Vec<u8> {
    let b = MULTIPART_BOUNDARY;
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(
        format!("\r\n--{b}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\n{description}")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!("\r\n--{b}\r\nContent-Disposition: form-data; name=\"hint\"\r\n\r\n{hint}")
            .as_bytes(),
    );
    body.extend_from_slice(format!("\r\n--{b}--\r\n").as_bytes());
    body
}
