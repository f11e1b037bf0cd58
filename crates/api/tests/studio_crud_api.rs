//! Integration tests for studio CRUD: skills, projects, testimonials,
//! and site settings.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_with_cookie, get, post_json_with_cookie, put_json_with_cookie, studio_login,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn skill_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    // Create.
    let response = post_json_with_cookie(
        app.clone(),
        "/studio/skills",
        &cookie,
        serde_json::json!({ "name": "Rust", "icon": "code", "sort_order": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["icon"], "code");

    // Update the icon.
    let response = put_json_with_cookie(
        app.clone(),
        &format!("/studio/skills/{id}"),
        &cookie,
        serde_json::json!({ "icon": "terminal" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["icon"], "terminal");
    assert_eq!(json["data"]["name"], "Rust");

    // Public list sees it.
    let response = get(app.clone(), "/api/v1/skills").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Delete.
    let response = delete_with_cookie(app.clone(), &format!("/studio/skills/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/v1/skills").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_icon_identifier_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    let response = post_json_with_cookie(
        app.clone(),
        "/studio/skills",
        &cookie,
        serde_json::json!({ "name": "Rust", "icon": "sparkles" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Same for updates.
    let response = post_json_with_cookie(
        app.clone(),
        "/studio/skills",
        &cookie,
        serde_json::json!({ "name": "Rust", "icon": "code" }),
    )
    .await;
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    let response = put_json_with_cookie(
        app,
        &format!("/studio/skills/{id}"),
        &cookie,
        serde_json::json!({ "icon": "Sparkles" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_skill_name_is_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    let body = serde_json::json!({ "name": "Rust", "icon": "code" });
    let response =
        post_json_with_cookie(app.clone(), "/studio/skills", &cookie, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_with_cookie(app, "/studio/skills", &cookie, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn project_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    let response = post_json_with_cookie(
        app.clone(),
        "/studio/projects",
        &cookie,
        serde_json::json!({
            "title": "Folio Backend",
            "description": "This site.",
            "technologies": ["Rust", "PostgreSQL"],
            "repo_url": "https://example.com/folio",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["slug"], "folio-backend");
    assert_eq!(json["data"]["technologies"][1], "PostgreSQL");

    // Public read by slug.
    let response = get(app.clone(), "/api/v1/projects/folio-backend").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update leaves other fields alone.
    let response = put_json_with_cookie(
        app.clone(),
        &format!("/studio/projects/{id}"),
        &cookie,
        serde_json::json!({ "description": "Still this site." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["description"], "Still this site.");
    assert_eq!(json["data"]["title"], "Folio Backend");

    // Delete.
    let response =
        delete_with_cookie(app.clone(), &format!("/studio/projects/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/v1/projects/folio-backend").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn project_with_unknown_image_reference_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    let response = post_json_with_cookie(
        app,
        "/studio/projects",
        &cookie,
        serde_json::json!({ "title": "Ghost Image", "image_id": 9999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn testimonial_create_and_public_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    let response = post_json_with_cookie(
        app.clone(),
        "/studio/testimonials",
        &cookie,
        serde_json::json!({
            "author": "Ada",
            "role": "CTO",
            "quote": "Delivered ahead of schedule.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app, "/api/v1/testimonials").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["author"], "Ada");
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn settings_upsert_and_read_back(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    // Never saved: 204.
    let response = get(app.clone(), "/api/v1/settings/general").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // First save.
    let response = put_json_with_cookie(
        app.clone(),
        "/studio/settings/general",
        &cookie,
        serde_json::json!({ "data": { "site_title": "Folio" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second save replaces the document.
    let response = put_json_with_cookie(
        app.clone(),
        "/studio/settings/general",
        &cookie,
        serde_json::json!({ "data": { "site_title": "Folio v2" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/api/v1/settings/general").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["data"]["site_title"], "Folio v2");
    assert_eq!(json["data"]["section"], "general");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_settings_section_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    let response = get(app.clone(), "/api/v1/settings/seo").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_with_cookie(
        app,
        "/studio/settings/seo",
        &cookie,
        serde_json::json!({ "data": {} }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn settings_payload_must_be_an_object(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = studio_login(app.clone()).await;

    let response = put_json_with_cookie(
        app,
        "/studio/settings/theme",
        &cookie,
        serde_json::json!({ "data": ["not", "an", "object"] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
