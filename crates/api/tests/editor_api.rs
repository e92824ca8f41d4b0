//! Integration tests for the editor session endpoints.
//!
//! Drafts are placed into the in-memory store directly, so these tests run
//! without a database. Create and save are covered by the ignored tests at
//! the bottom.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, json_request, lazy_pool, multipart_body, send, TestApp};
use gohte_core::blocks::ContentBlocks;
use gohte_core::work::{WorkDraft, WorkFields};
use serde_json::{json, Value};
use sqlx::PgPool;

const USER: i64 = 1;

async fn open_draft(app: &TestApp, id: i64) {
    let draft = WorkDraft {
        id,
        fields: WorkFields::new_project(2024),
        blocks: ContentBlocks::single_empty_text(),
    };
    app.editors
        .with_session(USER, |s| s.open(draft, false))
        .await;
}

async fn command(app: &TestApp, token: &str, body: Value) -> (StatusCode, Value) {
    let response = json_request(
        app,
        Method::POST,
        "/api/v1/admin/editor/commands",
        body,
        Some(token),
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn editor_requires_session() {
    let app = common::build_test_app(lazy_pool());
    let response = json_request(
        &app,
        Method::POST,
        "/api/v1/admin/editor/commands",
        json!({ "op": "select_tab", "tab": "content" }),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn command_without_open_work_is_rejected() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);

    let (status, json) = command(&app, &token, json!({ "op": "select_tab", "tab": "content" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn insert_edit_and_move_blocks() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);
    open_draft(&app, 7).await;

    let (status, json) = command(
        &app,
        &token,
        json!({ "op": "insert", "block": { "kind": "media", "layout": "layout3" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["event"]["event"], "inserted");
    let media_id = json["data"]["event"]["block_id"].as_str().unwrap().to_string();

    // Appended after the initial text block.
    let blocks = &json["data"]["session"]["draft"]["blocks"];
    assert_eq!(blocks.as_array().unwrap().len(), 2);
    assert_eq!(blocks[1]["type"], "image");
    assert_eq!(blocks[1]["layout"], "layout3");
    assert_eq!(json["data"]["session"]["dirty"], true);

    let (status, json) = command(
        &app,
        &token,
        json!({ "op": "move", "block_id": media_id, "direction": "down" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["event"]["moved"], false);

    let (status, json) = command(
        &app,
        &token,
        json!({ "op": "move", "block_id": media_id, "direction": "up" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["event"]["moved"], true);
    assert_eq!(json["data"]["session"]["draft"]["blocks"][0]["id"], media_id);
}

#[tokio::test]
async fn removing_the_last_text_block_conflicts() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);
    open_draft(&app, 7).await;

    let text_id = app.editors.snapshot(USER).await.draft().unwrap().blocks.as_slice()[0]
        .id
        .clone();
    let (status, _) = command(
        &app,
        &token,
        json!({ "op": "update_text", "block_id": text_id, "html": "<p>Site plan</p>" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let session = app.editors.snapshot(USER).await;

    let (status, json) = command(&app, &token, json!({ "op": "remove", "block_id": text_id })).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(app.editors.snapshot(USER).await, session);
}

#[tokio::test]
async fn update_fields_changes_draft() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);
    open_draft(&app, 7).await;

    let (status, json) = command(
        &app,
        &token,
        json!({ "op": "update_fields", "fields": { "name": "Lake House", "location": "Bandung" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["event"]["event"], "fields_updated");
    assert_eq!(json["data"]["session"]["draft"]["fields"]["name"], "Lake House");
}

#[tokio::test]
async fn block_media_upload_fills_slot() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);
    open_draft(&app, 7).await;

    let (_, json) = command(
        &app,
        &token,
        json!({ "op": "insert", "block": { "kind": "media", "layout": "layout3" } }),
    )
    .await;
    let media_id = json["data"]["event"]["block_id"].as_str().unwrap().to_string();

    let (content_type, body) = multipart_body("plan.PNG", "image/png", b"\x89PNG fake", &[("slot", "0")]);
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/v1/admin/editor/blocks/{media_id}/media"))
        .header(header::CONTENT_TYPE, content_type)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let url = json["data"]["session"]["draft"]["blocks"][1]["content"]
        .as_str()
        .unwrap();
    assert!(url.starts_with("/uploads/public_uploads/"), "{url}");
    assert!(url.ends_with(".png"), "{url}");

    let stored = app
        .config
        .upload_dir
        .join(url.trim_start_matches("/uploads/"));
    assert_eq!(std::fs::read(stored).unwrap(), b"\x89PNG fake");
}

#[tokio::test]
async fn block_media_upload_to_unknown_block_stores_nothing() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);
    open_draft(&app, 7).await;

    let (content_type, body) = multipart_body("plan.png", "image/png", b"png", &[]);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/editor/blocks/missing/media")
        .header(header::CONTENT_TYPE, content_type)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!app.config.upload_dir.join("public_uploads").exists());
}

#[tokio::test]
async fn block_media_upload_to_text_block_stores_nothing() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);
    open_draft(&app, 7).await;

    let text_id = app.editors.snapshot(USER).await.draft().unwrap().blocks.as_slice()[0]
        .id
        .clone();

    let (content_type, body) = multipart_body("plan.png", "image/png", b"png", &[]);
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/v1/admin/editor/blocks/{text_id}/media"))
        .header(header::CONTENT_TYPE, content_type)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(!app.config.upload_dir.join("public_uploads").exists());
    assert!(!app.editors.snapshot(USER).await.is_dirty());
}

#[tokio::test]
async fn failed_save_keeps_draft_dirty() {
    let app = common::build_test_app(lazy_pool());
    let token = app.token_for(USER);
    open_draft(&app, 7).await;

    let (status, _) = command(
        &app,
        &token,
        json!({ "op": "update_fields", "fields": { "name": "Lake House" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let before = app.editors.snapshot(USER).await;
    assert!(before.is_dirty());

    // The lazy pool has no database behind it, so the write fails.
    let response = json_request(
        &app,
        Method::POST,
        "/api/v1/admin/editor/save",
        json!({}),
        Some(&token),
    )
    .await;

    assert!(response.status().is_server_error(), "{}", response.status());
    let after = app.editors.snapshot(USER).await;
    assert!(after.is_dirty());
    assert_eq!(after, before);
}

// ---------------------------------------------------------------------------
// Database-backed flows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn new_work_is_saved_and_listed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = app.token_for(USER);

    let response = json_request(&app, Method::POST, "/api/v1/admin/editor/new", json!({}), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["draft"]["fields"]["name"], "New Project");
    assert_eq!(json["data"]["dirty"], true);

    command(
        &app,
        &token,
        json!({ "op": "update_fields", "fields": { "name": "Lake House", "location": "Bandung" } }),
    )
    .await;

    let response = json_request(&app, Method::POST, "/api/v1/admin/editor/save", json!({}), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["dirty"], false);

    let response = common::get(&app, "/api/v1/works?search=bandung").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_items"], 1);
    assert_eq!(json["data"]["items"][0]["name"], "Lake House");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleting_open_work_closes_editor(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = app.token_for(USER);

    let response = json_request(&app, Method::POST, "/api/v1/admin/editor/new", json!({}), Some(&token)).await;
    let id = body_json(response).await["data"]["draft"]["id"].as_i64().unwrap();

    let response = json_request(
        &app,
        Method::DELETE,
        &format!("/api/v1/admin/works/{id}"),
        json!({}),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = json_request(
        &app,
        Method::DELETE,
        &format!("/api/v1/admin/works/{id}?confirm=true"),
        json!({}),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.editors.snapshot(USER).await.draft().is_none());

    let response = common::get(&app, &format!("/api/v1/works/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
