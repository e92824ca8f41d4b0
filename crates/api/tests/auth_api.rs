//! Integration tests for login, refresh, logout and the first-start admin.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::{Method, StatusCode};
use common::{body_json, json_request, lazy_pool, post_json};
use gohte_api::auth::password::hash_password;
use gohte_api::bootstrap::ensure_admin;
use gohte_api::config::AdminBootstrap;
use gohte_db::models::user::CreateUser;
use gohte_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

const EMAIL: &str = "admin@gohte.test";
const PASSWORD: &str = "correct horse battery";

async fn seed_admin(pool: &PgPool) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: EMAIL.to_string(),
            password_hash: hash_password(PASSWORD).unwrap(),
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn session_without_token_is_unauthorized() {
    let app = common::build_test_app(lazy_pool());
    let response = common::get(&app, "/api/v1/auth/session").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn login_sets_cookie_and_returns_tokens(pool: PgPool) {
    let user_id = seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        json!({ "email": "ADMIN@gohte.test", "password": PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("gohte_session="));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], user_id);
    assert_eq!(json["expires_in"], 3600);

    let token = json["access_token"].as_str().unwrap();
    let response = json_request(&app, Method::GET, "/api/v1/auth/session", json!(null), Some(token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["email"], EMAIL);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn wrong_password_is_rejected_and_locks_after_five(pool: PgPool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let response = post_json(
            &app,
            "/api/v1/auth/login",
            json!({ "email": EMAIL, "password": "wrong password" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        json!({ "email": EMAIL, "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn refresh_rotates_token(pool: PgPool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        json!({ "email": EMAIL, "password": PASSWORD }),
    )
    .await;
    let refresh_token = body_json(response).await["refresh_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = post_json(&app, "/api/v1/auth/refresh", json!({ "refresh_token": refresh_token })).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The old token was revoked by the rotation.
    let response = post_json(&app, "/api/v1/auth/refresh", json!({ "refresh_token": refresh_token })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn logout_clears_cookie(pool: PgPool) {
    let user_id = seed_admin(&pool).await;
    let app = common::build_test_app(pool);
    let token = app.token_for(user_id);

    let response = json_request(&app, Method::POST, "/api/v1/auth/logout", json!({}), Some(&token)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn bootstrap_creates_admin_only_once(pool: PgPool) {
    let bootstrap = AdminBootstrap {
        email: EMAIL.to_string(),
        password: PASSWORD.to_string(),
    };

    assert!(ensure_admin(&pool, Some(&bootstrap)).await.unwrap());
    assert!(!ensure_admin(&pool, Some(&bootstrap)).await.unwrap());
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}
