pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
/// /auth/session                        current user (requires auth)
///
/// /works                               gallery page (public)
/// /works/{id}                          work detail with related works (public)
/// /publications                        publication list (public)
/// /pages/{id}                          static page copy (public)
/// /layouts                             media layout catalog (public)
/// /contact                             contact form (public)
///
/// /admin/works                         admin list, delete
/// /admin/editor/...                    work editor session
/// /admin/uploads                       media upload
/// /admin/publications                  publications CRUD
/// /admin/pages/{id}                    page upsert
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .merge(public::router())
}
