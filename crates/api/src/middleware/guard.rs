//! Route guard for page requests.
//!
//! Runs before every request. Only `/admin`, `/admin/*` and `/auth/login`
//! are ever redirected; API and asset paths always pass through.

use axum::extract::{Query, Request, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use gohte_core::guard::{decide, GuardDecision, ADMIN_PATH};
use serde::Deserialize;

use crate::auth::cookie::token_from_headers;
use crate::auth::jwt::validate_token;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct GuardParams {
    redirect: Option<String>,
}

pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let redirect = Query::<GuardParams>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(params)| params.redirect);

    let has_session = token_from_headers(request.headers())
        .is_some_and(|token| validate_token(token, &state.config.jwt).is_ok());

    match decide(request.uri().path(), redirect.as_deref(), has_session) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(path = request.uri().path(), %target, "Route guard redirect");
            let location = HeaderValue::try_from(target.as_str()).unwrap_or_else(|_| {
                tracing::warn!(%target, "Unusable redirect target, sending to admin root");
                HeaderValue::from_static(ADMIN_PATH)
            });
            (StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response()
        }
    }
}
