//! The `gohte_session` cookie.
//!
//! Holds the access token so page requests (which carry no `Authorization`
//! header) can be checked by the route guard.

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;

pub const SESSION_COOKIE: &str = "gohte_session";

/// `Set-Cookie` value storing `token` for `max_age_secs`.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Value of a named cookie in the request's `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Access token from `Authorization: Bearer` or, failing that, the session cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .or_else(|| read_cookie(headers, SESSION_COOKIE))
}
