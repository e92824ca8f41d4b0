//! Handlers for the `/auth` resource (login, refresh, logout, session).

use axum::extract::State;
use axum::http::header::{SET_COOKIE, USER_AGENT};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use gohte_core::error::CoreError;
use gohte_core::types::DbId;
use gohte_db::models::session::CreateSession;
use gohte_db::models::user::{User, UserResponse};
use gohte_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token, ADMIN_ROLE};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Consecutive failed login attempts before the account is locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Lock duration after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by login and refresh. The access token is also set as the
/// session cookie.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;

        if user.failed_login_count + 1 >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
            tracing::warn!(user_id = user.id, "Account locked after repeated failed logins");
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    tracing::info!(user_id = user.id, "Admin signed in");

    issue_session(&state, &user, &headers, None).await
}

/// POST /api/v1/auth/refresh
///
/// Rotates the refresh token: the presented one is revoked and can never be
/// used again.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    issue_session(&state, &user, &headers, Some(session.id)).await
}

/// POST /api/v1/auth/logout
///
/// Revokes every refresh token of the user, drops the editor session and
/// clears the session cookie.
///
/// Access tokens are stateless: one already handed out stays valid as a
/// Bearer token until it expires (`JWT_ACCESS_EXPIRY_MINS`, default 60).
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    state.editors.remove(auth_user.user_id).await;
    tracing::info!(user_id = auth_user.user_id, revoked, "Admin signed out");

    Ok((
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie())],
    ))
}

/// GET /api/v1/auth/session
pub async fn session(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sign tokens, persist the refresh session and attach the session cookie.
///
/// `replacing` is the refresh session being rotated out, if any.
async fn issue_session(
    state: &AppState,
    user: &User,
    headers: &HeaderMap,
    replacing: Option<DbId>,
) -> AppResult<impl IntoResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, ADMIN_ROLE, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let session = CreateSession {
        user_id: user.id,
        refresh_token_hash: refresh_hash,
        expires_at: Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days),
        user_agent,
    };
    match replacing {
        Some(old_id) => {
            SessionRepo::rotate(&state.pool, old_id, &session)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid or expired refresh token".into(),
                    ))
                })?;
        }
        None => {
            SessionRepo::create(&state.pool, &session).await?;
        }
    }

    let expires_in = jwt.access_token_expiry_mins * 60;
    let cookie = session_cookie(&access_token, expires_in);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(AuthResponse {
            access_token,
            refresh_token: refresh_plaintext,
            expires_in,
            user: UserResponse::from(user),
        }),
    ))
}
