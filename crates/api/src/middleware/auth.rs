//! Session extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gohte_core::error::CoreError;
use gohte_core::types::DbId;

use crate::auth::cookie::token_from_headers;
use crate::auth::jwt::{validate_token, ADMIN_ROLE};
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in admin.
///
/// Accepts `Authorization: Bearer <token>` or the `gohte_session` cookie.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Not signed in".into()))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.role != ADMIN_ROLE {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".into(),
            )));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
