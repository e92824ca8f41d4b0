//! Handlers for editable static page copy.

use axum::extract::{Path, State};
use axum::Json;
use gohte_core::error::CoreError;
use gohte_db::models::page::{Page, UpsertPage};
use gohte_db::repositories::PageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Page slugs are lowercase ASCII words joined by hyphens.
fn validate_slug(id: &str) -> Result<(), CoreError> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid {
        return Err(CoreError::Validation(format!("Invalid page id '{id}'")));
    }
    Ok(())
}

/// GET /api/v1/pages/{id}
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Page>>> {
    let page = PageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Page", &id)))?;
    Ok(Json(DataResponse { data: page }))
}

/// PUT /api/v1/admin/pages/{id}
pub async fn upsert_page(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<UpsertPage>,
) -> AppResult<Json<DataResponse<Page>>> {
    validate_slug(&id)?;
    let page = PageRepo::upsert(&state.pool, &id, &input).await?;
    tracing::info!(page_id = %id, user_id = user.user_id, "Page content updated");
    Ok(Json(DataResponse { data: page }))
}
