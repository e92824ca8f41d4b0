//! Handlers for publication listings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gohte_core::error::CoreError;
use gohte_core::publication::PublicationInput;
use gohte_core::types::DbId;
use gohte_db::models::publication::Publication;
use gohte_db::repositories::PublicationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/publications
pub async fn list_publications(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Publication>>>> {
    let items = PublicationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/admin/publications
pub async fn admin_list_publications(
    state: State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Publication>>>> {
    list_publications(state).await
}

/// POST /api/v1/admin/publications
pub async fn create_publication(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<PublicationInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Publication>>)> {
    let input = input.normalized()?;
    let created = PublicationRepo::create(&state.pool, &input).await?;
    tracing::info!(publication_id = created.id, user_id = user.user_id, "Publication created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /api/v1/admin/publications/{id}
pub async fn update_publication(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<PublicationInput>,
) -> AppResult<Json<DataResponse<Publication>>> {
    let input = input.normalized()?;
    let updated = PublicationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Publication", id)))?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/admin/publications/{id}
pub async fn delete_publication(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PublicationRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Publication", id)));
    }
    tracing::info!(publication_id = id, user_id = user.user_id, "Publication deleted");
    Ok(StatusCode::NO_CONTENT)
}
