//! Handlers for the public gallery and the admin work list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gohte_core::blocks::ContentBlocks;
use gohte_core::carousel::{Carousel, DESKTOP_ITEMS_PER_SLIDE, RELATED_WORKS_LIMIT};
use gohte_core::error::CoreError;
use gohte_core::gallery::{self, GalleryEntry, PageSlice, WorkCategory, GALLERY_PAGE_SIZE};
use gohte_core::render::render_blocks;
use gohte_core::types::DbId;
use gohte_db::models::work::Work;
use gohte_db::repositories::WorkRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: WorkCategory,
    /// 1-indexed.
    pub page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: WorkCategory,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Everything the public work page needs.
#[derive(Debug, Serialize)]
pub struct WorkDetail {
    pub work: Work,
    pub blocks: ContentBlocks,
    /// Read-only rendering of `blocks`.
    pub html: String,
    pub related: Vec<Work>,
    /// Number of slides in the related-works carousel on wide screens.
    pub related_pages: usize,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/works?search=&category=&page=
///
/// Gallery page: the term matches name or location; twelve works per page.
pub async fn list_works(
    State(state): State<AppState>,
    Query(params): Query<GalleryQuery>,
) -> AppResult<Json<DataResponse<PageSlice<Work>>>> {
    let works = WorkRepo::list(&state.pool).await?;
    let matching: Vec<Work> = gallery::filter_gallery(&works, params.search.trim(), params.category)
        .into_iter()
        .cloned()
        .collect();

    let page = gallery::paginate(matching, params.page.unwrap_or(1), GALLERY_PAGE_SIZE);
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/works/{id}
pub async fn get_work(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WorkDetail>>> {
    let work = WorkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Work", id)))?;

    let related = WorkRepo::list_related(
        &state.pool,
        GalleryEntry::work_type(&work),
        work.id,
        RELATED_WORKS_LIMIT,
    )
    .await?;

    let blocks = work.blocks();
    let html = render_blocks(&blocks);
    let related_pages = Carousel::new(related.len(), DESKTOP_ITEMS_PER_SLIDE).page_count();

    Ok(Json(DataResponse {
        data: WorkDetail {
            work,
            blocks,
            html,
            related,
            related_pages,
        },
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/works?search=&category=
///
/// The admin list matches the term against the name only.
pub async fn admin_list_works(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<AdminListQuery>,
) -> AppResult<Json<DataResponse<Vec<Work>>>> {
    let works = WorkRepo::list(&state.pool).await?;
    let matching = gallery::filter_admin(&works, params.search.trim(), params.category)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data: matching }))
}

/// DELETE /api/v1/admin/works/{id}?confirm=true
///
/// Any editor session holding the work is closed.
pub async fn delete_work(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<DeleteQuery>,
) -> AppResult<StatusCode> {
    if !params.confirm {
        return Err(AppError::BadRequest(
            "Deleting a work must be confirmed with confirm=true".into(),
        ));
    }

    if !WorkRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Work", id)));
    }

    let closed = state.editors.close_work(id).await;
    tracing::info!(work_id = id, user_id = user.user_id, closed, "Work deleted");
    Ok(StatusCode::NO_CONTENT)
}
