//! Handlers for the admin work editor (`/admin/editor`).
//!
//! Each admin has one in-memory [`EditorSession`]; the handlers load works
//! into it, route editing commands through its reducer and write it back.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Utc};
use gohte_core::blocks::{BlockKind, ContentBlocks};
use gohte_core::editor::{EditorCommand, EditorEvent, EditorSession};
use gohte_core::error::CoreError;
use gohte_core::types::DbId;
use gohte_core::work::WorkFields;
use gohte_db::repositories::WorkRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::{read_multipart, store_upload};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub event: EditorEvent,
    pub session: EditorSession,
}

type SessionResponse = Json<DataResponse<EditorSession>>;

fn session_response(session: EditorSession) -> SessionResponse {
    Json(DataResponse { data: session })
}

/// GET /api/v1/admin/editor
pub async fn get_session(State(state): State<AppState>, user: AuthUser) -> SessionResponse {
    session_response(state.editors.snapshot(user.user_id).await)
}

/// POST /api/v1/admin/editor/new
///
/// Inserts a "New Project" work right away and opens it dirty.
pub async fn new_work(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<(StatusCode, SessionResponse)> {
    let fields = WorkFields::new_project(Utc::now().year());
    let blocks = ContentBlocks::single_empty_text();
    let work = WorkRepo::create(&state.pool, &fields, &blocks.serialize()).await?;
    let draft = work.to_draft()?;

    let session = state
        .editors
        .with_session(user.user_id, |s| {
            s.open(draft, true);
            s.clone()
        })
        .await;

    tracing::info!(work_id = work.id, user_id = user.user_id, "Work created");
    Ok((StatusCode::CREATED, session_response(session)))
}

/// POST /api/v1/admin/editor/open/{id}
///
/// Unsaved edits of a previously open work are discarded.
pub async fn open_work(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<SessionResponse> {
    let work = WorkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Work", id)))?;
    let draft = work.to_draft()?;

    let session = state
        .editors
        .with_session(user.user_id, |s| {
            s.open(draft, false);
            s.clone()
        })
        .await;
    Ok(session_response(session))
}

/// POST /api/v1/admin/editor/close
pub async fn close(State(state): State<AppState>, user: AuthUser) -> SessionResponse {
    let session = state
        .editors
        .with_session(user.user_id, |s| {
            s.close();
            s.clone()
        })
        .await;
    session_response(session)
}

/// POST /api/v1/admin/editor/commands
///
/// Apply one [`EditorCommand`]. A rejected command leaves the draft unchanged.
pub async fn apply_command(
    State(state): State<AppState>,
    user: AuthUser,
    Json(command): Json<EditorCommand>,
) -> AppResult<Json<DataResponse<CommandResponse>>> {
    let (event, session) = state
        .editors
        .with_session(user.user_id, |s| s.apply(command).map(|event| (event, s.clone())))
        .await?;

    Ok(Json(DataResponse {
        data: CommandResponse { event, session },
    }))
}

/// POST /api/v1/admin/editor/save
///
/// Writes every field and the serialized blocks in one update. On failure
/// the draft stays dirty.
pub async fn save(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<SessionResponse> {
    let snapshot = state.editors.snapshot(user.user_id).await;
    let payload = snapshot.save_payload()?;

    let work = WorkRepo::update(&state.pool, payload.id, &payload.fields, &payload.content)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Work", payload.id)))?;
    let saved = work.to_draft()?;

    // Edits that arrived while the write was in flight keep the session dirty.
    let session = state
        .editors
        .with_session(user.user_id, |s| {
            if s.draft() == snapshot.draft() {
                s.mark_saved(saved);
            }
            s.clone()
        })
        .await;

    tracing::info!(work_id = work.id, user_id = user.user_id, "Work saved");
    Ok(session_response(session))
}

/// POST /api/v1/admin/editor/blocks/{block_id}/media (multipart `file`, optional `slot`)
///
/// Uploads the file and places its URL into the block. If the upload fails
/// the block is left as it was; a stored file that can no longer be placed
/// is deleted again.
pub async fn upload_block_media(
    State(state): State<AppState>,
    user: AuthUser,
    Path(block_id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<CommandResponse>>> {
    let (file, fields) = read_multipart(multipart).await?;
    let file = file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;

    let slot = match fields.get("slot").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<usize>()
                .map_err(|_| AppError::BadRequest(format!("Invalid slot '{raw}'")))?,
        ),
        None => None,
    };

    // Reject before storing anything when the target cannot take media.
    let snapshot = state.editors.snapshot(user.user_id).await;
    let draft = snapshot
        .draft()
        .ok_or_else(|| AppError::Core(CoreError::Validation("No work is open in the editor".into())))?;
    let block = draft
        .blocks
        .get(&block_id)
        .ok_or_else(|| AppError::Core(CoreError::not_found("ContentBlock", &block_id)))?;
    if block.kind == BlockKind::Text {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Block '{block_id}' is not a media block"
        ))));
    }

    let stored = store_upload(&state, &file).await?;

    let command = EditorCommand::SetMediaSlot {
        block_id,
        slot,
        url: stored.url.clone(),
    };
    let applied = state
        .editors
        .with_session(user.user_id, |s| s.apply(command).map(|event| (event, s.clone())))
        .await;

    // The draft changed while the file was being written.
    let (event, session) = match applied {
        Ok(applied) => applied,
        Err(e) => {
            if let Err(cleanup) = state.storage.delete(&stored.key).await {
                tracing::warn!(key = %stored.key, error = %cleanup, "Failed to remove orphaned upload");
            }
            return Err(e.into());
        }
    };

    Ok(Json(DataResponse {
        data: CommandResponse { event, session },
    }))
}
