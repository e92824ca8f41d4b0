//! Media upload handling shared by the upload endpoint and the editor.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gohte_core::error::CoreError;
use gohte_core::upload::{storage_key, validate_upload, MAX_UPLOAD_BYTES};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::StorageError;

/// Request body limit for upload routes: the file plus multipart overhead.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

/// Name collisions within the same millisecond are retried with the next one.
const MAX_KEY_ATTEMPTS: i64 = 5;

/// A file part of a multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Where a stored upload landed.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Split a multipart body into its `file` part and the remaining text fields.
pub async fn read_multipart(
    mut multipart: Multipart,
) -> AppResult<(Option<UploadedFile>, HashMap<String, String>)> {
    let mut file = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            file = Some(UploadedFile {
                file_name,
                content_type,
                bytes,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            fields.insert(name, value);
        }
    }

    Ok((file, fields))
}

/// Validate and store an uploaded image.
pub async fn store_upload(state: &AppState, file: &UploadedFile) -> AppResult<StoredUpload> {
    validate_upload(&file.content_type, file.bytes.len()).map_err(CoreError::from)?;

    let now = Utc::now().timestamp_millis();
    for attempt in 0..MAX_KEY_ATTEMPTS {
        let key = storage_key(&file.file_name, now + attempt);
        match state.storage.put(&key, &file.bytes).await {
            Ok(url) => {
                tracing::info!(key, size = file.bytes.len(), "Media uploaded");
                return Ok(StoredUpload { key, url });
            }
            Err(StorageError::AlreadyExists(_)) => continue,
            Err(e) => return Err(AppError::InternalError(format!("Failed to upload image: {e}"))),
        }
    }

    Err(AppError::InternalError(
        "Failed to upload image: no free storage key".into(),
    ))
}

/// POST /api/v1/admin/uploads (multipart `file`)
pub async fn upload(
    State(state): State<AppState>,
    _user: AuthUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    let (file, _) = read_multipart(multipart).await?;
    let file = file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;

    let StoredUpload { url, .. } = store_upload(&state, &file).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse { url },
        }),
    ))
}
