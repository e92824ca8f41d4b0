//! Media layout catalog.

use axum::extract::Query;
use axum::Json;
use gohte_core::layout::{self, LayoutDescriptor, MediaKind, LAYOUTS};
use serde::Deserialize;

use crate::response::DataResponse;

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Only layouts for this media kind (`image` or `video`).
    pub media: Option<MediaKind>,
}

/// GET /api/v1/layouts?media=
///
/// The editor offers image layouts when inserting an image block and the
/// video layout for a video block.
pub async fn list_layouts(
    Query(params): Query<LayoutQuery>,
) -> Json<DataResponse<Vec<&'static LayoutDescriptor>>> {
    let layouts = match params.media {
        Some(kind) => layout::for_media(kind).collect(),
        None => LAYOUTS.iter().collect(),
    };
    Json(DataResponse { data: layouts })
}
