//! Media layout catalog.
//!
//! Layout ids are persisted inside every media block's `layout` field, so the
//! ids in [`LAYOUTS`] are part of the stored content format. Renaming or
//! removing one breaks existing works.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Kind of media a layout presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A fixed presentation template for image/video blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Number of media slots the layout shows side by side.
    pub columns: usize,
    pub container_class: &'static str,
    pub media_class: &'static str,
    pub media_kind: MediaKind,
    /// Per-column wrapper classes. Empty for single-column layouts.
    pub column_classes: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Layout used when a block references an id that is not in the catalog.
pub const DEFAULT_LAYOUT_ID: &str = "layout1";

/// The complete, build-time layout catalog.
pub const LAYOUTS: &[LayoutDescriptor] = &[
    LayoutDescriptor {
        id: "layout1",
        name: "Full Height",
        description: "Single image with 100vh height",
        columns: 1,
        container_class: "w-full h-screen min-h-[500px] max-h-[800px] overflow-hidden",
        media_class: "w-full h-full object-cover",
        media_kind: MediaKind::Image,
        column_classes: &[],
    },
    LayoutDescriptor {
        id: "layout2",
        name: "Auto Height",
        description: "Single image with auto height",
        columns: 1,
        container_class: "w-full aspect-[16/9] max-h-[70vh] overflow-hidden",
        media_class: "w-full h-full object-cover",
        media_kind: MediaKind::Image,
        column_classes: &[],
    },
    LayoutDescriptor {
        id: "layout3",
        name: "2 Columns (60/40) Full Height",
        description: "60/40 split with 100vh height",
        columns: 2,
        container_class: "w-full h-screen min-h-[500px] max-h-screen flex gap-4",
        media_class: "w-full h-full object-cover",
        media_kind: MediaKind::Image,
        column_classes: &["w-[60%] h-full", "w-[40%] h-[80%]"],
    },
    LayoutDescriptor {
        id: "layout4",
        name: "2 Columns (40/60) Medium Height",
        description: "40/60 split with 70% height",
        columns: 2,
        container_class: "w-full h-screen min-h-[600px] flex gap-4",
        media_class: "w-full h-full object-cover",
        media_kind: MediaKind::Image,
        column_classes: &["w-[40%] h-full", "w-[60%] h-full mt-[10vh]"],
    },
    LayoutDescriptor {
        id: "layout5",
        name: "2 Columns (60/40) Medium Height",
        description: "60/40 split with 70% height",
        columns: 2,
        container_class: "w-full h-screen min-h-[600px] flex gap-4",
        media_class: "w-full h-full object-cover",
        media_kind: MediaKind::Image,
        column_classes: &["w-[60%] h-full mt-[10vh]", "w-[40%] h-full"],
    },
    LayoutDescriptor {
        id: "layout6",
        name: "Video Block",
        description: "Embed a video",
        columns: 1,
        container_class: "w-full aspect-video max-h-[70vh] bg-black overflow-hidden",
        media_class: "w-full h-full object-contain",
        media_kind: MediaKind::Video,
        column_classes: &[],
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Find a layout by id.
pub fn find(id: &str) -> Option<&'static LayoutDescriptor> {
    LAYOUTS.iter().find(|l| l.id == id)
}

/// Find a layout by id, falling back to [`DEFAULT_LAYOUT_ID`] for rendering.
pub fn resolve(id: Option<&str>) -> &'static LayoutDescriptor {
    id.and_then(find).unwrap_or(&LAYOUTS[0])
}

/// All layouts presenting the given media kind, in catalog order.
pub fn for_media(kind: MediaKind) -> impl Iterator<Item = &'static LayoutDescriptor> {
    LAYOUTS.iter().filter(move |l| l.media_kind == kind)
}
