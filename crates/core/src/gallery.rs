//! Work gallery search, category filtering and pagination.
//!
//! Everything here runs over an already-fetched list; there is no
//! server-side paging.

use serde::{Deserialize, Serialize};

use crate::work::WorkType;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Works per gallery page.
pub const GALLERY_PAGE_SIZE: usize = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Category selector of the gallery and admin list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkCategory {
    #[default]
    All,
    Residential,
    Commercial,
}

impl WorkCategory {
    pub fn matches(self, work_type: WorkType) -> bool {
        match self {
            Self::All => true,
            Self::Residential => work_type == WorkType::Residential,
            Self::Commercial => work_type == WorkType::Commercial,
        }
    }
}

/// Anything that can appear in the gallery.
pub trait GalleryEntry {
    fn name(&self) -> &str;
    fn location(&self) -> &str;
    fn work_type(&self) -> WorkType;
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 1-indexed page number actually served.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Public gallery filter: the term matches name OR location,
/// case-insensitively, and the category must match.
pub fn filter_gallery<'a, T: GalleryEntry>(
    items: &'a [T],
    term: &str,
    category: WorkCategory,
) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|w| contains_ci(w.name(), &needle) || contains_ci(w.location(), &needle))
        .filter(|w| category.matches(w.work_type()))
        .collect()
}

/// Admin work list filter: the term matches the name only.
pub fn filter_admin<'a, T: GalleryEntry>(
    items: &'a [T],
    term: &str,
    category: WorkCategory,
) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|w| contains_ci(w.name(), &needle))
        .filter(|w| category.matches(w.work_type()))
        .collect()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Number of pages for `total` items.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

/// Slice out 1-indexed `page`. Page 0 is treated as page 1; pages past the end
/// are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> PageSlice<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let start = (page - 1).saturating_mul(per_page);

    let items = items.into_iter().skip(start).take(per_page).collect();

    PageSlice {
        items,
        page,
        per_page,
        total_items,
        total_pages: page_count(total_items, per_page),
    }
}
