//! Index arithmetic for the related-works carousel on the work page.

use serde::Serialize;

/// Maximum number of related works shown under a work.
pub const RELATED_WORKS_LIMIT: i64 = 6;

/// Related works per slide on wide screens.
pub const DESKTOP_ITEMS_PER_SLIDE: usize = 2;

/// Manually indexed carousel over `len` items shown `per_slide` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    per_slide: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize, per_slide: usize) -> Self {
        Self {
            len,
            per_slide: per_slide.max(1),
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// `ceil(len / per_slide)`; zero for an empty carousel.
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.per_slide)
    }

    /// Advance one slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        let pages = self.page_count();
        if pages > 0 {
            self.current = (self.current + 1) % pages;
        }
    }

    /// Go back one slide, wrapping to the last before the first.
    pub fn prev(&mut self) {
        let pages = self.page_count();
        if pages > 0 {
            self.current = (self.current + pages - 1) % pages;
        }
    }
}
