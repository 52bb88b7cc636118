// SPDX-License-Identifier: MPL-2.0
//! Incremental "load more" cursor over the active image set.
//!
//! The cursor owns only the count of images already rendered. The active set
//! is passed in on every call and the owner must [`reset`](PaginationCursor::reset)
//! the cursor whenever that set changes.

use super::renderer::GalleryRenderer;
use crate::domain::PageSize;
use crate::portfolio::Image;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationCursor {
    rendered_count: usize,
    page_size: PageSize,
}

impl PaginationCursor {
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            rendered_count: 0,
            page_size,
        }
    }

    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered_count
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Rewinds to the start and tells the renderer to drop what it shows.
    pub fn reset(&mut self, renderer: &mut impl GalleryRenderer) {
        self.rendered_count = 0;
        renderer.clear_gallery();
    }

    /// Returns the next batch of `images` and moves past it.
    ///
    /// Once everything is rendered this returns an empty slice and leaves the
    /// count untouched.
    pub fn advance<'a>(&mut self, images: &'a [Image]) -> &'a [Image] {
        let start = self.rendered_count;
        if start >= images.len() {
            return &[];
        }
        let end = (start + self.page_size.value()).min(images.len());
        self.rendered_count = end;
        &images[start..end]
    }

    #[must_use]
    pub fn has_more(&self, images: &[Image]) -> bool {
        self.rendered_count < images.len()
    }
}
