// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for gallery settings, guaranteed to be within valid
//! ranges so persisted configs cannot request nonsensical values.

// =============================================================================
// Bounds
// =============================================================================

/// Page size bounds for "load more" batches.
pub mod page_bounds {
    /// Minimum number of images per batch.
    pub const MIN: usize = 1;
    /// Maximum number of images per batch.
    pub const MAX: usize = 120;
    /// Default number of images per batch.
    pub const DEFAULT: usize = 12;
}

/// Grid column bounds.
pub mod column_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 8;
    pub const DEFAULT: usize = 3;
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of images materialized per pagination step (1–120, default 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size, clamping the value to the valid range.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self(size.clamp(page_bounds::MIN, page_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Number of full or partial batches needed to show `len` images.
    #[must_use]
    pub fn batches_for(self, len: usize) -> usize {
        len.div_ceil(self.0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_bounds::DEFAULT)
    }
}

// =============================================================================
// GridColumns
// =============================================================================

/// Number of thumbnail columns in the gallery grid (1–8, default 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(usize);

impl GridColumns {
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self(columns.clamp(column_bounds::MIN, column_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(column_bounds::DEFAULT)
    }
}
