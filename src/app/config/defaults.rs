// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Gallery bounds live next to the newtypes that enforce them
//! ([`crate::domain::newtypes`]) and are re-exported here so the config
//! layer has a single place to look.

use crate::domain::newtypes::{column_bounds, page_bounds};

// ==========================================================================
// Data Source Defaults
// ==========================================================================

/// Default portfolio document, relative to the working directory.
pub const DEFAULT_DATA_SOURCE: &str = crate::portfolio::loader::DEFAULT_DATA_FILE;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of images per "load more" batch.
pub const DEFAULT_PAGE_SIZE: usize = page_bounds::DEFAULT;

pub const MIN_PAGE_SIZE: usize = page_bounds::MIN;

pub const MAX_PAGE_SIZE: usize = page_bounds::MAX;

/// Default number of thumbnail columns.
pub const DEFAULT_COLUMNS: usize = column_bounds::DEFAULT;

pub const MIN_COLUMNS: usize = column_bounds::MIN;

pub const MAX_COLUMNS: usize = column_bounds::MAX;

// ==========================================================================
// Thumbnail Cache
// ==========================================================================

/// Number of decoded remote thumbnails kept in memory.
pub const THUMBNAIL_CACHE_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAGE_SIZE > 0);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

    assert!(MIN_COLUMNS > 0);
    assert!(DEFAULT_COLUMNS >= MIN_COLUMNS);
    assert!(DEFAULT_COLUMNS <= MAX_COLUMNS);

    assert!(THUMBNAIL_CACHE_CAPACITY > 0);
};
