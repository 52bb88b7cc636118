// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of remote thumbnails.
//!
//! Local images are handed to Iced by path and never pass through here. For
//! remote portfolios each rendered image URL is fetched once. Handles for
//! images currently in the grid are kept for as long as they are shown; once
//! the grid is cleared they move to an LRU so long browsing sessions stay
//! bounded and switching back to a category is cheap.

use crate::portfolio::LoadError;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailStatus {
    Loading,
    Failed,
}

pub struct ThumbnailCache {
    /// Handles of images in the grid. Never evicted.
    shown: HashMap<String, Handle>,
    /// Handles of images no longer in the grid.
    recent: LruCache<String, Handle>,
    /// Fetches under way, flagged with whether the grid still wants them.
    in_flight: HashMap<String, bool>,
    failed: HashSet<String>,
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("shown", &self.shown.len())
            .field("recent", &self.recent.len())
            .field("in_flight", &self.in_flight.len())
            .field("failed", &self.failed.len())
            .finish()
    }
}

impl ThumbnailCache {
    /// `capacity` bounds the thumbnails kept for images no longer shown.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            shown: HashMap::new(),
            recent: LruCache::new(capacity),
            in_flight: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Marks `url` as shown in the grid and claims it for fetching.
    ///
    /// Returns `false` when no fetch is needed: the handle is already
    /// available (a recent one is pinned again), a fetch is under way, or the
    /// URL is known to fail.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.shown.contains_key(url) || self.failed.contains(url) {
            return false;
        }
        if let Some(handle) = self.recent.pop(url) {
            self.shown.insert(url.to_string(), handle);
            return false;
        }
        if let Some(wanted) = self.in_flight.get_mut(url) {
            *wanted = true;
            return false;
        }
        self.in_flight.insert(url.to_string(), true);
        true
    }

    /// Records the outcome of a fetch started with [`begin`](Self::begin).
    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, LoadError>) {
        let wanted = self.in_flight.remove(&url).unwrap_or(false);
        match result {
            Ok(bytes) => {
                let handle = Handle::from_bytes(bytes);
                if wanted {
                    self.shown.insert(url, handle);
                } else {
                    self.recent.put(url, handle);
                }
            }
            Err(err) => {
                log::warn!("Thumbnail {url} unavailable: {err}");
                self.failed.insert(url);
            }
        }
    }

    /// Called when the grid is cleared: shown handles become evictable.
    pub fn release_shown(&mut self) {
        for (url, handle) in self.shown.drain() {
            self.recent.put(url, handle);
        }
        for wanted in self.in_flight.values_mut() {
            *wanted = false;
        }
    }

    /// Looks up a handle without touching the LRU order (views borrow
    /// immutably).
    #[must_use]
    pub fn peek(&self, url: &str) -> Result<&Handle, ThumbnailStatus> {
        if let Some(handle) = self.shown.get(url).or_else(|| self.recent.peek(url)) {
            return Ok(handle);
        }
        if self.failed.contains(url) {
            Err(ThumbnailStatus::Failed)
        } else {
            Err(ThumbnailStatus::Loading)
        }
    }
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(crate::app::config::THUMBNAIL_CACHE_CAPACITY)
    }
}
