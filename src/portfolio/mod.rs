// SPDX-License-Identifier: MPL-2.0
//! Portfolio data model as published in `data.json`.
//!
//! The document lists one tab per real category plus an optional
//! `all_images` list that, when present, is the authoritative (usually
//! pre-shuffled) ordering of the synthetic "ALL PHOTOS" category.
//!
//! ```json
//! {
//!   "tabs": [
//!     { "category": "Nature", "images": [
//!       { "path": "images/Nature/fern.jpg", "name": "fern.jpg", "drive_url": "" }
//!     ] }
//!   ],
//!   "all_images": [ ... ]
//! }
//! ```

pub mod category;
pub mod loader;

pub use category::{derive_categories, Category, CategoryIndex, CategoryName, ALL_PHOTOS};
pub use loader::{DataSource, ImageLocation, LoadError};

use serde::{Deserialize, Deserializer, Serialize};

/// A single photo of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    /// Location of the display file, relative to the data document.
    pub path: String,
    /// Original file name, used as caption.
    pub name: String,
    /// Full-resolution link. The site generator writes `""` when no link
    /// exists, which is read as `None`.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub drive_url: Option<String>,
}

impl Image {
    /// Returns what clicking the image opens: the Drive link if any, else the
    /// display file itself.
    #[must_use]
    pub fn open_target(&self) -> &str {
        self.drive_url.as_deref().unwrap_or(&self.path)
    }

    #[must_use]
    pub fn has_drive_link(&self) -> bool {
        self.drive_url.is_some()
    }
}

/// One real category as listed in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTab {
    pub category: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// The whole portfolio document. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioData {
    pub tabs: Vec<CategoryTab>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_images: Option<Vec<Image>>,
}

impl PortfolioData {
    /// Total number of images across real tabs.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.images.len()).sum()
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty()))
}
