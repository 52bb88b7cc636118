// SPDX-License-Identifier: MPL-2.0
//! Category index derived from the portfolio document.
//!
//! The index always starts with the synthetic "ALL PHOTOS" entry followed by
//! every real tab in source order. Names are canonicalized by upper-casing
//! only; whitespace and diacritics are left untouched.

use super::{Image, PortfolioData};
use std::fmt;

/// Display and persistence name of the synthetic aggregate category.
pub const ALL_PHOTOS: &str = "ALL PHOTOS";

/// Canonical (upper-cased) category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Canonicalizes a raw category name.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    #[must_use]
    pub fn all_photos() -> Self {
        Self(ALL_PHOTOS.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_all_photos(&self) -> bool {
        self.0 == ALL_PHOTOS
    }
}

impl Default for CategoryName {
    fn default() -> Self {
        Self::all_photos()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A selectable category and its ordered images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: CategoryName,
    images: Vec<Image>,
}

impl Category {
    #[must_use]
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    #[must_use]
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Ordered list of selectable categories. Never empty: the first entry is
/// always "ALL PHOTOS".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    categories: Vec<Category>,
}

impl CategoryIndex {
    /// The synthetic aggregate entry.
    #[must_use]
    pub fn all_photos(&self) -> &Category {
        &self.categories[0]
    }

    /// Case-insensitive lookup. Returns the first match in index order, so a
    /// real tab named "All Photos" never shadows the synthetic entry.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Category> {
        let wanted = CategoryName::new(name);
        self.categories.iter().find(|category| category.name == wanted)
    }

    /// Like [`find`](Self::find) but falls back to "ALL PHOTOS".
    #[must_use]
    pub fn resolve(&self, name: &str) -> &Category {
        self.find(name).unwrap_or_else(|| self.all_photos())
    }

    #[must_use]
    pub fn names(&self) -> Vec<CategoryName> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false; kept for API symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Builds the category index for a portfolio.
///
/// "ALL PHOTOS" uses `all_images` when the document provides it, otherwise
/// the concatenation of every tab's images in tab order. Pure: calling it
/// again on the same data yields an equal index.
#[must_use]
pub fn derive_categories(data: &PortfolioData) -> CategoryIndex {
    let aggregate = match &data.all_images {
        Some(all) => all.clone(),
        None => data
            .tabs
            .iter()
            .flat_map(|tab| tab.images.iter().cloned())
            .collect(),
    };

    let mut categories = Vec::with_capacity(data.tabs.len() + 1);
    categories.push(Category {
        name: CategoryName::all_photos(),
        images: aggregate,
    });
    categories.extend(data.tabs.iter().map(|tab| Category {
        name: CategoryName::new(&tab.category),
        images: tab.images.clone(),
    }));

    CategoryIndex { categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::CategoryTab;

    fn image(name: &str) -> Image {
        Image {
            path: format!("images/{name}"),
            name: name.to_string(),
            drive_url: None,
        }
    }

    fn sample() -> PortfolioData {
        PortfolioData {
            tabs: vec![
                CategoryTab {
                    category: "Nature".into(),
                    images: vec![image("a"), image("b")],
                },
                CategoryTab {
                    category: "street".into(),
                    images: vec![image("c")],
                },
            ],
            all_images: None,
        }
    }

    #[test]
    fn all_photos_comes_first_followed_by_tabs() {
        let index = derive_categories(&sample());
        let names: Vec<String> = index.names().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["ALL PHOTOS", "NATURE", "STREET"]);
        assert_eq!(index.len(), sample().tabs.len() + 1);
    }

    #[test]
    fn aggregate_concatenates_tabs_in_order() {
        let index = derive_categories(&sample());
        let aggregate: Vec<&str> = index
            .all_photos()
            .images()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(aggregate, vec!["a", "b", "c"]);
    }

    #[test]
    fn aggregate_prefers_all_images() {
        let mut data = sample();
        data.all_images = Some(vec![image("c"), image("a"), image("b")]);
        let index = derive_categories(&data);
        let aggregate: Vec<&str> = index
            .all_photos()
            .images()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(aggregate, vec!["c", "a", "b"]);
    }

    #[test]
    fn derivation_is_idempotent() {
        let data = sample();
        let first = derive_categories(&data);
        let second = derive_categories(&data);
        assert_eq!(first, second);
        assert_eq!(
            second.iter().filter(|c| c.name().is_all_photos()).count(),
            1
        );
    }

    #[test]
    fn empty_portfolio_still_has_all_photos() {
        let index = derive_categories(&PortfolioData::default());
        assert_eq!(index.len(), 1);
        assert!(index.all_photos().is_empty());
    }

    #[test]
    fn find_is_case_insensitive() {
        let index = derive_categories(&sample());
        assert_eq!(index.find("nature").map(|c| c.len()), Some(2));
        assert_eq!(index.find("NaTuRe").map(|c| c.len()), Some(2));
        assert!(index.find("nowhere").is_none());
    }

    #[test]
    fn find_does_not_trim_whitespace() {
        let index = derive_categories(&sample());
        assert!(index.find(" nature").is_none());
    }

    #[test]
    fn real_tab_named_all_photos_does_not_shadow_aggregate() {
        let mut data = sample();
        data.tabs.push(CategoryTab {
            category: "All Photos".into(),
            images: vec![image("z")],
        });
        let index = derive_categories(&data);
        let found = index.find(ALL_PHOTOS).expect("ALL PHOTOS is always present");
        assert!(std::ptr::eq(found, index.all_photos()));
        // The concatenated aggregate includes the real tab's image too.
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn resolve_falls_back_to_all_photos() {
        let index = derive_categories(&sample());
        assert!(index.resolve("missing").name().is_all_photos());
    }
}
