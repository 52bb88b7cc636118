// SPDX-License-Identifier: MPL-2.0
//! Active category selection and its persistence.
//!
//! Two states only: `Unselected` until startup restores a category, then
//! `Selected` for the rest of the session. Names that match no category fall
//! back to "ALL PHOTOS"; this is an expected condition, not an error.

use crate::error::Result;
use crate::portfolio::{CategoryIndex, CategoryName, Image};

/// Persisted key holding the last active category.
pub const ACTIVE_CATEGORY_KEY: &str = "activeTabCategory";

/// Durable storage for the active category.
pub trait SelectionStore {
    /// Reads the persisted value, if any.
    fn load_active_category(&self) -> Option<String>;

    /// Writes the value synchronously.
    fn save_active_category(&mut self, name: &CategoryName) -> Result<()>;
}

/// In-memory store, for headless use and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl SelectionStore for MemoryStore {
    fn load_active_category(&self) -> Option<String> {
        self.value.clone()
    }

    fn save_active_category(&mut self, name: &CategoryName) -> Result<()> {
        self.value = Some(name.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(CategoryName),
}

#[derive(Debug)]
pub struct Selection<S> {
    store: S,
    state: SelectionState,
}

impl<S: SelectionStore> Selection<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: SelectionState::Unselected,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn active(&self) -> Option<&CategoryName> {
        match &self.state {
            SelectionState::Selected(name) => Some(name),
            SelectionState::Unselected => None,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted category, defaulting to "ALL PHOTOS".
    #[must_use]
    pub fn restore(&self) -> CategoryName {
        self.store
            .load_active_category()
            .map(|raw| CategoryName::new(&raw))
            .unwrap_or_else(CategoryName::all_photos)
    }

    /// Startup transition: restores the persisted category and resolves it
    /// without writing anything back.
    pub fn restore_into<'i>(&mut self, index: &'i CategoryIndex) -> &'i [Image] {
        let restored = self.restore();
        let category = index.resolve(restored.as_str());
        if category.name() != &restored {
            log::warn!(
                "Persisted category {restored} no longer exists, showing {}",
                category.name()
            );
        }
        self.state = SelectionState::Selected(category.name().clone());
        category.images()
    }

    /// Selects a category by (case-insensitive) name and persists it before
    /// returning its images. Unknown names select "ALL PHOTOS", which is what
    /// gets persisted in that case.
    pub fn select<'i>(&mut self, name: &str, index: &'i CategoryIndex) -> &'i [Image] {
        let category = match index.find(name) {
            Some(category) => category,
            None => {
                log::debug!("Unknown category {name:?}, falling back to ALL PHOTOS");
                index.all_photos()
            }
        };

        if let Err(err) = self.store.save_active_category(category.name()) {
            log::warn!("Failed to persist active category: {err}");
        }
        self.state = SelectionState::Selected(category.name().clone());
        category.images()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::portfolio::{derive_categories, CategoryTab, PortfolioData};

    fn index() -> CategoryIndex {
        let image = |name: &str| Image {
            path: name.to_string(),
            name: name.to_string(),
            drive_url: None,
        };
        derive_categories(&PortfolioData {
            tabs: vec![
                CategoryTab {
                    category: "Nature".into(),
                    images: vec![image("a"), image("b")],
                },
                CategoryTab {
                    category: "Portraits".into(),
                    images: vec![image("c")],
                },
            ],
            all_images: None,
        })
    }

    struct FailingStore;

    impl SelectionStore for FailingStore {
        fn load_active_category(&self) -> Option<String> {
            None
        }

        fn save_active_category(&mut self, _name: &CategoryName) -> Result<()> {
            Err(Error::State("read-only".into()))
        }
    }

    #[test]
    fn restore_defaults_to_all_photos() {
        let selection = Selection::new(MemoryStore::default());
        assert!(selection.restore().is_all_photos());
    }

    #[test]
    fn starts_unselected() {
        let selection = Selection::new(MemoryStore::default());
        assert_eq!(selection.state(), &SelectionState::Unselected);
        assert!(selection.active().is_none());
    }

    #[test]
    fn select_then_restore_round_trips_canonical_name() {
        let index = index();
        let mut selection = Selection::new(MemoryStore::default());

        let images = selection.select("nature", &index);
        assert_eq!(images.len(), 2);

        let reloaded = Selection::new(selection.store().clone());
        assert_eq!(reloaded.restore(), CategoryName::new("NATURE"));
    }

    #[test]
    fn persisted_value_is_upper_case() {
        let index = index();
        let mut selection = Selection::new(MemoryStore::default());
        selection.select("Portraits", &index);
        assert_eq!(
            selection.store().load_active_category().as_deref(),
            Some("PORTRAITS")
        );
    }

    #[test]
    fn unknown_name_resolves_like_all_photos() {
        let index = index();
        let mut selection = Selection::new(MemoryStore::default());
        let unknown = selection.select("nonexistent", &index).to_vec();
        let all = selection.select("ALL PHOTOS", &index).to_vec();
        assert_eq!(unknown, all);
    }

    #[test]
    fn unknown_name_persists_all_photos() {
        let index = index();
        let mut selection = Selection::new(MemoryStore::default());
        selection.select("nonexistent", &index);
        assert_eq!(selection.active(), Some(&CategoryName::all_photos()));
        assert_eq!(
            selection.store().load_active_category().as_deref(),
            Some("ALL PHOTOS")
        );
    }

    #[test]
    fn restore_into_falls_back_without_writing() {
        let index = index();
        let mut selection = Selection::new(MemoryStore::with_value("GONE"));
        let images = selection.restore_into(&index);
        assert_eq!(images.len(), 3);
        assert_eq!(selection.active(), Some(&CategoryName::all_photos()));
        assert_eq!(
            selection.store().load_active_category().as_deref(),
            Some("GONE")
        );
    }

    #[test]
    fn restore_into_accepts_lower_case_value() {
        let index = index();
        let mut selection = Selection::new(MemoryStore::with_value("nature"));
        assert_eq!(selection.restore_into(&index).len(), 2);
        assert_eq!(selection.active(), Some(&CategoryName::new("NATURE")));
    }

    #[test]
    fn failed_write_still_switches_selection() {
        let index = index();
        let mut selection = Selection::new(FailingStore);
        let images = selection.select("portraits", &index);
        assert_eq!(images.len(), 1);
        assert_eq!(selection.active(), Some(&CategoryName::new("PORTRAITS")));
    }
}
