// SPDX-License-Identifier: MPL-2.0
//! Gallery core: category selection and paginated rendering.
//!
//! [`Gallery`] wires the category index, the selection state and the
//! pagination cursor together and drives a [`GalleryRenderer`]. It is fully
//! headless; the Iced application is one renderer among others.
//!
//! Flow:
//! - [`Gallery::start`] once the portfolio is loaded: tabs, restored
//!   category, first batch.
//! - [`Gallery::select`] on a category click: persist, mark, reset, first batch.
//! - [`Gallery::load_more`] on a "load more" click: next batch.
//! - [`Gallery::report_load_failure`] when the portfolio could not be loaded.

pub mod pagination;
pub mod renderer;
pub mod selection;

pub use pagination::PaginationCursor;
pub use renderer::{GalleryRenderer, RecordingRenderer, RenderCommand};
pub use selection::{
    MemoryStore, Selection, SelectionState, SelectionStore, ACTIVE_CATEGORY_KEY,
};

use crate::domain::PageSize;
use crate::portfolio::{
    derive_categories, Category, CategoryIndex, CategoryName, Image, LoadError, PortfolioData,
};

#[derive(Debug)]
pub struct Gallery<S> {
    index: CategoryIndex,
    selection: Selection<S>,
    cursor: PaginationCursor,
}

impl<S: SelectionStore> Gallery<S> {
    /// Builds the gallery for freshly loaded data and renders the initial view.
    pub fn start(
        data: &PortfolioData,
        store: S,
        page_size: PageSize,
        renderer: &mut impl GalleryRenderer,
    ) -> Self {
        let index = derive_categories(data);
        renderer.render_category_tabs(&index.names());

        let mut selection = Selection::new(store);
        selection.restore_into(&index);

        let mut gallery = Self {
            index,
            selection,
            cursor: PaginationCursor::new(page_size),
        };
        gallery.show_active(renderer);
        gallery
    }

    /// Surfaces a load failure. Nothing else is rendered.
    pub fn report_load_failure(error: &LoadError, renderer: &mut impl GalleryRenderer) {
        log::error!("Error loading portfolio data: {error}");
        renderer.show_error_state(&error.to_string());
    }

    /// Switches to the category named `name` (case-insensitive).
    pub fn select(&mut self, name: &str, renderer: &mut impl GalleryRenderer) {
        self.selection.select(name, &self.index);
        log::debug!("Selected category {}", self.active_category());
        self.show_active(renderer);
    }

    /// Renders the next batch of the active set, if any.
    pub fn load_more(&mut self, renderer: &mut impl GalleryRenderer) {
        self.render_next_batch(renderer);
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryIndex {
        &self.index
    }

    #[must_use]
    pub fn active_category(&self) -> &CategoryName {
        self.active().name()
    }

    #[must_use]
    pub fn active_images(&self) -> &[Image] {
        self.active().images()
    }

    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.cursor.rendered_count()
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.active_images())
    }

    #[must_use]
    pub fn selection(&self) -> &Selection<S> {
        &self.selection
    }

    fn active(&self) -> &Category {
        match self.selection.active() {
            Some(name) => self.index.resolve(name.as_str()),
            None => self.index.all_photos(),
        }
    }

    fn show_active(&mut self, renderer: &mut impl GalleryRenderer) {
        renderer.set_active_category_marker(self.active_category());
        self.cursor.reset(renderer);

        if self.active_images().is_empty() {
            renderer.show_empty_state();
            renderer.show_load_more_affordance(false);
            return;
        }
        self.render_next_batch(renderer);
    }

    fn render_next_batch(&mut self, renderer: &mut impl GalleryRenderer) {
        // Borrow fields separately so the cursor can advance over the set.
        let images = match self.selection.active() {
            Some(name) => self.index.resolve(name.as_str()).images(),
            None => self.index.all_photos().images(),
        };

        let batch = self.cursor.advance(images);
        if !batch.is_empty() {
            log::debug!(
                "Rendering images {}..{} of {}",
                self.cursor.rendered_count() - batch.len(),
                self.cursor.rendered_count(),
                images.len()
            );
            renderer.render_batch(batch);
        }
        renderer.show_load_more_affordance(self.cursor.has_more(images));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::CategoryTab;

    fn images(prefix: &str, count: usize) -> Vec<Image> {
        (1..=count)
            .map(|i| Image {
                path: format!("images/{prefix}/{i}.jpg"),
                name: format!("{prefix}-{i}"),
                drive_url: None,
            })
            .collect()
    }

    fn portfolio(tabs: &[(&str, usize)]) -> PortfolioData {
        PortfolioData {
            tabs: tabs
                .iter()
                .map(|(name, count)| CategoryTab {
                    category: (*name).to_string(),
                    images: images(name, *count),
                })
                .collect(),
            all_images: None,
        }
    }

    fn start(
        data: &PortfolioData,
        store: MemoryStore,
        renderer: &mut RecordingRenderer,
    ) -> Gallery<MemoryStore> {
        Gallery::start(data, store, PageSize::default(), renderer)
    }

    #[test]
    fn start_renders_tabs_marker_and_first_batch() {
        let data = portfolio(&[("Nature", 14)]);
        let mut renderer = RecordingRenderer::new();
        let gallery = start(&data, MemoryStore::default(), &mut renderer);

        assert_eq!(
            renderer.commands()[0],
            RenderCommand::CategoryTabs(vec![
                CategoryName::all_photos(),
                CategoryName::new("NATURE")
            ])
        );
        assert_eq!(renderer.last_active_marker(), Some(&CategoryName::all_photos()));
        assert_eq!(renderer.batches(), vec![&data.tabs[0].images[..12]]);
        assert_eq!(renderer.last_load_more(), Some(true));
        assert_eq!(gallery.rendered_count(), 12);
    }

    #[test]
    fn load_more_renders_the_rest_and_hides_affordance() {
        let data = portfolio(&[("Nature", 14)]);
        let mut renderer = RecordingRenderer::new();
        let mut gallery = start(&data, MemoryStore::default(), &mut renderer);
        renderer.take();

        gallery.load_more(&mut renderer);

        assert_eq!(renderer.batches(), vec![&data.tabs[0].images[12..]]);
        assert_eq!(renderer.last_load_more(), Some(false));
        assert!(!gallery.has_more());
    }

    #[test]
    fn load_more_when_exhausted_renders_nothing() {
        let data = portfolio(&[("Nature", 3)]);
        let mut renderer = RecordingRenderer::new();
        let mut gallery = start(&data, MemoryStore::default(), &mut renderer);
        renderer.take();

        gallery.load_more(&mut renderer);
        gallery.load_more(&mut renderer);

        assert!(renderer.batches().is_empty());
        assert_eq!(
            renderer.commands(),
            &[RenderCommand::LoadMore(false), RenderCommand::LoadMore(false)]
        );
        assert_eq!(gallery.rendered_count(), 3);
    }

    #[test]
    fn select_resets_and_marks_new_category() {
        let data = portfolio(&[("Nature", 20), ("Street", 2)]);
        let mut renderer = RecordingRenderer::new();
        let mut gallery = start(&data, MemoryStore::default(), &mut renderer);
        gallery.load_more(&mut renderer);
        renderer.take();

        gallery.select("street", &mut renderer);

        assert_eq!(
            renderer.commands(),
            &[
                RenderCommand::ActiveMarker(CategoryName::new("STREET")),
                RenderCommand::ClearGallery,
                RenderCommand::Batch(data.tabs[1].images.clone()),
                RenderCommand::LoadMore(false),
            ]
        );
        assert_eq!(gallery.rendered_count(), 2);
        assert_eq!(
            gallery.selection().store().load_active_category().as_deref(),
            Some("STREET")
        );
    }

    #[test]
    fn empty_category_shows_empty_state() {
        let data = portfolio(&[("Nature", 3), ("Empty", 0)]);
        let mut renderer = RecordingRenderer::new();
        let mut gallery = start(&data, MemoryStore::default(), &mut renderer);
        renderer.take();

        gallery.select("empty", &mut renderer);

        assert_eq!(renderer.count(|c| *c == RenderCommand::EmptyState), 1);
        assert!(renderer.batches().is_empty());
        assert_eq!(renderer.last_load_more(), Some(false));
        assert_eq!(
            renderer.count(|c| matches!(c, RenderCommand::ErrorState(_))),
            0
        );
    }

    #[test]
    fn restored_category_is_used_at_startup() {
        let data = portfolio(&[("Nature", 5), ("Street", 30)]);
        let mut renderer = RecordingRenderer::new();
        let gallery = start(&data, MemoryStore::with_value("NATURE"), &mut renderer);

        assert_eq!(gallery.active_category(), &CategoryName::new("NATURE"));
        assert_eq!(renderer.batches(), vec![data.tabs[0].images.as_slice()]);
        assert_eq!(renderer.last_load_more(), Some(false));
    }

    #[test]
    fn load_failure_only_shows_error_state() {
        let mut renderer = RecordingRenderer::new();
        Gallery::<MemoryStore>::report_load_failure(&LoadError::MissingTabs, &mut renderer);

        assert_eq!(
            renderer.commands(),
            &[RenderCommand::ErrorState(LoadError::MissingTabs.to_string())]
        );
    }
}
