// SPDX-License-Identifier: MPL-2.0
//! The command surface the gallery core drives.
//!
//! All calls are one-directional: the core never reads anything back from the
//! renderer. Every command must be safe to repeat.

use crate::portfolio::{CategoryName, Image};

pub trait GalleryRenderer {
    /// Presents one clickable element per category, in index order.
    fn render_category_tabs(&mut self, names: &[CategoryName]);

    /// Removes every rendered image, any empty/error message and the
    /// "load more" affordance.
    fn clear_gallery(&mut self);

    /// Appends a batch of images after the ones already shown.
    fn render_batch(&mut self, images: &[Image]);

    fn show_empty_state(&mut self);

    fn show_error_state(&mut self, message: &str);

    /// Marks exactly the category whose canonical name equals `name` as active.
    fn set_active_category_marker(&mut self, name: &CategoryName);

    fn show_load_more_affordance(&mut self, has_more: bool);
}

/// A renderer command, as captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    CategoryTabs(Vec<CategoryName>),
    ClearGallery,
    Batch(Vec<Image>),
    EmptyState,
    ErrorState(String),
    ActiveMarker(CategoryName),
    LoadMore(bool),
}

/// Headless renderer that records every command it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drains the recorded commands, e.g. between two user interactions.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All batches rendered so far, in order.
    #[must_use]
    pub fn batches(&self) -> Vec<&[Image]> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Batch(images) => Some(images.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Last load-more signal, if any was sent.
    #[must_use]
    pub fn last_load_more(&self) -> Option<bool> {
        self.commands.iter().rev().find_map(|command| match command {
            RenderCommand::LoadMore(has_more) => Some(*has_more),
            _ => None,
        })
    }

    /// Last active marker, if any was sent.
    #[must_use]
    pub fn last_active_marker(&self) -> Option<&CategoryName> {
        self.commands.iter().rev().find_map(|command| match command {
            RenderCommand::ActiveMarker(name) => Some(name),
            _ => None,
        })
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&RenderCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }
}

impl GalleryRenderer for RecordingRenderer {
    fn render_category_tabs(&mut self, names: &[CategoryName]) {
        self.commands.push(RenderCommand::CategoryTabs(names.to_vec()));
    }

    fn clear_gallery(&mut self) {
        self.commands.push(RenderCommand::ClearGallery);
    }

    fn render_batch(&mut self, images: &[Image]) {
        self.commands.push(RenderCommand::Batch(images.to_vec()));
    }

    fn show_empty_state(&mut self) {
        self.commands.push(RenderCommand::EmptyState);
    }

    fn show_error_state(&mut self, message: &str) {
        self.commands
            .push(RenderCommand::ErrorState(message.to_string()));
    }

    fn set_active_category_marker(&mut self, name: &CategoryName) {
        self.commands.push(RenderCommand::ActiveMarker(name.clone()));
    }

    fn show_load_more_affordance(&mut self, has_more: bool) {
        self.commands.push(RenderCommand::LoadMore(has_more));
    }
}
