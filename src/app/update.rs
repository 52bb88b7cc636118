// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers borrow only the parts of `App` they touch, through
//! [`UpdateContext`], and return follow-up tasks (thumbnail fetches).

use super::persisted_state::PersistedStore;
use super::Message;
use crate::domain::PageSize;
use crate::gallery::Gallery;
use crate::portfolio::{loader, LoadError, PortfolioData};
use crate::ui::gallery_view::{self, GallerySurface};
use crate::ui::notifications::{self, Notification};
use crate::ui::thumbnails::ThumbnailCache;
use iced::Task;
use reqwest::Url;

pub(super) struct UpdateContext<'a> {
    pub gallery: &'a mut Option<Gallery<PersistedStore>>,
    pub store: &'a mut Option<PersistedStore>,
    pub surface: &'a mut GallerySurface,
    pub thumbnails: &'a mut ThumbnailCache,
    pub notifications: &'a mut notifications::Manager,
    pub page_size: PageSize,
}

pub(super) fn handle_portfolio_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<PortfolioData, LoadError>,
) -> Task<Message> {
    match result {
        Ok(data) => {
            let store = ctx.store.take().unwrap_or_default();
            *ctx.gallery = Some(Gallery::start(&data, store, ctx.page_size, ctx.surface));
            fetch_pending_thumbnails(ctx)
        }
        Err(error) => {
            Gallery::<PersistedStore>::report_load_failure(&error, ctx.surface);
            ctx.surface.set_error_key(error.i18n_key());
            Task::none()
        }
    }
}

pub(super) fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_view::Message,
) -> Task<Message> {
    match message {
        gallery_view::Message::SelectCategory(name) => {
            if let Some(gallery) = ctx.gallery.as_mut() {
                // The grid is rebuilt from scratch; thumbnails still needed
                // are pinned again by the fetch pass below.
                ctx.thumbnails.release_shown();
                gallery.select(name.as_str(), ctx.surface);
            }
            fetch_pending_thumbnails(ctx)
        }
        gallery_view::Message::LoadMore => {
            if let Some(gallery) = ctx.gallery.as_mut() {
                gallery.load_more(ctx.surface);
            }
            fetch_pending_thumbnails(ctx)
        }
        gallery_view::Message::OpenImage(target) => {
            open_image(ctx, &target);
            Task::none()
        }
        gallery_view::Message::ErrorState(message) => {
            ctx.surface.handle_error_message(message);
            Task::none()
        }
    }
}

pub(super) fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, LoadError>,
) -> Task<Message> {
    ctx.thumbnails.finish(url, result);
    Task::none()
}

/// Opens the image in the system browser or viewer, without waiting on it.
fn open_image(ctx: &mut UpdateContext<'_>, target: &str) {
    log::debug!("Opening {target}");
    if let Err(err) = open::that_detached(target) {
        log::warn!("Failed to open {target}: {err}");
        ctx.notifications.push(
            Notification::error("notification-open-image-error").with_arg("target", target),
        );
    }
}

/// Starts one background fetch per newly rendered remote image.
fn fetch_pending_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut tasks = Vec::new();
    for url in ctx.surface.take_pending_fetches() {
        if !ctx.thumbnails.begin(&url) {
            continue;
        }
        match Url::parse(&url) {
            Ok(parsed) => tasks.push(Task::perform(loader::fetch_bytes(parsed), move |result| {
                Message::ThumbnailLoaded { url, result }
            })),
            Err(err) => ctx
                .thumbnails
                .finish(url, Err(LoadError::Network(err.to_string()))),
        }
    }
    Task::batch(tasks)
}
