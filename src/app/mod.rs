// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery core and the
//! Iced widgets.
//!
//! The `App` struct wires together the category gallery, the persisted
//! selection, localization and notifications. This file intentionally keeps
//! policy decisions (startup order, where warnings surface) close to the
//! main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::portfolio::{loader, DataSource};
use crate::ui::gallery_view::GallerySurface;
use crate::ui::notifications::{self, Notification};
use crate::ui::thumbnails::ThumbnailCache;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::PersistedStore;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    surface: GallerySurface,
    /// Present once the portfolio document has loaded.
    gallery: Option<Gallery<PersistedStore>>,
    /// Opened at startup, handed to the gallery when the data arrives.
    store: Option<PersistedStore>,
    thumbnails: ThumbnailCache,
    notifications: notifications::Manager,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("active", &self.surface.active())
            .field("rendered", &self.surface.images().len())
            .field("loaded", &self.gallery.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            surface: GallerySurface::new(config.gallery.data_source()),
            config,
            gallery: None,
            store: None,
            thumbnails: ThumbnailCache::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the portfolio load.
    ///
    /// Config, state and locale problems never abort startup; they fall back
    /// to defaults and surface as toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (store, state_warning) = PersistedStore::open();

        let source = flags
            .source
            .as_deref()
            .map(DataSource::parse)
            .unwrap_or_else(|| config.gallery.data_source());

        let mut app = Self {
            i18n,
            surface: GallerySurface::new(source.clone()),
            config,
            gallery: None,
            store: Some(store),
            thumbnails: ThumbnailCache::default(),
            notifications: notifications::Manager::new(),
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = Task::perform(loader::load(source), Message::PortfolioLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.gallery {
            Some(gallery) => format!("{} - {app_name}", gallery.active_category()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            store: &mut self.store,
            surface: &mut self.surface,
            thumbnails: &mut self.thumbnails,
            notifications: &mut self.notifications,
            page_size: self.config.gallery.page_size(),
        };

        match message {
            Message::PortfolioLoaded(result) => update::handle_portfolio_loaded(&mut ctx, result),
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::ThumbnailLoaded { url, result } => {
                update::handle_thumbnail_loaded(&mut ctx, url, result)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            surface: &self.surface,
            thumbnails: &self.thumbnails,
            notifications: &self.notifications,
            columns: self.config.gallery.columns(),
            total: self
                .gallery
                .as_ref()
                .map_or(0, |gallery| gallery.active_images().len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageSize;
    use crate::gallery::SelectionStore;
    use crate::portfolio::{CategoryTab, Image, LoadError, PortfolioData};
    use crate::ui::error_state;
    use crate::ui::gallery_view::{self, Content};
    use crate::ui::notifications::NotificationMessage;
    use tempfile::tempdir;

    fn image(category: &str, n: usize) -> Image {
        Image {
            path: format!("images/{category}/{n}.jpg"),
            name: format!("{n}.jpg"),
            drive_url: None,
        }
    }

    fn portfolio() -> PortfolioData {
        PortfolioData {
            tabs: vec![
                CategoryTab {
                    category: "Nature".to_string(),
                    images: (0..20).map(|n| image("Nature", n)).collect(),
                },
                CategoryTab {
                    category: "Street".to_string(),
                    images: (0..5).map(|n| image("Street", n)).collect(),
                },
            ],
            all_images: None,
        }
    }

    fn app_in(dir: &std::path::Path) -> App {
        let (store, _) = PersistedStore::open_in(Some(dir.to_path_buf()));
        App {
            store: Some(store),
            ..App::default()
        }
    }

    fn loaded_app(dir: &std::path::Path) -> App {
        let mut app = app_in(dir);
        let _ = app.update(Message::PortfolioLoaded(Ok(portfolio())));
        app
    }

    #[test]
    fn default_app_waits_for_portfolio() {
        let app = App::default();
        assert_eq!(app.surface.content(), &Content::Loading);
        assert!(app.gallery.is_none());
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn loaded_portfolio_renders_tabs_and_first_batch() {
        let dir = tempdir().expect("failed to create temp dir");
        let app = loaded_app(dir.path());

        let tabs: Vec<&str> = app.surface.tabs().iter().map(|tab| tab.as_str()).collect();
        assert_eq!(tabs, vec!["ALL PHOTOS", "NATURE", "STREET"]);
        assert_eq!(app.surface.active().map(|name| name.as_str()), Some("ALL PHOTOS"));
        assert_eq!(app.surface.images().len(), PageSize::default().value());
        assert!(app.surface.has_more());
        assert!(app.store.is_none());
    }

    #[test]
    fn load_more_appends_next_batch() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut app = loaded_app(dir.path());

        let _ = app.update(Message::Gallery(gallery_view::Message::LoadMore));
        assert_eq!(app.surface.images().len(), 24);
        let _ = app.update(Message::Gallery(gallery_view::Message::LoadMore));
        assert_eq!(app.surface.images().len(), 25);
        assert!(!app.surface.has_more());
    }

    #[test]
    fn selecting_category_persists_and_resets_grid() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut app = loaded_app(dir.path());
        let _ = app.update(Message::Gallery(gallery_view::Message::LoadMore));

        let _ = app.update(Message::Gallery(gallery_view::Message::SelectCategory(
            crate::portfolio::CategoryName::new("street"),
        )));

        assert_eq!(app.surface.images().len(), 5);
        assert!(!app.surface.has_more());
        assert!(app.title().starts_with("STREET - "));

        let (reopened, _) = PersistedStore::open_in(Some(dir.path().to_path_buf()));
        assert_eq!(reopened.load_active_category().as_deref(), Some("STREET"));
    }

    #[test]
    fn persisted_category_is_restored_on_load() {
        let dir = tempdir().expect("failed to create temp dir");
        {
            let (mut store, _) = PersistedStore::open_in(Some(dir.path().to_path_buf()));
            store
                .save_active_category(&crate::portfolio::CategoryName::new("Nature"))
                .expect("save should succeed");
        }

        let app = loaded_app(dir.path());
        assert_eq!(app.surface.active().map(|name| name.as_str()), Some("NATURE"));
        assert_eq!(
            app.gallery.as_ref().map(|gallery| gallery.active_images().len()),
            Some(20)
        );
    }

    #[test]
    fn load_failure_shows_cause_specific_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(dir.path());
        let error = LoadError::Status(404);

        let _ = app.update(Message::PortfolioLoaded(Err(error.clone())));

        match app.surface.content() {
            Content::Error(state) => {
                assert_eq!(state.friendly_key(), error.i18n_key());
                assert!(!state.show_details());
            }
            other => panic!("expected error content, got {other:?}"),
        }
        assert!(app.surface.tabs().is_empty());
        assert!(app.gallery.is_none());

        let _ = app.update(Message::Gallery(gallery_view::Message::ErrorState(
            error_state::Message::ToggleDetails,
        )));
        match app.surface.content() {
            Content::Error(state) => assert!(state.show_details()),
            other => panic!("expected error content, got {other:?}"),
        }
    }

    #[test]
    fn gallery_messages_before_load_are_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery_view::Message::LoadMore));
        let _ = app.update(Message::Gallery(gallery_view::Message::SelectCategory(
            crate::portfolio::CategoryName::all_photos(),
        )));
        assert_eq!(app.surface.content(), &Content::Loading);
    }

    fn remote_urls(app: &App) -> Vec<String> {
        app.surface
            .images()
            .iter()
            .filter_map(|rendered| match &rendered.location {
                crate::portfolio::ImageLocation::Remote(url) => Some(url.clone()),
                crate::portfolio::ImageLocation::Local(_) => None,
            })
            .collect()
    }

    fn deliver_thumbnails(app: &mut App) {
        for url in remote_urls(app) {
            let _ = app.update(Message::ThumbnailLoaded {
                url,
                result: Ok(vec![0]),
            });
        }
    }

    #[test]
    fn remote_grid_larger_than_cache_keeps_every_thumbnail() {
        let dir = tempdir().expect("failed to create temp dir");
        let (store, _) = PersistedStore::open_in(Some(dir.path().to_path_buf()));
        let mut app = App {
            surface: GallerySurface::new(DataSource::parse("https://example.com/site/data.json")),
            store: Some(store),
            thumbnails: ThumbnailCache::new(4),
            ..App::default()
        };

        let _ = app.update(Message::PortfolioLoaded(Ok(portfolio())));
        deliver_thumbnails(&mut app);
        while app.surface.has_more() {
            let _ = app.update(Message::Gallery(gallery_view::Message::LoadMore));
            deliver_thumbnails(&mut app);
        }

        let urls = remote_urls(&app);
        assert_eq!(urls.len(), 25);
        for url in &urls {
            assert!(app.thumbnails.peek(url).is_ok(), "{url} not available");
        }

        // After a switch, each new thumbnail is either cached or being fetched.
        let _ = app.update(Message::Gallery(gallery_view::Message::SelectCategory(
            crate::portfolio::CategoryName::new("street"),
        )));
        for url in remote_urls(&app) {
            assert!(!app.thumbnails.begin(&url), "{url} was not requested");
        }
    }

    #[test]
    fn thumbnail_result_lands_in_cache() {
        let mut app = App::default();
        let url = "https://example.com/images/a.jpg".to_string();
        assert!(app.thumbnails.begin(&url));

        let _ = app.update(Message::ThumbnailLoaded {
            url: url.clone(),
            result: Ok(vec![0, 1, 2]),
        });
        assert!(app.thumbnails.peek(&url).is_ok());
    }

    #[test]
    fn notifications_can_be_dismissed() {
        let mut app = App::default();
        app.notifications
            .push(Notification::warning("notification-config-load-error"));
        let id = app
            .notifications
            .visible()
            .next()
            .map(|notification| notification.id())
            .expect("notification should be visible");

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert!(!app.notifications.has_notifications());
    }
}
