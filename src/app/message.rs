// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::portfolio::{LoadError, PortfolioData};
use crate::ui::gallery_view;
use crate::ui::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-shot portfolio load finished.
    PortfolioLoaded(Result<PortfolioData, LoadError>),
    Gallery(gallery_view::Message),
    /// A remote thumbnail fetch finished.
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, LoadError>,
    },
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Portfolio document path or URL; overrides `[gallery] data_source`.
    pub source: Option<String>,
    /// Optional data directory override (for state and log files).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
