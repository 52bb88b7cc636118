// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::GridColumns;
use crate::i18n::fluent::I18n;
use crate::ui::gallery_view::{self, GallerySurface};
use crate::ui::notifications::{self, Toast};
use crate::ui::thumbnails::ThumbnailCache;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub surface: &'a GallerySurface,
    pub thumbnails: &'a ThumbnailCache,
    pub notifications: &'a notifications::Manager,
    pub columns: GridColumns,
    pub total: usize,
}

/// Renders the gallery with toasts layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = gallery_view::view(
        ctx.surface,
        gallery_view::ViewContext {
            i18n: ctx.i18n,
            thumbnails: ctx.thumbnails,
            columns: ctx.columns,
            total: ctx.total,
        },
    )
    .map(Message::Gallery);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(Stack::new().push(gallery).push(toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
