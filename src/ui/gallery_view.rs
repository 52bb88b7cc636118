// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the gallery.
//!
//! [`GallerySurface`] is the retained view model the gallery core writes to
//! through [`GalleryRenderer`]; [`view`] turns it into widgets. The core never
//! reads the surface back.

use crate::domain::GridColumns;
use crate::gallery::GalleryRenderer;
use crate::i18n::fluent::I18n;
use crate::portfolio::{CategoryName, DataSource, Image, ImageLocation};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, tooltip};
use crate::ui::thumbnails::{ThumbnailCache, ThumbnailStatus};
use crate::ui::{category_tabs, empty_state, error_state};
use iced::widget::image::Handle;
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(CategoryName),
    LoadMore,
    /// Carries the resolved open target of the clicked image.
    OpenImage(String),
    ErrorState(error_state::Message),
}

/// What occupies the area below the tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    /// Before the portfolio document has been loaded.
    #[default]
    Loading,
    Images,
    Empty,
    Error(error_state::State),
}

/// An image placed in the grid, with its path resolved against the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub image: Image,
    pub location: ImageLocation,
}

impl RenderedImage {
    /// The Drive link if any, otherwise the resolved display file.
    #[must_use]
    pub fn open_target(&self) -> String {
        match &self.image.drive_url {
            Some(url) => url.clone(),
            None => self.location.to_open_target(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GallerySurface {
    source: DataSource,
    tabs: Vec<CategoryName>,
    active: Option<CategoryName>,
    images: Vec<RenderedImage>,
    content: Content,
    has_more: bool,
    pending_fetches: Vec<String>,
}

impl GallerySurface {
    #[must_use]
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tabs(&self) -> &[CategoryName] {
        &self.tabs
    }

    #[must_use]
    pub fn active(&self) -> Option<&CategoryName> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn images(&self) -> &[RenderedImage] {
        &self.images
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Remote URLs rendered since the last call, to be fetched by the app.
    pub fn take_pending_fetches(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_fetches)
    }

    /// Replaces the generic error message with the one matching the cause.
    pub fn set_error_key(&mut self, key: &'static str) {
        if let Content::Error(state) = &mut self.content {
            state.set_friendly_key(key);
        }
    }

    pub fn handle_error_message(&mut self, message: error_state::Message) {
        if let Content::Error(state) = &mut self.content {
            state.handle(message);
        }
    }
}

impl GalleryRenderer for GallerySurface {
    fn render_category_tabs(&mut self, names: &[CategoryName]) {
        self.tabs = names.to_vec();
    }

    fn clear_gallery(&mut self) {
        self.images.clear();
        self.pending_fetches.clear();
        self.has_more = false;
        self.content = Content::Images;
    }

    fn render_batch(&mut self, images: &[Image]) {
        self.content = Content::Images;
        for image in images {
            let location = self.source.resolve(&image.path);
            if let ImageLocation::Remote(url) = &location {
                self.pending_fetches.push(url.clone());
            }
            self.images.push(RenderedImage {
                image: image.clone(),
                location,
            });
        }
    }

    fn show_empty_state(&mut self) {
        self.content = Content::Empty;
    }

    fn show_error_state(&mut self, message: &str) {
        self.images.clear();
        self.has_more = false;
        self.content = Content::Error(error_state::State::new(
            error_state::GENERIC_KEY,
            message.to_string(),
        ));
    }

    fn set_active_category_marker(&mut self, name: &CategoryName) {
        self.active = Some(name.clone());
    }

    fn show_load_more_affordance(&mut self, has_more: bool) {
        self.has_more = has_more;
    }
}

/// Borrowed context for [`view`].
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnails: &'a ThumbnailCache,
    pub columns: GridColumns,
    /// Size of the active set, for the "showing N of M" counter.
    pub total: usize,
}

pub fn view<'a>(surface: &'a GallerySurface, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match &surface.content {
        Content::Loading => Container::new(Text::new(ctx.i18n.tr("loading-message")))
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .into(),
        Content::Empty => empty_state::view(ctx.i18n),
        Content::Error(state) => error_state::view(state, ctx.i18n).map(Message::ErrorState),
        Content::Images => grid(surface, &ctx),
    };

    let mut page = Column::new().spacing(spacing::LG).padding(spacing::LG);
    if !surface.tabs.is_empty() {
        page = page.push(category_tabs::view(
            &surface.tabs,
            surface.active.as_ref(),
            Message::SelectCategory,
        ));
    }
    page = page.push(body);

    if surface.content == Content::Images && !surface.images.is_empty() {
        page = page.push(footer(surface, &ctx));
    }

    scrollable(
        Container::new(page.max_width(sizing::CONTENT_MAX_WIDTH))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn grid<'a>(surface: &'a GallerySurface, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.columns.value();
    let rows = surface.images.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::MD);
        for rendered in chunk {
            row = row.push(cell(rendered, ctx));
        }
        // Keep cell widths equal on a partial last row.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        Element::from(row)
    });

    Column::with_children(rows)
        .spacing(spacing::MD)
        .into()
}

fn cell<'a>(rendered: &'a RenderedImage, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail_handle(rendered, ctx.thumbnails) {
        Ok(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        Err(status) => {
            let label = match status {
                ThumbnailStatus::Loading => String::new(),
                ThumbnailStatus::Failed => ctx.i18n.tr("thumbnail-unavailable"),
            };
            Container::new(Text::new(label).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::placeholder)
                .into()
        }
    };

    let caption = Text::new(rendered.image.name.as_str())
        .size(typography::CAPTION)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let card = button(Column::new().spacing(spacing::XXS).push(picture).push(caption))
        .padding(spacing::XXS)
        .width(Length::Fill)
        .style(styles::button::thumbnail)
        .on_press(Message::OpenImage(rendered.open_target()));

    let tip = if rendered.image.has_drive_link() {
        ctx.i18n.tr("drive-link-tooltip")
    } else {
        ctx.i18n
            .tr_with_args("open-image-tooltip", &[("name", rendered.image.name.as_str())])
    };

    tooltip::styled(card, tip, tooltip::Position::Bottom).into()
}

fn thumbnail_handle(
    rendered: &RenderedImage,
    thumbnails: &ThumbnailCache,
) -> Result<Handle, ThumbnailStatus> {
    match &rendered.location {
        ImageLocation::Local(path) => Ok(Handle::from_path(path)),
        ImageLocation::Remote(url) => thumbnails.peek(url).cloned(),
    }
}

fn footer<'a>(surface: &'a GallerySurface, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let shown = surface.images.len().to_string();
    let total = ctx.total.to_string();
    let counter = Text::new(
        ctx.i18n
            .tr_with_args("gallery-count", &[("shown", &shown), ("total", &total)]),
    )
    .size(typography::CAPTION);

    let mut footer = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(counter);

    // Present only while images remain.
    if surface.has_more {
        footer = footer.push(
            button(Text::new(ctx.i18n.tr("load-more-button")).size(typography::BODY_LG))
                .padding([spacing::XS, spacing::XL])
                .style(styles::button::primary)
                .on_press(Message::LoadMore),
        );
    }

    footer.into()
}
