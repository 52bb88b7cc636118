// SPDX-License-Identifier: MPL-2.0
//! Portfolio load error display: a friendly message with optional details.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Error shown in place of the gallery when loading failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// i18n key describing the kind of failure.
    friendly_key: &'static str,
    details: String,
    show_details: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDetails,
}

/// Key used until the cause of the failure is known.
pub const GENERIC_KEY: &str = "error-state-title";

impl State {
    #[must_use]
    pub fn new(friendly_key: &'static str, details: String) -> Self {
        Self {
            friendly_key,
            details,
            show_details: false,
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    /// Replaces the generic message with a cause-specific one.
    pub fn set_friendly_key(&mut self, key: &'static str) {
        self.friendly_key = key;
    }

    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(GENERIC_KEY))
                .size(typography::TITLE_MD)
                .color(palette::ERROR_500),
        );

    if state.friendly_key != GENERIC_KEY {
        content = content.push(Text::new(i18n.tr(state.friendly_key)).size(typography::BODY));
    }

    content = content.push(
        button(Text::new(i18n.tr("error-state-details-label")).size(typography::CAPTION))
            .style(styles::button::tab_inactive)
            .on_press(Message::ToggleDetails),
    );

    if state.show_details {
        content = content.push(
            Text::new(state.details.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    Container::new(
        Container::new(content)
            .padding(spacing::LG)
            .style(styles::container::error_card),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .into()
}
