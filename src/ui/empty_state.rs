// SPDX-License-Identifier: MPL-2.0
//! Message shown when the active category has no images.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let message = Text::new(i18n.tr("empty-state-message"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_400);

    Container::new(message)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
