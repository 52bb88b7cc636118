// SPDX-License-Identifier: MPL-2.0
//! One button per category, "ALL PHOTOS" first.
//!
//! Category names are shown exactly as canonicalized; they are data, not UI
//! strings, and are never translated.

use crate::portfolio::CategoryName;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Index of the tab carrying the active marker: the first one whose name
/// matches, so duplicate names never produce two markers.
#[must_use]
pub fn marked_index(tabs: &[CategoryName], active: Option<&CategoryName>) -> Option<usize> {
    let active = active?;
    tabs.iter().position(|name| name == active)
}

pub fn view<'a, Message: Clone + 'a>(
    tabs: &'a [CategoryName],
    active: Option<&CategoryName>,
    on_select: impl Fn(CategoryName) -> Message,
) -> Element<'a, Message> {
    let marked = marked_index(tabs, active);

    let buttons: Vec<Element<'a, Message>> = tabs
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let style: fn(&Theme, button::Status) -> button::Style = if Some(index) == marked {
                styles::button::tab_active
            } else {
                styles::button::tab_inactive
            };

            button(
                Text::new(name.as_str())
                    .size(typography::BODY_LG)
                    .align_y(alignment::Vertical::Center),
            )
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XXS, spacing::MD])
            .style(style)
            .on_press(on_select(name.clone()))
            .into()
        })
        .collect();

    Row::with_children(buttons)
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}
