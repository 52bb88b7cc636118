// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Frame around a thumbnail that has no image yet (loading or failed).
pub fn placeholder(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        text_color: Some(ext.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Error state card, accented with the error color.
pub fn error_card(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(ext.background.base.color)),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_card_uses_error_color() {
        assert_eq!(error_card(&Theme::Dark).border.color, palette::ERROR_500);
    }
}
