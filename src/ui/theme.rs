//! Styles for the rating demo
//!
//! Colors come from the active iced palette so the demo follows both the
//! light and dark themes. Only the hearts use fixed colors.

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Neon pink accent, used for rated hearts and pressed buttons
pub const ACCENT_PINK: Color = color!(0xff1493);

/// Unfilled heart in the custom content demo
pub const HEART_EMPTY: Color = color!(0x555555);

/// Secondary text, the palette's text color at reduced opacity
pub fn text_secondary(theme: &Theme) -> Color {
    let palette = theme.extended_palette();
    let alpha = if palette.is_dark { 0.7 } else { 0.65 };

    Color {
        a: alpha,
        ..palette.background.base.text
    }
}

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Rounded card holding one demo section
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Outlined pill button
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        button::Status::Pressed => ACCENT_PINK,
        button::Status::Hovered => palette.background.base.text,
        _ => palette.background.strong.color,
    };

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.strong.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color,
        },
        ..Default::default()
    }
}
