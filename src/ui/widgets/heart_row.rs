//! Heart icons for the custom rating content slot

use iced::widget::{Row, svg};
use iced::{Alignment, Color, Element};

use crate::ui::{icons, theme};

const HEART_SIZE: f32 = 32.0;
const HEART_SPACING: f32 = 6.0;

fn view<'a, Message: 'a>(max_rating: u32, color: Color) -> Element<'a, Message> {
    let handle = svg::Handle::from_memory(icons::HEART.as_bytes());

    let hearts = (0..max_rating).map(|_| {
        svg(handle.clone())
            .width(HEART_SIZE)
            .height(HEART_SIZE)
            .style(move |_theme, _status| svg::Style { color: Some(color) })
            .into()
    });

    Row::with_children(hearts)
        .spacing(HEART_SPACING)
        .align_y(Alignment::Center)
        .into()
}

/// Grey hearts for the unrated layer
pub fn unrated<'a, Message: 'a>(max_rating: u32) -> Element<'a, Message> {
    view(max_rating, theme::HEART_EMPTY)
}

/// Pink hearts for the rated layer
pub fn rated<'a, Message: 'a>(max_rating: u32) -> Element<'a, Message> {
    view(max_rating, theme::ACCENT_PINK)
}
