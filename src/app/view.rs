//! Application view rendering

use iced::widget::{Space, button, column, container, pick_list, row, text, toggler};
use iced::{Alignment, Element, Fill};

use super::{App, Message};
use crate::features::settings::MAX_RATING_LIMIT;
use crate::ui::primitives::rating;
use crate::ui::theme;
use crate::ui::widgets::heart_row;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            text("Rustle Rating").size(28),
            self.stars_section(),
            self.hearts_section(),
            self.controls_section(),
        ]
        .spacing(24)
        .padding(32)
        .max_width(720);

        container(content)
            .center_x(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }

    fn stars_section(&self) -> Element<'_, Message> {
        let settings = &self.settings.rating;

        let bar = rating(self.rating)
            .max_rating(settings.max_rating)
            .dragging(settings.enable_dragging)
            .tapping(settings.enable_tapping)
            .star_size(settings.star_size)
            .spacing(settings.spacing)
            .on_change(Message::RatingChanged)
            .on_complete(Message::RatingCompleted);

        let committed = match self.committed {
            Some(value) => format!("Committed: {value:.2}"),
            None => String::from("Committed: none"),
        };

        section(
            "Stars",
            column![
                bar,
                row![
                    text(format!("{:.2} / {}", self.rating, settings.max_rating)).size(16),
                    Space::new().width(Fill),
                    caption(committed),
                ]
                .align_y(Alignment::Center),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
    }

    fn hearts_section(&self) -> Element<'_, Message> {
        let settings = &self.settings.rating;

        let bar = rating(self.hearts)
            .max_rating(settings.max_rating)
            .dragging(settings.enable_dragging)
            .tapping(settings.enable_tapping)
            .unrated_content(heart_row::unrated)
            .rated_content(heart_row::rated)
            .on_change(Message::HeartsChanged)
            .on_complete(Message::HeartsCompleted);

        section(
            "Custom content",
            column![
                bar,
                text(format!("{:.2} / {}", self.hearts, settings.max_rating)).size(16),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
    }

    fn controls_section(&self) -> Element<'_, Message> {
        let settings = &self.settings.rating;
        let max_options: Vec<u32> = (1..=MAX_RATING_LIMIT).collect();

        section(
            "Options",
            column![
                toggler(settings.enable_dragging)
                    .label("Drag to rate")
                    .on_toggle(Message::DraggingToggled)
                    .size(18),
                toggler(settings.enable_tapping)
                    .label("Tap to rate")
                    .on_toggle(Message::TappingToggled)
                    .size(18),
                toggler(self.settings.display.dark_mode)
                    .label("Dark mode")
                    .on_toggle(Message::DarkModeToggled)
                    .size(18),
                row![
                    caption("Max rating"),
                    Space::new().width(Fill),
                    pick_list(
                        max_options,
                        Some(settings.max_rating),
                        Message::MaxRatingSelected
                    )
                    .text_size(14)
                    .padding([6, 12]),
                ]
                .align_y(Alignment::Center),
                button(text("Reset").size(14))
                    .padding([8, 20])
                    .on_press(Message::Reset)
                    .style(theme::secondary_button),
            ]
            .spacing(12),
        )
    }
}

/// Titled card around one demo section
fn section<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(column![text(title).size(18), body.into()].spacing(16))
        .padding(20)
        .width(Fill)
        .style(theme::card)
        .into()
}

fn caption<'a>(label: impl Into<String>) -> Element<'a, Message> {
    text(label.into())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}
