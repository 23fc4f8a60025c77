//! Default rating content: a row of star icons
//!
//! Both layers of the rating bar use the same row geometry so the rated stars
//! line up exactly over the unrated ones. Only the unrated row carries the
//! "Rating star N" content labels, so every label appears once in the tree.

use iced::widget::{Id, Row, container, svg};
use iced::{Alignment, Element};

use crate::ui::icons;

/// Which star icon to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Rated,
    Unrated,
}

impl Star {
    fn icon(self) -> &'static str {
        match self {
            Star::Rated => icons::STAR_FILLED,
            Star::Unrated => icons::STAR_OUTLINE,
        }
    }
}

/// Icon size and gap for the default rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarMetrics {
    pub size: f32,
    pub spacing: f32,
}

impl StarMetrics {
    pub const DEFAULT_SIZE: f32 = 48.0;
    pub const DEFAULT_SPACING: f32 = 8.0;
}

impl Default for StarMetrics {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            spacing: Self::DEFAULT_SPACING,
        }
    }
}

const STAR_LABELS: [&str; 10] = [
    "Rating star 1",
    "Rating star 2",
    "Rating star 3",
    "Rating star 4",
    "Rating star 5",
    "Rating star 6",
    "Rating star 7",
    "Rating star 8",
    "Rating star 9",
    "Rating star 10",
];

/// Content label for the star at `index` (zero based), for the first ten stars
fn star_label(index: u32) -> Option<&'static str> {
    STAR_LABELS.get(index as usize).copied()
}

/// Widget id for the star at `index`, or `None` for the rated layer
fn star_id(star: Star, index: u32) -> Option<Id> {
    match star {
        Star::Unrated => Some(star_label(index).map_or_else(Id::unique, Id::new)),
        Star::Rated => None,
    }
}

/// Build a row of `max_rating` identical stars
pub fn view<'a, Message: 'a>(star: Star, max_rating: u32, metrics: StarMetrics) -> Element<'a, Message> {
    let handle = svg::Handle::from_memory(star.icon().as_bytes());

    let stars = (0..max_rating).map(|index| {
        let icon = container(svg(handle.clone()).width(metrics.size).height(metrics.size));

        match star_id(star, index) {
            Some(id) => icon.id(id).into(),
            None => icon.into(),
        }
    });

    Row::with_children(stars)
        .spacing(metrics.spacing)
        .align_y(Alignment::Center)
        .into()
}

/// Default unrated layer
pub fn unrated<'a, Message: 'a>(max_rating: u32, metrics: StarMetrics) -> Element<'a, Message> {
    view(Star::Unrated, max_rating, metrics)
}

/// Default rated layer
pub fn rated<'a, Message: 'a>(max_rating: u32, metrics: StarMetrics) -> Element<'a, Message> {
    view(Star::Rated, max_rating, metrics)
}
