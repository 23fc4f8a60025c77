//! Demo application module
//!
//! The app owns both rating values. The rating bars only report candidate
//! values; the app stores them and passes them back on the next view.

mod message;
mod update;
mod view;

use std::path::PathBuf;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;

/// Demo application state
pub struct App {
    /// Current star rating
    rating: f32,
    /// Star rating at the end of the last gesture
    committed: Option<f32>,
    /// Current heart rating
    hearts: f32,
    settings: Settings,
    /// Where settings are saved, `None` to keep them in memory
    settings_path: Option<PathBuf>,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings_path = Settings::file_path();
        let settings = Settings::load(settings_path.as_deref());
        tracing::info!(
            "Starting with max rating {} (settings: {:?})",
            settings.rating.max_rating,
            settings_path
        );

        (Self::with_settings(settings, settings_path), Task::none())
    }

    /// Create an instance from already loaded settings
    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        Self {
            rating: 0.0,
            committed: None,
            hearts: 0.0,
            settings: Settings {
                rating: settings.rating.sanitized(),
                ..settings
            },
            settings_path,
        }
    }

    pub fn title(&self) -> String {
        String::from("Rustle Rating")
    }

    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn committed(&self) -> Option<f32> {
        self.committed
    }

    pub fn hearts(&self) -> f32 {
        self.hearts
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::MAX_RATING_LIMIT;

    fn app() -> App {
        App::with_settings(Settings::default(), None)
    }

    #[test]
    fn test_drag_then_release_commits() {
        let mut app = app();
        let _ = app.update(Message::RatingChanged(1.3));
        let _ = app.update(Message::RatingChanged(4.15));
        assert_eq!(app.rating(), 4.15);
        assert_eq!(app.committed(), None);

        let _ = app.update(Message::RatingCompleted);
        assert_eq!(app.committed(), Some(4.15));
    }

    #[test]
    fn test_hearts_are_independent() {
        let mut app = app();
        let _ = app.update(Message::HeartsChanged(3.0));
        let _ = app.update(Message::HeartsCompleted);
        assert_eq!(app.hearts(), 3.0);
        assert_eq!(app.rating(), 0.0);
        assert_eq!(app.committed(), None);
    }

    #[test]
    fn test_toggles_update_settings() {
        let mut app = app();
        let _ = app.update(Message::DraggingToggled(false));
        let _ = app.update(Message::TappingToggled(false));
        let _ = app.update(Message::DarkModeToggled(false));

        assert!(!app.settings().rating.enable_dragging);
        assert!(!app.settings().rating.enable_tapping);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_lower_max_clamps_owned_ratings() {
        let mut app = app();
        let _ = app.update(Message::RatingChanged(4.5));
        let _ = app.update(Message::HeartsChanged(5.0));
        let _ = app.update(Message::RatingCompleted);

        let _ = app.update(Message::MaxRatingSelected(3));
        assert_eq!(app.settings().rating.max_rating, 3);
        assert_eq!(app.rating(), 3.0);
        assert_eq!(app.hearts(), 3.0);
        assert_eq!(app.committed(), Some(3.0));
    }

    #[test]
    fn test_max_rating_is_bounded() {
        let mut app = app();
        let _ = app.update(Message::MaxRatingSelected(0));
        assert_eq!(app.settings().rating.max_rating, 1);
        let _ = app.update(Message::MaxRatingSelected(99));
        assert_eq!(app.settings().rating.max_rating, MAX_RATING_LIMIT);
    }

    #[test]
    fn test_reset() {
        let mut app = app();
        let _ = app.update(Message::RatingChanged(2.0));
        let _ = app.update(Message::RatingCompleted);
        let _ = app.update(Message::HeartsChanged(1.0));

        let _ = app.update(Message::Reset);
        assert_eq!(app.rating(), 0.0);
        assert_eq!(app.hearts(), 0.0);
        assert_eq!(app.committed(), None);
    }

    #[test]
    fn test_settings_are_saved_to_path() {
        let path = std::env::temp_dir()
            .join(format!("rustle-rating-app-{}", std::process::id()))
            .join("settings.json");
        let mut app = App::with_settings(Settings::default(), Some(path.clone()));

        let _ = app.update(Message::TappingToggled(false));
        let saved = Settings::load_from_file(&path).unwrap();
        assert!(!saved.rating.enable_tapping);

        let _ = std::fs::remove_file(&path);
    }
}
