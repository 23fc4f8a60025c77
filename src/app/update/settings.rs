//! Settings handlers

use iced::Task;

use crate::app::{App, Message};
use crate::features::settings::MAX_RATING_LIMIT;

impl App {
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DraggingToggled(enabled) => {
                self.settings.rating.enable_dragging = *enabled;
            }
            Message::TappingToggled(enabled) => {
                self.settings.rating.enable_tapping = *enabled;
            }
            Message::MaxRatingSelected(max_rating) => {
                let max_rating = (*max_rating).clamp(1, MAX_RATING_LIMIT);
                self.settings.rating.max_rating = max_rating;

                // Owned values must stay within the new range
                let max = max_rating as f32;
                self.rating = self.rating.min(max);
                self.hearts = self.hearts.min(max);
                self.committed = self.committed.map(|value| value.min(max));
            }
            Message::DarkModeToggled(enabled) => {
                self.settings.display.dark_mode = *enabled;
            }
            _ => return None,
        }

        self.persist_settings();
        Some(Task::none())
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };

        if let Err(e) = self.settings.save_to_file(path) {
            tracing::warn!("Failed to save settings to {:?}: {}", path, e);
        }
    }
}
