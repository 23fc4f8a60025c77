//! Rating value handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_rating(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RatingChanged(value) => {
                tracing::trace!("Rating changed: {:.3}", value);
                self.rating = *value;
            }
            Message::RatingCompleted => {
                tracing::info!("Rating committed: {:.2}", self.rating);
                self.committed = Some(self.rating);
            }
            Message::HeartsChanged(value) => {
                self.hearts = *value;
            }
            Message::HeartsCompleted => {
                tracing::info!("Hearts committed: {:.2}", self.hearts);
            }
            Message::Reset => {
                self.rating = 0.0;
                self.hearts = 0.0;
                self.committed = None;
            }
            _ => return None,
        }

        Some(Task::none())
    }
}
