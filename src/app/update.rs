//! Message update handlers - thin dispatcher delegating to submodules

mod rating;
mod settings;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_rating(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        tracing::warn!("Unhandled message: {:?}", message);
        Task::none()
    }
}
