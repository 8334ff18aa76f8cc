//! Update dispatcher, one submodule per message family

mod interest;
mod navigation;
mod settings;
mod stats;
mod survey;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Route a message to the first handler that claims it
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_stats(&message) {
            return task;
        }
        if let Some(task) = self.handle_survey(&message) {
            return task;
        }
        if let Some(task) = self.handle_interest(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        Task::none()
    }
}
