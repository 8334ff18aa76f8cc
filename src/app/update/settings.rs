//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::settings::AppTheme;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            &Message::UpdateAppLanguage(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale.language = language;
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }

            &Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.theme = if enabled {
                    AppTheme::Dark
                } else {
                    AppTheme::Light
                };
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }

            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Could not persist settings: {}", e);
                } else {
                    tracing::info!("Settings written to disk");
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
