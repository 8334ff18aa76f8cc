// src/app/update/window.rs
//! Window and animation frame handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window and animation messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.animation_now = now;
                self.ui.hover_animations.tick(now);
                self.ui.hover_animations.cleanup_completed();
                Some(Task::none())
            }

            &Message::WindowResized(size) => {
                self.ui.window_size = size;
                // A taller window can reveal the statistics band
                self.observe_stats_band();
                Some(Task::none())
            }

            Message::RequestClose => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings on exit: {}", e);
                }
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
