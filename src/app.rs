//! Application core: state, messages, update loop and window view

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::Key;
pub use message::{HoverId, Message};
pub use state::{
    AboutPageState, App, CoreState, HomePageState, InterestPageState, NavigationHistory,
    StatCounters, SurveyPageState, UiState,
};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            core: CoreState::new(),
            ui: UiState::new(),
        };

        // Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: app.ui.window_size,
            min_size: Some(iced::Size::new(980.0, 640.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "meu-bebe-e-eu".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // The statistics band needs its figures as soon as possible
        let init_task = Task::batch([open_window.discard(), Task::done(Message::RefreshStats)]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.theme.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for animation frames, keyboard shortcuts and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let now = std::time::Instant::now();

        // Frame ticks run only while something is actually moving
        let needs_frames = subscription_logic::needs_animation_frames(
            self.ui.hover_animations.is_animating(),
            self.ui
                .home
                .counters
                .map(|counters| counters.is_animating(now))
                .unwrap_or(false),
        );
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // History shortcuts (Alt+arrow) come in as raw key presses
        let keyboard_sub = iced::keyboard::listen().filter_map(|event| match event {
            iced::keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, keyboard_sub, close_request_sub, resize_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Pure subscription decisions, split out so they can be unit tested
pub mod subscription_logic {
    /// Whether the per-frame tick is needed at all right now
    pub fn needs_animation_frames(hover_active: bool, counters_active: bool) -> bool {
        hover_active || counters_active
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_idle_when_nothing_animates() {
        assert!(
            !needs_animation_frames(false, false),
            "No frame subscription while the UI is at rest"
        );
    }

    #[test]
    fn frames_while_hover_transitions_run() {
        assert!(needs_animation_frames(true, false));
    }

    #[test]
    fn frames_while_counters_ramp() {
        assert!(needs_animation_frames(false, true));
    }

    #[test]
    fn frames_while_both_animate() {
        assert!(needs_animation_frames(true, true));
    }
}
