// src/app/update/interest.rs
//! Interest registration form handlers

use iced::Task;

use crate::api::ApiError;
use crate::app::helpers::submit_error_text;
use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Key;

impl App {
    /// Handle interest form messages
    pub fn handle_interest(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            // Every edit also dismisses a stale failure message
            Message::InterestNameChanged(value) => {
                self.ui.interest.nome = value.clone();
                self.ui.interest.phase.note_edit();
                Some(Task::none())
            }

            Message::InterestEmailChanged(value) => {
                self.ui.interest.email = value.clone();
                self.ui.interest.phase.note_edit();
                Some(Task::none())
            }

            Message::InterestOrganizationChanged(value) => {
                self.ui.interest.organizacao = value.clone();
                self.ui.interest.phase.note_edit();
                Some(Task::none())
            }

            Message::InterestRoleChanged(value) => {
                self.ui.interest.cargo = value.clone();
                self.ui.interest.phase.note_edit();
                Some(Task::none())
            }

            Message::InterestMessageChanged(value) => {
                self.ui.interest.mensagem = value.clone();
                self.ui.interest.phase.note_edit();
                Some(Task::none())
            }

            Message::SubmitInterest => {
                if !self.ui.interest.is_submittable() {
                    tracing::debug!("Interest submit blocked, name or email missing");
                    return Some(Task::none());
                }
                if !self.ui.interest.phase.begin() {
                    return Some(Task::none());
                }
                let api = self.core.api.clone();
                let payload = self.ui.interest.payload();
                Some(Task::perform(
                    async move { Message::InterestSubmitted(api.submit_interest(&payload).await) },
                    |m| m,
                ))
            }

            Message::InterestSubmitted(Ok(())) => {
                self.ui.interest.phase.succeed();
                Some(iced::widget::operation::snap_to(
                    iced::widget::Id::new("interest_scroll"),
                    iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
                ))
            }

            Message::InterestSubmitted(Err(e)) => {
                match e {
                    ApiError::Rejected(_) => {
                        tracing::warn!("Interest registration rejected by backend: {}", e);
                    }
                    ApiError::Transport(_) => {
                        tracing::error!("Interest submission failed: {}", e);
                    }
                }
                let text = submit_error_text(e, self.core.locale, Key::InterestRejectedFallback);
                self.ui.interest.phase.fail(text);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
