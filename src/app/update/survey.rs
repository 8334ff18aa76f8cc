// src/app/update/survey.rs
//! Questionnaire form handlers

use iced::Task;

use crate::api::ApiError;
use crate::app::helpers::submit_error_text;
use crate::app::message::Message;
use crate::app::state::{App, SurveyPageState};
use crate::i18n::Key;

impl App {
    /// Handle questionnaire form messages
    pub fn handle_survey(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            // Every edit also dismisses a stale failure message
            &Message::SurveyAgeSelected(value) => {
                self.ui.survey.faixa_etaria = value;
                self.ui.survey.phase.note_edit();
                Some(Task::none())
            }

            &Message::SurveyGenderSelected(value) => {
                self.ui.survey.genero = value;
                self.ui.survey.phase.note_edit();
                Some(Task::none())
            }

            Message::SurveyProvinceChanged(value) => {
                self.ui.survey.provincia = value.clone();
                self.ui.survey.phase.note_edit();
                Some(Task::none())
            }

            &Message::SurveyHeardSelected(value) => {
                self.ui.survey.ja_ouviu_falar = Some(value);
                self.ui.survey.phase.note_edit();
                Some(Task::none())
            }

            &Message::SurveyDefinitionSelected(value) => {
                self.ui.survey.definicao = Some(value);
                self.ui.survey.phase.note_edit();
                Some(Task::none())
            }

            &Message::SurveyCauseToggled(value, checked) => {
                self.ui.survey.set_causa(value, checked);
                self.ui.survey.phase.note_edit();
                Some(Task::none())
            }

            &Message::SurveyTreatableSelected(value) => {
                self.ui.survey.tratavel = Some(value);
                self.ui.survey.phase.note_edit();
                Some(Task::none())
            }

            Message::SubmitSurvey => {
                if !self.ui.survey.is_answerable() {
                    tracing::debug!("Survey submit blocked, required questions unanswered");
                    return Some(Task::none());
                }
                // One request at a time, and never after a success
                if !self.ui.survey.phase.begin() {
                    return Some(Task::none());
                }
                let api = self.core.api.clone();
                let payload = self.ui.survey.payload();
                Some(Task::perform(
                    async move { Message::SurveySubmitted(api.submit_survey(&payload).await) },
                    |m| m,
                ))
            }

            Message::SurveySubmitted(Ok(())) => {
                self.ui.survey.phase.succeed();
                // Bring the confirmation into view
                Some(iced::widget::operation::snap_to(
                    iced::widget::Id::new("survey_scroll"),
                    iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
                ))
            }

            Message::SurveySubmitted(Err(e)) => {
                match e {
                    ApiError::Rejected(_) => tracing::warn!("Survey rejected by backend: {}", e),
                    ApiError::Transport(_) => tracing::error!("Survey submission failed: {}", e),
                }
                let text = submit_error_text(e, self.core.locale, Key::SurveyRejectedFallback);
                self.ui.survey.phase.fail(text);
                Some(Task::none())
            }

            Message::SurveyReset => {
                self.ui.survey = SurveyPageState::default();
                Some(iced::widget::operation::snap_to(
                    iced::widget::Id::new("survey_scroll"),
                    iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
                ))
            }

            _ => None,
        }
    }
}
