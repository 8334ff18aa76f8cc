//! Shared helpers for the update handlers

use crate::api::ApiError;
use crate::i18n::{Key, Locale};

/// Text shown above a form after a failed submission.
///
/// A rejection that carried a server message shows it word for word; a
/// rejection without one falls back to the form's own notice, and a
/// transport failure to the generic one.
pub fn submit_error_text(error: &ApiError, locale: Locale, rejected_fallback: Key) -> String {
    match error {
        ApiError::Rejected(Some(message)) => message.clone(),
        ApiError::Rejected(None) => locale.get(rejected_fallback).to_string(),
        ApiError::Transport(_) => locale.get(Key::GenericSubmitError).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn locale() -> Locale {
        Locale {
            language: Language::Portuguese,
        }
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let error = ApiError::Rejected(Some("Dados inválidos: email em falta".to_string()));
        assert_eq!(
            submit_error_text(&error, locale(), Key::SurveyRejectedFallback),
            "Dados inválidos: email em falta"
        );
    }

    #[test]
    fn rejection_without_message_uses_the_form_fallback() {
        let error = ApiError::Rejected(None);
        assert_eq!(
            submit_error_text(&error, locale(), Key::SurveyRejectedFallback),
            "Falha ao enviar a sua resposta."
        );
    }

    #[test]
    fn transport_failures_use_the_generic_notice() {
        let error = ApiError::Transport("connection refused".to_string());
        assert_eq!(
            submit_error_text(&error, locale(), Key::InterestRejectedFallback),
            "Ocorreu um erro. Por favor, tente novamente."
        );
    }
}
