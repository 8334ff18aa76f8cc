//! Form submission lifecycle
//!
//! Both public forms (questionnaire and interest) share the same
//! submission discipline: one request in flight at a time, a terminal
//! success that replaces the form with a confirmation, and a failure
//! that keeps everything the reader typed so they can retry.

/// Phase of a form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Nothing in flight, form editable
    #[default]
    Idle,
    /// Request in flight, submit disabled
    Submitting,
    /// Accepted by the backend, the form is gone for good
    Success,
    /// Rejected or unreachable, the message is shown above the form
    Failed(String),
}

impl SubmitPhase {
    /// Try to start a submission attempt.
    ///
    /// Returns `false` while a request is already in flight or after the
    /// form has succeeded; the caller must not fire a second request in
    /// either case. Starting a retry clears the previous failure message.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmitPhase::Idle | SubmitPhase::Failed(_) => {
                *self = SubmitPhase::Submitting;
                true
            }
            SubmitPhase::Submitting | SubmitPhase::Success => false,
        }
    }

    /// Record an accepted submission. Ignored unless a request was in
    /// flight, so a stray late completion cannot resurrect a form.
    pub fn succeed(&mut self) {
        if matches!(self, SubmitPhase::Submitting) {
            *self = SubmitPhase::Success;
        }
    }

    /// Record a rejected or failed submission with the message to show
    pub fn fail(&mut self, message: String) {
        if matches!(self, SubmitPhase::Submitting) {
            *self = SubmitPhase::Failed(message);
        }
    }

    /// A field was edited. Editing after a failure dismisses the stale
    /// error text and returns the form to a plain editable state.
    pub fn note_edit(&mut self) {
        if matches!(self, SubmitPhase::Failed(_)) {
            *self = SubmitPhase::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitPhase::Success)
    }

    /// Failure message to display, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_from_idle() {
        let mut phase = SubmitPhase::Idle;
        assert!(phase.begin());
        assert!(phase.is_submitting());
    }

    #[test]
    fn refuses_second_attempt_while_in_flight() {
        let mut phase = SubmitPhase::Idle;
        assert!(phase.begin());
        assert!(!phase.begin(), "a request is already in flight");
        assert!(phase.is_submitting());
    }

    #[test]
    fn success_is_terminal() {
        let mut phase = SubmitPhase::Idle;
        phase.begin();
        phase.succeed();
        assert!(phase.is_success());
        assert!(!phase.begin(), "a submitted form never reopens");
        phase.fail("late error".to_string());
        assert!(phase.is_success(), "late completions are ignored");
    }

    #[test]
    fn failure_keeps_message_until_retry_starts() {
        let mut phase = SubmitPhase::Idle;
        phase.begin();
        phase.fail("Falha ao enviar a sua resposta.".to_string());
        assert_eq!(phase.error(), Some("Falha ao enviar a sua resposta."));

        // Untouched, the message survives until the reader retries.
        assert!(phase.begin());
        assert_eq!(phase.error(), None);
        assert!(phase.is_submitting());
    }

    #[test]
    fn editing_after_failure_clears_the_error() {
        let mut phase = SubmitPhase::Idle;
        phase.begin();
        phase.fail("Falha ao enviar a sua resposta.".to_string());

        phase.note_edit();
        assert_eq!(phase, SubmitPhase::Idle);
        assert_eq!(phase.error(), None);
    }

    #[test]
    fn edits_elsewhere_in_the_lifecycle_change_nothing() {
        let mut phase = SubmitPhase::Idle;
        phase.note_edit();
        assert_eq!(phase, SubmitPhase::Idle);

        phase.begin();
        phase.note_edit();
        assert!(phase.is_submitting());

        phase.succeed();
        phase.note_edit();
        assert!(phase.is_success());
    }

    #[test]
    fn completions_outside_a_flight_are_ignored() {
        let mut phase = SubmitPhase::Idle;
        phase.succeed();
        assert_eq!(phase, SubmitPhase::Idle);
        phase.fail("boom".to_string());
        assert_eq!(phase, SubmitPhase::Idle);
    }
}
