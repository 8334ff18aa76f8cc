// src/app/state.rs
//! Application state structures

use std::time::Instant;

use crate::api::{ApiClient, InterestPayload, SurveyPayload};
use crate::app::message::HoverId;
use crate::features::form::SubmitPhase;
use crate::features::settings::Settings;
use crate::features::stats::{StatsSnapshot, StatsState};
use crate::i18n::Locale;
use crate::ui::animation::{HoverAnimations, RampCounter, ViewTrigger};
use crate::ui::components::Page;

/// Main application state
pub struct App {
    /// Core state (settings, locale, backend client)
    pub core: CoreState,
    /// UI state (active page, per-page state, animations)
    pub ui: UiState,
}

/// Core application state
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// HTTP client for the questionário backend
    pub api: ApiClient,
}

impl CoreState {
    pub fn new() -> Self {
        let settings = Settings::load();
        let locale = Locale {
            language: settings.display.language(),
        };
        Self {
            settings,
            locale,
            api: ApiClient::from_env(),
        }
    }
}

/// Navigation history for back/forward functionality
#[derive(Debug, Default)]
pub struct NavigationHistory {
    /// History stack
    pub entries: Vec<Page>,
    /// Current position in history (index)
    pub current_index: Option<usize>,
}

impl NavigationHistory {
    /// Record a visit. Anything ahead of the current position is dropped,
    /// exactly like a browser history.
    pub fn push(&mut self, entry: Page) {
        if let Some(idx) = self.current_index {
            // Re-selecting the current page is not a new hop
            if self.entries.get(idx) == Some(&entry) {
                return;
            }
            self.entries.truncate(idx + 1);
        }
        self.entries.push(entry);
        self.current_index = Some(self.entries.len() - 1);
    }

    /// Step back, returning the page to show
    pub fn go_back(&mut self) -> Option<Page> {
        let target = self.current_index?.checked_sub(1)?;
        self.current_index = Some(target);
        self.entries.get(target).copied()
    }

    /// Step forward, returning the page to show
    pub fn go_forward(&mut self) -> Option<Page> {
        let target = self.current_index? + 1;
        if target >= self.entries.len() {
            return None;
        }
        self.current_index = Some(target);
        self.entries.get(target).copied()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index.is_some_and(|idx| idx > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index
            .is_some_and(|idx| idx + 1 < self.entries.len())
    }
}

/// The three ramping figures in the landing page statistics band
#[derive(Debug, Clone, Copy)]
pub struct StatCounters {
    pub total: RampCounter,
    pub awareness: RampCounter,
    pub correct_cause: RampCounter,
}

impl StatCounters {
    pub fn new(snapshot: &StatsSnapshot) -> Self {
        Self {
            total: RampCounter::new(snapshot.total_responses),
            awareness: RampCounter::new(u64::from(snapshot.awareness_pct)),
            correct_cause: RampCounter::new(u64::from(snapshot.correct_cause_pct)),
        }
    }

    /// Begin all three ramps. Idempotent, a later call changes nothing.
    pub fn start(&mut self, now: Instant) {
        self.total.start(now);
        self.awareness.start(now);
        self.correct_cause.start(now);
    }

    pub fn has_started(&self) -> bool {
        self.total.has_started()
    }

    /// Whether any ramp still has frames left to draw
    pub fn is_animating(&self, now: Instant) -> bool {
        self.has_started()
            && !(self.total.is_complete(now)
                && self.awareness.is_complete(now)
                && self.correct_cause.is_complete(now))
    }
}

/// Landing page state
pub struct HomePageState {
    /// Lifecycle of the aggregated statistics fetch
    pub stats: StatsState,
    /// Count-up figures, present once a payload has arrived
    pub counters: Option<StatCounters>,
    /// One-shot trigger that starts the figures when scrolled into view
    pub counters_trigger: ViewTrigger,
    /// Current scroll offset of the page in px
    pub scroll_offset: f32,
}

impl HomePageState {
    pub fn new() -> Self {
        Self {
            stats: StatsState::Loading,
            counters: None,
            counters_trigger: ViewTrigger::default(),
            scroll_offset: 0.0,
        }
    }
}

/// Fistula article page state
pub struct AboutPageState {
    /// Section highlighted in the side menu
    pub active_section: usize,
    /// Current scroll offset of the page in px
    pub scroll_offset: f32,
}

impl AboutPageState {
    pub fn new() -> Self {
        Self {
            active_section: 0,
            scroll_offset: 0.0,
        }
    }
}

/// Questionnaire form state
#[derive(Debug, Default)]
pub struct SurveyPageState {
    /// Age bracket wire value, empty means "prefer not to say"
    pub faixa_etaria: &'static str,
    /// Gender wire value, empty means "prefer not to say"
    pub genero: &'static str,
    pub provincia: String,
    /// Q1 answer, `None` until the reader picks one
    pub ja_ouviu_falar: Option<&'static str>,
    /// Q2 answer
    pub definicao: Option<&'static str>,
    /// Q3 checked causes, in the order they were ticked
    pub causas: Vec<&'static str>,
    /// Q4 answer
    pub tratavel: Option<&'static str>,
    pub phase: SubmitPhase,
}

impl SurveyPageState {
    /// Whether every required question has an answer
    pub fn is_answerable(&self) -> bool {
        self.ja_ouviu_falar.is_some() && self.definicao.is_some() && self.tratavel.is_some()
    }

    pub fn set_causa(&mut self, value: &'static str, checked: bool) {
        if checked {
            if !self.causas.contains(&value) {
                self.causas.push(value);
            }
        } else {
            self.causas.retain(|v| *v != value);
        }
    }

    /// Build the wire payload from the current answers.
    ///
    /// The backend schema also accepts symptom, prevention and free-text
    /// fields that this questionnaire does not ask about; they go out
    /// empty.
    pub fn payload(&self) -> SurveyPayload {
        SurveyPayload {
            faixa_etaria: self.faixa_etaria.to_string(),
            genero: self.genero.to_string(),
            provincia: self.provincia.trim().to_string(),
            ja_ouviu_falar: self.ja_ouviu_falar.unwrap_or_default().to_string(),
            definicao: self.definicao.unwrap_or_default().to_string(),
            causas: self.causas.iter().map(|v| v.to_string()).collect(),
            sintomas: Vec::new(),
            tratavel: self.tratavel.unwrap_or_default().to_string(),
            prevencao: Vec::new(),
            informacao_adicional: String::new(),
        }
    }
}

/// Interest registration form state
#[derive(Debug, Default)]
pub struct InterestPageState {
    pub nome: String,
    pub email: String,
    pub organizacao: String,
    pub cargo: String,
    pub mensagem: String,
    pub phase: SubmitPhase,
}

impl InterestPageState {
    /// Whether the required fields hold plausible values
    pub fn is_submittable(&self) -> bool {
        !self.nome.trim().is_empty() && looks_like_email(&self.email)
    }

    pub fn payload(&self) -> InterestPayload {
        InterestPayload {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            organizacao: self.organizacao.trim().to_string(),
            cargo: self.cargo.trim().to_string(),
            mensagem: self.mensagem.trim().to_string(),
        }
    }
}

/// Loose shape check, the backend does the real validation
pub fn looks_like_email(value: &str) -> bool {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// UI View State
pub struct UiState {
    pub active_page: Page,

    /// Navigation history for back/forward
    pub nav_history: NavigationHistory,

    // Sub-modules
    pub home: HomePageState,
    pub about: AboutPageState,
    pub survey: SurveyPageState,
    pub interest: InterestPageState,

    // Shared chrome
    pub hover_animations: HoverAnimations<HoverId>,
    /// Clock sampled on the last animation tick, drives the count-ups
    pub animation_now: Instant,
    pub window_size: iced::Size,
    /// Video link last copied to the clipboard, for button feedback
    pub copied_url: Option<&'static str>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_page: Page::Home,
            nav_history: {
                let mut history = NavigationHistory::default();
                history.push(Page::Home);
                history
            },
            home: HomePageState::new(),
            about: AboutPageState::new(),
            survey: SurveyPageState::default(),
            interest: InterestPageState::default(),
            hover_animations: Default::default(),
            animation_now: Instant::now(),
            window_size: iced::Size::new(1280.0, 860.0),
            copied_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod navigation_history {
        use super::*;

        #[test]
        fn starts_with_nothing_to_traverse() {
            let history = NavigationHistory::default();
            assert!(!history.can_go_back());
            assert!(!history.can_go_forward());
        }

        #[test]
        fn back_and_forward_walk_the_stack() {
            let mut history = NavigationHistory::default();
            history.push(Page::Home);
            history.push(Page::AboutFistula);
            history.push(Page::Survey);

            assert_eq!(history.go_back(), Some(Page::AboutFistula));
            assert_eq!(history.go_back(), Some(Page::Home));
            assert!(!history.can_go_back());

            assert_eq!(history.go_forward(), Some(Page::AboutFistula));
            assert_eq!(history.go_forward(), Some(Page::Survey));
            assert!(!history.can_go_forward());
        }

        #[test]
        fn push_clears_the_forward_branch() {
            let mut history = NavigationHistory::default();
            history.push(Page::Home);
            history.push(Page::AboutFistula);
            history.go_back();

            history.push(Page::Interest);
            assert!(
                !history.can_go_forward(),
                "A new visit replaces the abandoned forward entries"
            );
            assert_eq!(history.go_back(), Some(Page::Home));
        }

        #[test]
        fn back_at_the_start_changes_nothing() {
            let mut history = NavigationHistory::default();
            history.push(Page::Home);
            assert_eq!(history.go_back(), None);
            assert_eq!(history.current_index, Some(0));
        }
    }

    mod survey_state {
        use super::*;

        #[test]
        fn unanswered_questions_block_submission() {
            let mut state = SurveyPageState::default();
            assert!(!state.is_answerable());

            state.ja_ouviu_falar = Some("sim");
            state.definicao = Some("abertura");
            assert!(!state.is_answerable(), "Q4 is still open");

            state.tratavel = Some("sim");
            assert!(state.is_answerable());
        }

        #[test]
        fn demographics_are_not_required() {
            let mut state = SurveyPageState::default();
            state.ja_ouviu_falar = Some("nao");
            state.definicao = Some("nao_sabe");
            state.tratavel = Some("nao_sei");
            assert!(state.is_answerable());

            let payload = state.payload();
            assert_eq!(payload.faixa_etaria, "");
            assert_eq!(payload.genero, "");
            assert_eq!(payload.provincia, "");
        }

        #[test]
        fn causa_toggle_keeps_tick_order_and_dedupes() {
            let mut state = SurveyPageState::default();
            state.set_causa("parto_prolongado", true);
            state.set_causa("falta_higiene", true);
            state.set_causa("parto_prolongado", true);
            assert_eq!(state.causas, vec!["parto_prolongado", "falta_higiene"]);

            state.set_causa("parto_prolongado", false);
            assert_eq!(state.causas, vec!["falta_higiene"]);
        }

        #[test]
        fn payload_trims_the_free_text_field() {
            let mut state = SurveyPageState::default();
            state.provincia = "  Huambo ".to_string();
            state.ja_ouviu_falar = Some("sim");
            state.definicao = Some("abertura");
            state.tratavel = Some("sim");

            let payload = state.payload();
            assert_eq!(payload.provincia, "Huambo");
            assert!(payload.sintomas.is_empty());
            assert!(payload.prevencao.is_empty());
            assert_eq!(payload.informacao_adicional, "");
        }
    }

    mod interest_state {
        use super::*;

        #[test]
        fn name_and_email_gate_submission() {
            let mut state = InterestPageState::default();
            assert!(!state.is_submittable());

            state.nome = "Joana".to_string();
            assert!(!state.is_submittable());

            state.email = "joana@exemplo.ao".to_string();
            assert!(state.is_submittable());
        }

        #[test]
        fn successful_registration_swaps_the_form_for_the_confirmation() {
            let mut state = InterestPageState {
                nome: "Joana".to_string(),
                email: "joana@exemplo.ao".to_string(),
                ..Default::default()
            };
            assert!(state.phase.begin());
            state.phase.succeed();

            // The page branches on this flag to drop the form entirely.
            assert!(state.phase.is_success());
            assert!(!state.phase.begin(), "registering is a one-time act");
        }

        #[test]
        fn optional_fields_pass_through_trimmed() {
            let state = InterestPageState {
                nome: " Joana ".to_string(),
                email: "joana@exemplo.ao".to_string(),
                organizacao: String::new(),
                cargo: "  ".to_string(),
                mensagem: " Olá ".to_string(),
                phase: SubmitPhase::Idle,
            };

            let payload = state.payload();
            assert_eq!(payload.nome, "Joana");
            assert_eq!(payload.organizacao, "");
            assert_eq!(payload.cargo, "");
            assert_eq!(payload.mensagem, "Olá");
        }
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("  padded@exemplo.ao "));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("semarroba"));
        assert!(!looks_like_email("a@semdominio"));
        assert!(!looks_like_email("a@.co"));
    }
}
