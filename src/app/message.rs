//! Application messages

use crate::api::{ApiError, StatsResponse};
use crate::i18n::Language;
use crate::ui::components::Page;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception
    Noop,

    // ============ Navigation ============
    /// Header menu item selected
    Navigate(Page),
    /// Navigate back in history
    NavigateBack,
    /// Navigate forward in history
    NavigateForward,
    /// Jump link on the fistula page selected (index into the section list)
    JumpToAboutSection(usize),
    /// Open an external link in the system browser
    OpenUrl(&'static str),
    /// Copy an external link to the clipboard
    CopyLink(&'static str),
    /// Hover over a tracked element
    Hover(Option<HoverId>),

    // ============ Scroll tracking ============
    /// Home page scrollable moved (y offset in px)
    HomeScrolled(f32),
    /// Fistula page scrollable moved (y offset in px)
    AboutScrolled(f32),

    // ============ Statistics ============
    /// Reload the public statistics from the API
    RefreshStats,
    /// Statistics fetch finished
    StatsLoaded(Result<StatsResponse, ApiError>),

    // ============ Survey form ============
    /// Age bracket picked in the demographics block
    SurveyAgeSelected(&'static str),
    /// Gender picked in the demographics block
    SurveyGenderSelected(&'static str),
    /// Province text input edited
    SurveyProvinceChanged(String),
    /// "Already heard of fistula" answer picked
    SurveyHeardSelected(&'static str),
    /// "What is fistula" answer picked
    SurveyDefinitionSelected(&'static str),
    /// Cause checkbox toggled
    SurveyCauseToggled(&'static str, bool),
    /// "Is fistula treatable" answer picked
    SurveyTreatableSelected(&'static str),
    /// Send the survey to the API
    SubmitSurvey,
    /// Survey request finished
    SurveySubmitted(Result<(), ApiError>),
    /// Clear the submitted survey and show a fresh form
    SurveyReset,

    // ============ Interest form ============
    /// Name text input edited
    InterestNameChanged(String),
    /// Email text input edited
    InterestEmailChanged(String),
    /// Organization text input edited
    InterestOrganizationChanged(String),
    /// Role text input edited
    InterestRoleChanged(String),
    /// Message text area edited
    InterestMessageChanged(String),
    /// Send the interest registration to the API
    SubmitInterest,
    /// Interest request finished
    InterestSubmitted(Result<(), ApiError>),

    // ============ Settings ============
    /// Change application language
    UpdateAppLanguage(Language),
    /// Toggle dark mode
    UpdateDarkMode(bool),
    /// Persist settings to disk
    SaveSettings,

    // ============ Keyboard ============
    /// Raw key press from the keyboard subscription
    KeyPressed(iced::keyboard::Key, iced::keyboard::Modifiers),

    // ============ Window & animation ============
    /// Per-frame tick driving counters and hover transitions
    AnimationTick,
    /// Window resized
    WindowResized(iced::Size),
    /// Window close requested
    RequestClose,
}

/// Hoverable element identifiers for animation tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverId {
    /// Header navigation items by position
    Nav(usize),
    /// Gear button in the header
    HeaderSettings,
    /// Jump links on the fistula page by section index
    SideLink(usize),
    /// Call-to-action buttons by position
    Cta(usize),
}
