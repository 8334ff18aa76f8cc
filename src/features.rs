//! Domain logic, kept free of UI concerns
//!
//! Statistics derivation, the form submission machine, the static
//! editorial content and settings persistence all live here so they can
//! be tested without a window.

pub mod content;
pub mod form;
pub mod settings;
pub mod stats;

pub use form::SubmitPhase;
pub use settings::{AppTheme, Settings};
pub use stats::{StatsSnapshot, StatsState};
