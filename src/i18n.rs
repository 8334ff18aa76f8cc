//! Internationalization (i18n) support
//! Interface chrome is bilingual; long-form editorial content stays
//! Portuguese (see `features::content`).
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - pt.rs: Portuguese translations (default)
//! - en.rs: English translations

mod en;
mod pt;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Portuguese => "Português",
            Language::English => "English",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }

    /// Parse a language code, falling back to the default language
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::English,
            _ => Language::Portuguese,
        }
    }

    /// Thousands separator used when formatting counters
    /// Portuguese groups with a non-breaking space ("2 000 000"),
    /// English with a comma ("2,000,000").
    pub fn thousands_separator(&self) -> char {
        match self {
            Language::Portuguese => '\u{00A0}',
            Language::English => ',',
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Portuguese, Language::English]
    }
}

/// Every chrome string the interface can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,
    AppTagline,

    // Navigation
    NavHome,
    NavAbout,
    NavSolution,
    NavPrevention,
    NavSurvey,
    NavInterest,
    NavSettings,

    // Navigation Controls
    Back,
    Forward,

    // Common UI
    Retry,
    BackToHome,
    OnThisPage,

    // Video references
    VideoOpen,
    VideoCopyLink,
    VideoLinkCopied,

    // Home - dynamic statistics section
    StatsKicker,
    StatsTitle,
    StatsIntro,
    StatsLoading,
    StatsUnavailable,
    StatsTotalLabel,
    StatsAwarenessLabel,
    StatsCauseLabel,
    StatsUpdatedAt,

    // Home - calls to action
    HomeSurveyAction,
    HomeInterestAction,
    HomeSolutionAction,

    // Survey page
    SurveyTitle,
    SurveyIntro,
    SurveyDemographicsTitle,
    SurveyAgeLabel,
    SurveyGenderLabel,
    SurveyProvinceLabel,
    SurveyProvincePlaceholder,
    SurveyPreferNotToSay,
    SurveyQ1Title,
    SurveyQ2Title,
    SurveyQ3Title,
    SurveyQ4Title,
    SurveyYes,
    SurveyNo,
    SurveyGenderFemale,
    SurveyGenderMale,
    SurveyGenderOther,
    SurveyAgeUnder18,
    SurveyAge18To25,
    SurveyAge26To35,
    SurveyAge36To50,
    SurveyAgeOver50,
    SurveyDefInfection,
    SurveyDefOpening,
    SurveyDefGenetic,
    SurveyDefUnknown,
    SurveyCauseProlongedLabor,
    SurveyCauseHygiene,
    SurveyCausePhysicalEffort,
    SurveyCauseFailedSurgery,
    SurveyTreatableYes,
    SurveyTreatableNo,
    SurveyTreatableUnknown,
    SurveySubmit,
    SurveySubmitting,
    SurveyValidationMissing,
    SurveyRejectedFallback,
    SurveySuccessTitle,
    SurveySuccessBody,
    SurveyAnswerAgain,

    // Interest page
    InterestTitle,
    InterestIntro,
    InterestNamePlaceholder,
    InterestEmailPlaceholder,
    InterestOrgPlaceholder,
    InterestRolePlaceholder,
    InterestMessagePlaceholder,
    InterestSubmit,
    InterestValidationMissing,
    InterestRejectedFallback,
    InterestSuccessTitle,
    InterestSuccessBody,

    // Shared form errors
    GenericSubmitError,

    // Footer
    FooterRights,
    FooterCredit,

    // Settings Page
    SettingsTitle,
    SettingsDisplayTitle,
    SettingsLanguage,
    SettingsLanguageDesc,
    SettingsDarkMode,
    SettingsDarkModeDesc,
    SettingsAboutTitle,
    SettingsVersion,
    SettingsApiUrl,
    SettingsApiUrlDesc,
    SettingsDescription,
}

/// Resolve a chrome string in the given language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Portuguese => pt::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Format a counter value with the language's thousands separator
pub fn format_count(lang: Language, value: u64) -> String {
    let digits = value.to_string();
    let sep = lang.thousands_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }

    out
}

/// Copyable language context handed down to every view
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Look up one chrome string
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_is_default() {
        assert_eq!(Language::default(), Language::Portuguese);
        assert_eq!(Locale::default().get(Key::NavHome), "Início");
    }

    #[test]
    fn from_code_round_trips() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_portuguese() {
        assert_eq!(Language::from_code("fr"), Language::Portuguese);
    }

    #[test]
    fn stats_labels_translated_in_both_languages() {
        assert_eq!(
            t(Language::Portuguese, Key::StatsTotalLabel),
            "Total de Respostas Recebidas"
        );
        assert_eq!(
            t(Language::English, Key::StatsTotalLabel),
            "Total responses received"
        );
    }

    #[test]
    fn counters_group_thousands_per_language() {
        assert_eq!(format_count(Language::English, 2_000_000), "2,000,000");
        assert_eq!(
            format_count(Language::Portuguese, 2_000_000),
            "2\u{00A0}000\u{00A0}000"
        );
        assert_eq!(format_count(Language::English, 999), "999");
        assert_eq!(format_count(Language::Portuguese, 0), "0");
        assert_eq!(format_count(Language::English, 1_000), "1,000");
    }
}
