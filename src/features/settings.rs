//! User preferences (language, theme) persisted as JSON
//! in the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Application color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppTheme {
    /// Light theme (default, matches the public site)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl AppTheme {
    /// All available themes
    pub fn all() -> &'static [AppTheme] {
        &[AppTheme::Light, AppTheme::Dark]
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, AppTheme::Dark)
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Application language code ("pt" or "en")
    pub language: String,
    /// Color theme
    #[serde(default)]
    pub theme: AppTheme,
}

impl DisplaySettings {
    /// Resolve the stored language code
    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            theme: AppTheme::Light,
        }
    }
}

impl Settings {
    /// Platform-specific path of the settings file
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "meubebeeeu", "MeuBebeEEu")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found.
    /// A corrupt file is reported and ignored, never a crash.
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            // First run
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Unusable settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and parse one settings file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Write the settings to their default location
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = Self::file_path() else {
            return Err(SettingsError::Io(
                "could not determine the config directory".to_string(),
            ));
        };
        self.save_to_file(&path)
    }

    /// Write the settings to a specific file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))
    }
}

/// Why a settings file could not be read or written
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings file I/O failed: {}", e),
            SettingsError::Parse(e) => write!(f, "settings file is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_portuguese_and_light() {
        let settings = Settings::default();
        assert_eq!(settings.display.language(), Language::Portuguese);
        assert_eq!(settings.display.theme, AppTheme::Light);
    }

    #[test]
    fn tolerates_missing_and_unknown_fields() {
        // Older settings files may miss sections; newer ones may have extras.
        let settings: Settings =
            serde_json::from_str(r#"{"display":{"language":"en"},"legacy_field":3}"#)
                .expect("partial settings should still parse");
        assert_eq!(settings.display.language(), Language::English);
        assert_eq!(settings.display.theme, AppTheme::Light);
    }

    #[test]
    fn round_trips_through_json() {
        let mut settings = Settings::default();
        settings.display.language = "en".to_string();
        settings.display.theme = AppTheme::Dark;

        let json = serde_json::to_string(&settings).expect("serialize");
        let loaded: Settings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loaded.display.language(), Language::English);
        assert_eq!(loaded.display.theme, AppTheme::Dark);
    }
}
