//! Host configuration
//!
//! Optional TOML file selecting the startup look and feel:
//!
//! ```toml
//! language = "cupertino"
//! dark = false
//! ```

use std::path::Path;

use lookfeel_core::{ColorScheme, ConfigError, DesignLanguage, LookAndFeelSelection};
use serde::Deserialize;

use crate::error::AppError;

/// Parsed config file contents.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Stable design language id (`material3`, `cupertino`).
    pub language: String,
    /// Start in dark mode.
    #[serde(default)]
    pub dark: bool,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Resolve to a selection. An unknown language id fails fast instead of
    /// silently falling back to a default language.
    pub fn selection(&self) -> Result<LookAndFeelSelection, ConfigError> {
        let language = DesignLanguage::from_id(&self.language)
            .ok_or_else(|| ConfigError::UnknownLanguageId(self.language.clone()))?;
        let scheme = if self.dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        Ok(LookAndFeelSelection::new(language, scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_resolve() {
        let config: AppConfig = toml::from_str("language = \"material3\"\ndark = true\n").unwrap();
        let selection = config.selection().unwrap();
        assert_eq!(selection.language, DesignLanguage::Material3);
        assert!(selection.is_dark());
    }

    #[test]
    fn test_dark_defaults_to_false() {
        let config: AppConfig = toml::from_str("language = \"cupertino\"\n").unwrap();
        assert!(!config.selection().unwrap().is_dark());
    }

    #[test]
    fn test_unknown_language_id_fails_fast() {
        let config: AppConfig = toml::from_str("language = \"fluent\"\n").unwrap();
        assert_eq!(
            config.selection().err(),
            Some(ConfigError::UnknownLanguageId("fluent".into()))
        );
    }
}
