//! Design-language and color-scheme selection types

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A supported design language, identified by tag.
///
/// The enumeration is closed: every variant must have a bundle registered in
/// the language registry, which is checked at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignLanguage {
    /// Material Design 3 rendering strategies.
    Material3,
    /// Apple Human Interface Guidelines rendering strategies.
    Cupertino,
}

impl DesignLanguage {
    /// Stable language id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Material3 => "material3",
            Self::Cupertino => "cupertino",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Material3 => "Material 3",
            Self::Cupertino => "Cupertino",
        }
    }

    /// Full language catalog.
    pub fn all() -> &'static [DesignLanguage] {
        const LANGUAGES: [DesignLanguage; 2] =
            [DesignLanguage::Material3, DesignLanguage::Cupertino];
        &LANGUAGES
    }

    /// Look up a language by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.id() == id)
    }
}

impl Display for DesignLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Light or dark rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The host-owned look-and-feel selection.
///
/// Copied whole into the controller and context on every change, so the
/// `language` and `scheme` halves can never be observed torn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookAndFeelSelection {
    pub language: DesignLanguage,
    pub scheme: ColorScheme,
}

impl LookAndFeelSelection {
    pub fn new(language: DesignLanguage, scheme: ColorScheme) -> Self {
        Self { language, scheme }
    }

    /// Convenience constructor mirroring the host's `(language, dark)` toggles.
    pub fn with_dark(language: DesignLanguage, dark: bool) -> Self {
        let scheme = if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        Self { language, scheme }
    }

    pub fn is_dark(self) -> bool {
        self.scheme.is_dark()
    }
}
