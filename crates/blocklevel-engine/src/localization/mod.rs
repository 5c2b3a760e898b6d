//! # Hybrid Localization
//!
//! Layers custom translation overrides on top of an official message catalog.
//!
//! [`LocaleManager`] is an explicit context object: the application builds one
//! at startup and passes it to whatever needs translations. Custom messages
//! come from a [`CustomLocaleSource`], typically a [`DirectorySource`] holding
//! one `<locale>.json` file per locale.

mod manager;
mod validation;

pub use manager::{CustomLocaleSource, DirectorySource, LocaleError, LocaleManager, TranslationStats};
pub use validation::{REQUIRED_KEYS, ValidationReport, validate_custom_locale};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Message id → translated text.
pub type Messages = BTreeMap<String, String>;

/// Locales the editor ships translations for.
pub const SUPPORTED_LOCALES: [&str; 9] = ["en", "vi", "es", "fr", "de", "ja", "ko", "zh-cn", "zh-tw"];

/// Which message sources contribute to the final catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalizationMode {
    /// Custom messages override official ones.
    #[default]
    Hybrid,
    CustomOnly,
    #[serde(alias = "transifex-only")]
    OfficialOnly,
}

impl LocalizationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LocalizationMode::Hybrid => "hybrid",
            LocalizationMode::CustomOnly => "custom-only",
            LocalizationMode::OfficialOnly => "official-only",
        }
    }
}

impl fmt::Display for LocalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown localization mode: {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for LocalizationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hybrid" => Ok(LocalizationMode::Hybrid),
            "custom-only" => Ok(LocalizationMode::CustomOnly),
            "official-only" | "transifex-only" => Ok(LocalizationMode::OfficialOnly),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub mode: LocalizationMode,
    pub fallback_locale: String,
    pub custom_locales_path: PathBuf,
    /// Remember loaded locales instead of re-reading the source each time.
    pub enable_cache: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            mode: LocalizationMode::Hybrid,
            fallback_locale: "en".to_string(),
            custom_locales_path: PathBuf::from("./custom-locales/"),
            enable_cache: true,
        }
    }
}
