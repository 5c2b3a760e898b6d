use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{LocaleConfig, LocalizationMode, Messages};

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Failed to read locale file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid locale messages: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere custom messages can be loaded from.
pub trait CustomLocaleSource {
    /// Messages for `locale`, or `None` when the source has none.
    fn load(&self, locale: &str) -> Result<Option<Messages>, LocaleError>;
}

/// Reads `<root>/<locale>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{locale}.json"))
    }
}

impl CustomLocaleSource for DirectorySource {
    fn load(&self, locale: &str) -> Result<Option<Messages>, LocaleError> {
        let path = self.locale_path(locale);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|source| LocaleError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

/// Custom message counts per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationStats {
    pub coverage: BTreeMap<String, usize>,
    pub custom_keys: usize,
}

#[derive(Debug, Default)]
pub struct LocaleManager {
    config: LocaleConfig,
    custom: BTreeMap<String, Messages>,
    loaded: BTreeSet<String>,
    stats: TranslationStats,
}

fn non_empty<'m>(messages: Option<&'m Messages>, key: &str) -> Option<&'m str> {
    messages
        .and_then(|m| m.get(key))
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

impl LocaleManager {
    pub fn new(config: LocaleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    pub fn mode(&self) -> LocalizationMode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: LocalizationMode) {
        self.config.mode = mode;
    }

    /// Loads the custom messages for `locale` from `source`.
    ///
    /// With caching enabled a locale is read at most once. A locale the
    /// source cannot provide, or fails to read, ends up with no messages.
    pub fn load_custom_locale(
        &mut self,
        locale: &str,
        source: &dyn CustomLocaleSource,
    ) -> &Messages {
        let cached = self.config.enable_cache && self.loaded.contains(locale);
        if !cached {
            let messages = match source.load(locale) {
                Ok(Some(messages)) => {
                    log::debug!("Loaded {} custom messages for {locale}", messages.len());
                    messages
                }
                Ok(None) => {
                    log::debug!("No custom messages for {locale}");
                    Messages::new()
                }
                Err(e) => {
                    log::warn!("Failed to load custom locale {locale}: {e}");
                    Messages::new()
                }
            };
            self.update_stats(locale, messages.len());
            self.custom.insert(locale.to_string(), messages);
            self.loaded.insert(locale.to_string());
        }
        self.custom.entry(locale.to_string()).or_default()
    }

    /// Forgets which locales were loaded so the next load re-reads them.
    pub fn clear_cache(&mut self) {
        self.loaded.clear();
    }

    pub fn custom_messages(&self, locale: &str) -> Option<&Messages> {
        self.custom.get(locale)
    }

    /// The message catalog for `locale` under the current mode.
    pub fn hybrid_messages(&self, locale: &str, official: &Messages) -> Messages {
        let custom = self.custom.get(locale);
        match self.config.mode {
            LocalizationMode::CustomOnly => custom.cloned().unwrap_or_default(),
            LocalizationMode::OfficialOnly => official.clone(),
            LocalizationMode::Hybrid => {
                let mut merged = official.clone();
                if let Some(custom) = custom {
                    merged.extend(custom.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                merged
            }
        }
    }

    /// Looks up one message.
    ///
    /// Order: custom for `locale`, official (unless custom-only), custom for
    /// the fallback locale, `default`, then the key itself. Empty strings
    /// count as missing.
    pub fn translation(
        &self,
        key: &str,
        locale: &str,
        official: &Messages,
        default: &str,
    ) -> String {
        if let Some(value) = non_empty(self.custom.get(locale), key) {
            return value.to_string();
        }
        if self.config.mode != LocalizationMode::CustomOnly
            && let Some(value) = non_empty(Some(official), key)
        {
            return value.to_string();
        }
        if locale != self.config.fallback_locale
            && let Some(value) = non_empty(self.custom.get(&self.config.fallback_locale), key)
        {
            return value.to_string();
        }
        if default.is_empty() {
            key.to_string()
        } else {
            default.to_string()
        }
    }

    pub fn has_custom_translation(&self, key: &str, locale: &str) -> bool {
        non_empty(self.custom.get(locale), key).is_some()
    }

    pub fn set_custom_translation(&mut self, key: &str, value: &str, locale: &str) {
        let messages = self.custom.entry(locale.to_string()).or_default();
        messages.insert(key.to_string(), value.to_string());
        let count = messages.len();
        self.update_stats(locale, count);
    }

    pub fn remove_custom_translation(&mut self, key: &str, locale: &str) {
        if let Some(messages) = self.custom.get_mut(locale) {
            messages.remove(key);
            let count = messages.len();
            self.update_stats(locale, count);
        }
    }

    pub fn stats(&self) -> &TranslationStats {
        &self.stats
    }

    /// Custom messages for `locale` as pretty-printed JSON.
    pub fn export_custom_messages(&self, locale: &str) -> Result<String, LocaleError> {
        let empty = Messages::new();
        let messages = self.custom.get(locale).unwrap_or(&empty);
        Ok(serde_json::to_string_pretty(messages)?)
    }

    /// Replaces the custom messages for `locale`. Invalid JSON leaves the
    /// current messages untouched.
    pub fn import_custom_messages(&mut self, locale: &str, json: &str) -> Result<(), LocaleError> {
        let messages: Messages = serde_json::from_str(json)?;
        self.update_stats(locale, messages.len());
        self.custom.insert(locale.to_string(), messages);
        Ok(())
    }

    fn update_stats(&mut self, locale: &str, count: usize) {
        self.stats.coverage.insert(locale.to_string(), count);
        self.stats.custom_keys = self.stats.coverage.values().sum();
    }
}
