use blocklevel_engine::{CatalogError, LocaleConfig, ThemeColors, Tier, TierCatalog};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tier used when no preference has been stored yet.
    pub level: Option<Tier>,
    /// TOML tier catalog replacing the builtin table.
    pub catalog_path: Option<PathBuf>,
    pub preferences_path: Option<PathBuf>,
    pub localization: LocaleConfig,
    pub theme: ThemeColors,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every configured path
        config.catalog_path = config.catalog_path.map(|p| Self::expand_path(&p).unwrap_or(p));
        config.preferences_path = config
            .preferences_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));
        let locales = &config.localization.custom_locales_path;
        if let Some(expanded) = Self::expand_path(locales) {
            config.localization.custom_locales_path = expanded;
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Where the selected tier is persisted.
    pub fn preferences_file(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("preferences.json"))
    }

    /// The configured catalog file, or the builtin table when none is set.
    pub fn load_catalog(&self) -> Result<Cow<'static, TierCatalog>, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(Cow::Owned(TierCatalog::load(path)?)),
            None => Ok(Cow::Borrowed(TierCatalog::builtin())),
        }
    }

    fn config_dir() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blocklevel");
        PathBuf::from(config_dir.as_ref())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
