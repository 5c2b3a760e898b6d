//! `blocklevel` - filter toolbox palettes by skill tier.
//!
//! Commands:
//! - `filter`          - filter one category's palette file
//! - `toolbox`         - print the full toolbox document
//! - `allowed`         - print the cumulative allowed set as JSON
//! - `check`           - is a block visible at a tier?
//! - `level`           - read or store the selected tier
//! - `tutorial`        - recommended tier for a tutorial
//! - `translate`       - look up one message through the hybrid catalog
//! - `validate-locale` - check a custom locale file

use anyhow::{Context, Result, bail};
use blocklevel_config::Config;
use blocklevel_engine::{
    CategoryXml, DirectorySource, JsonPreferenceStore, LEVEL_KEY, LocaleManager,
    LocalizationMode, Messages, PaletteFilter, PreferenceStore, Tier, ToolboxOptions,
    ToolboxStrings, io, make_toolbox, store_tier, stored_tier, tutorial_tier,
    validate_custom_locale,
};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blocklevel", about = "Tier-gated toolbox palette filtering", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of ~/.config/blocklevel/config.toml
    #[arg(long, global = true, env = "BLOCKLEVEL_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter one category's palette description (`-` reads stdin)
    Filter {
        file: PathBuf,
        #[arg(short, long)]
        category: String,
        /// Tier name; defaults to the stored preference
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Print the full toolbox document for a target
    Toolbox {
        #[arg(short, long)]
        level: Option<String>,
        /// Show the stage palettes instead of a sprite's
        #[arg(long)]
        stage: bool,
        #[arg(long)]
        initial_setup: bool,
        #[arg(long, default_value = "")]
        target_id: String,
        #[arg(long, default_value = "")]
        costume: String,
        #[arg(long, default_value = "")]
        backdrop: String,
        #[arg(long, default_value = "")]
        sound: String,
        /// Locale for default values inside the palettes
        #[arg(long)]
        locale: Option<String>,
        /// Extra or replacement category, as ID=FILE
        #[arg(long = "category", value_parser = parse_category)]
        categories: Vec<(String, PathBuf)>,
    },

    /// Print the cumulative allowed set for a tier as JSON
    Allowed {
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Report whether a block is visible at a tier
    Check {
        block: String,
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Read or store the selected tier
    Level {
        #[command(subcommand)]
        action: LevelAction,
    },

    /// Recommended tier for a tutorial
    Tutorial { id: String },

    /// Look up one message through the hybrid localization catalog
    Translate {
        key: String,
        #[arg(long)]
        locale: String,
        /// Official messages as a JSON object file
        #[arg(long)]
        official: Option<PathBuf>,
        #[arg(long, default_value = "")]
        default: String,
        /// Override the configured mode (hybrid, custom-only, official-only)
        #[arg(long)]
        mode: Option<LocalizationMode>,
    },

    /// Check a custom locale file for missing or blank messages
    ValidateLocale { file: PathBuf },
}

#[derive(Subcommand)]
enum LevelAction {
    /// Print the stored tier
    Get,
    /// Store a tier
    Set { tier: Tier },
}

fn parse_category(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((id, path)) if !id.is_empty() && !path.is_empty() => {
            Ok((id.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected ID=FILE, got {value:?}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_deref())?;
    run(cli.command, &config)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let filter = PaletteFilter::new(&catalog);

    match command {
        Commands::Filter {
            file,
            category,
            level,
        } => {
            let text = read_input(&file)?;
            let level = resolve_level(level, config)?;
            print!("{}", filter.filter(&text, &category, Some(&level)));
        }
        Commands::Toolbox {
            level,
            stage,
            initial_setup,
            target_id,
            costume,
            backdrop,
            sound,
            locale,
            categories,
        } => {
            let strings = match locale {
                Some(locale) => localized_strings(config, &locale),
                None => ToolboxStrings::default(),
            };
            let options = ToolboxOptions {
                is_initial_setup: initial_setup,
                is_stage: stage,
                target_id,
                costume_name: costume,
                backdrop_name: backdrop,
                sound_name: sound,
                colors: config.theme.clone(),
                level: Some(resolve_level(level, config)?),
                strings,
            };
            let categories = categories
                .into_iter()
                .map(|(id, path)| {
                    let xml = io::read_text(&path)
                        .with_context(|| format!("reading category {id}"))?;
                    Ok(CategoryXml::new(id, xml))
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", make_toolbox(&options, &categories, &filter));
        }
        Commands::Allowed { level } => {
            let level = resolve_level(level, config)?;
            let allowed = catalog.allowed_blocks(&level);
            println!("{}", serde_json::to_string_pretty(&allowed)?);
        }
        Commands::Check { block, level } => {
            let level = resolve_level(level, config)?;
            let visible = catalog.is_allowed(&block, &level);
            println!("{block}: {}", if visible { "allowed" } else { "hidden" });
        }
        Commands::Level { action } => level_command(action, config)?,
        Commands::Tutorial { id } => println!("{}", tutorial_tier(&id)),
        Commands::Translate {
            key,
            locale,
            official,
            default,
            mode,
        } => {
            let mut manager = locale_manager(config, &locale);
            if let Some(mode) = mode {
                manager.set_mode(mode);
            }
            let official = match official {
                Some(path) => read_messages(&path)?,
                None => Messages::new(),
            };
            println!("{}", manager.translation(&key, &locale, &official, &default));
        }
        Commands::ValidateLocale { file } => {
            let messages = read_messages(&file)?;
            let report = validate_custom_locale(&messages);
            for warning in &report.warnings {
                log::warn!("{warning}");
            }
            for error in &report.errors {
                log::error!("{error}");
            }
            if !report.is_valid() {
                bail!("{} has {} error(s)", file.display(), report.errors.len());
            }
            println!("{} is valid", file.display());
        }
    }
    Ok(())
}

fn level_command(action: LevelAction, config: &Config) -> Result<()> {
    let path = config.preferences_file();
    let mut store = JsonPreferenceStore::open(&path)
        .with_context(|| format!("opening preferences at {}", path.display()))?;
    match action {
        LevelAction::Get => println!("{}", stored_or_configured(&store, config)),
        LevelAction::Set { tier } => {
            store_tier(&mut store, tier)?;
            log::info!("Stored level {tier} in {}", path.display());
        }
    }
    Ok(())
}

/// An explicit `--level` wins; otherwise the stored preference, then the
/// configured default.
fn resolve_level(explicit: Option<String>, config: &Config) -> Result<String> {
    if let Some(level) = explicit {
        return Ok(level);
    }
    let store = JsonPreferenceStore::open(config.preferences_file())?;
    Ok(stored_or_configured(&store, config).as_str().to_string())
}

fn stored_or_configured(store: &dyn PreferenceStore, config: &Config) -> Tier {
    match (store.get(LEVEL_KEY), config.level) {
        (None, Some(tier)) => tier,
        _ => stored_tier(store),
    }
}

fn locale_manager(config: &Config, locale: &str) -> LocaleManager {
    let mut manager = LocaleManager::new(config.localization.clone());
    let source = DirectorySource::new(&config.localization.custom_locales_path);
    manager.load_custom_locale(locale, &source);
    let fallback = config.localization.fallback_locale.clone();
    if fallback != locale {
        manager.load_custom_locale(&fallback, &source);
    }
    manager
}

fn localized_strings(config: &Config, locale: &str) -> ToolboxStrings {
    let manager = locale_manager(config, locale);
    let official = Messages::new();
    ToolboxStrings::translated(|id, default| manager.translation(id, locale, &official, default))
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(io::read_text(file)?)
}

fn read_messages(path: &Path) -> Result<Messages> {
    let content = io::read_text(path)?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
