pub mod catalog;
pub mod io;
pub mod localization;
pub mod palette;
pub mod preference;
pub mod tier;
pub mod toolbox;

// Re-export key types for easier usage
pub use catalog::{AllowedBlocks, CatalogError, TierCatalog, TierEntries, tutorial_tier};
pub use io::*;
pub use localization::{
    CustomLocaleSource, DirectorySource, LocaleConfig, LocaleError, LocaleManager,
    LocalizationMode, Messages, SUPPORTED_LOCALES, TranslationStats, ValidationReport,
    validate_custom_locale,
};
pub use palette::{PaletteFilter, SEPARATOR};
pub use preference::{LEVEL_KEY, MemoryStore, PreferenceError, PreferenceStore, store_tier, stored_tier};
pub use tier::{Tier, UnknownTier};
pub use toolbox::{
    CategoryColors, CategoryXml, ThemeColors, ToolboxOptions, ToolboxStrings, make_toolbox,
};
