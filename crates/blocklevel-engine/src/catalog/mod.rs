//! # Tier Catalog
//!
//! Static mapping from tier → category → block identifiers introduced at that
//! tier, plus the cumulative lookup that unions a tier with every tier below it.
//!
//! ## Key Invariants
//!
//! - A catalog is immutable once built; share it by reference.
//! - Cumulative sets are monotonic: the set visible at tier N is a superset of
//!   the set visible at tier N-1, for every category.
//! - Unknown tier names produce an empty [`AllowedBlocks`], never an error.

mod builtin;
mod tutorials;

pub use tutorials::tutorial_tier;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::tier::{Tier, UnknownTier};

/// Category → identifiers introduced at a single tier, in authoring order.
pub type TierEntries = BTreeMap<String, Vec<String>>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog table names {0}")]
    UnknownTier(#[from] UnknownTier),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierCatalog {
    tiers: BTreeMap<Tier, TierEntries>,
}

static BUILTIN: LazyLock<TierCatalog> = LazyLock::new(builtin::reference_catalog);

impl TierCatalog {
    /// The reference four-tier table, built on first use.
    pub fn builtin() -> &'static TierCatalog {
        &BUILTIN
    }

    pub fn new(tiers: BTreeMap<Tier, TierEntries>) -> Self {
        Self { tiers }
    }

    /// Parses a catalog from TOML with one table per tier:
    ///
    /// ```
    /// use blocklevel_engine::{Tier, TierCatalog};
    ///
    /// let catalog = TierCatalog::from_toml_str(r#"
    /// [explorer]
    /// motion = ["motion_movesteps"]
    /// "#).unwrap();
    /// assert!(catalog.is_allowed("motion_movesteps", "creator"));
    /// assert!(catalog.entries(Tier::Master).is_none());
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, TierEntries> = toml::from_str(content)?;
        let tiers = raw
            .into_iter()
            .map(|(name, entries)| Ok((name.parse::<Tier>()?, entries)))
            .collect::<Result<_, UnknownTier>>()?;
        Ok(Self { tiers })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Identifiers introduced at exactly `tier` (not cumulative).
    pub fn entries(&self, tier: Tier) -> Option<&TierEntries> {
        self.tiers.get(&tier)
    }

    /// Cumulative Allowed Set for every category at the named tier.
    ///
    /// An unrecognized tier name yields an empty mapping, which downstream
    /// renders as empty categories rather than failing.
    pub fn allowed_blocks(&self, level: &str) -> AllowedBlocks {
        match Tier::parse(level) {
            Some(tier) => self.allowed_blocks_for(tier),
            None => {
                log::debug!("Unknown tier {level:?}; no blocks allowed");
                AllowedBlocks::default()
            }
        }
    }

    /// Cumulative Allowed Set for every category at `tier`.
    pub fn allowed_blocks_for(&self, tier: Tier) -> AllowedBlocks {
        let mut allowed = AllowedBlocks::default();
        for entries in tier.and_below().filter_map(|t| self.tiers.get(&t)) {
            for (category, blocks) in entries {
                allowed
                    .categories
                    .entry(category.clone())
                    .or_default()
                    .extend(blocks.iter().cloned());
            }
        }
        allowed
    }

    /// True iff `block_id` is in any category's cumulative set at the named tier.
    pub fn is_allowed(&self, block_id: &str, level: &str) -> bool {
        self.allowed_blocks(level).contains(block_id)
    }
}

/// Derived, order-insensitive view: category → identifiers visible at a tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllowedBlocks {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl AllowedBlocks {
    pub fn category(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    /// True if `block_id` appears under any category.
    pub fn contains(&self, block_id: &str) -> bool {
        self.categories.values().any(|blocks| blocks.contains(block_id))
    }

    pub fn contains_in(&self, category: &str, block_id: &str) -> bool {
        self.category(category)
            .is_some_and(|blocks| blocks.contains(block_id))
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeSet::is_empty)
    }
}
