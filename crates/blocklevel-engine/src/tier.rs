use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A capability tier gating which blocks appear in the toolbox.
///
/// Tiers are totally ordered by their position in [`Tier::ALL`]. The highest
/// tier ([`Tier::MAX`]) disables filtering entirely.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Basic movement, appearance and simple interactions.
    Explorer,
    /// Events, basic control structures and user input.
    Creator,
    /// Advanced logic, variables and sensing.
    Master,
    /// Everything, including custom blocks and extensions.
    Studio,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tier: {0:?}")]
pub struct UnknownTier(pub String);

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 4] = [Tier::Explorer, Tier::Creator, Tier::Master, Tier::Studio];

    /// Sentinel tier meaning "no filtering".
    pub const MAX: Tier = Tier::Studio;

    /// Fallback when no valid preference is stored.
    pub const LOWEST: Tier = Tier::Explorer;

    /// Position of this tier in [`Tier::ALL`].
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Explorer => "explorer",
            Tier::Creator => "creator",
            Tier::Master => "master",
            Tier::Studio => "studio",
        }
    }

    /// Exact match on the lowercase tier name; anything else is `None`.
    pub fn parse(value: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.as_str() == value)
    }

    /// Tiers from the lowest up to and including `self`.
    pub fn and_below(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().take(self.rank() + 1)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::parse(s).ok_or_else(|| UnknownTier(s.to_string()))
    }
}
