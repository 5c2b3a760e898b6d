//! Persisted tier selection.

use std::collections::HashMap;

use crate::tier::Tier;

/// Key under which the selected tier name is stored.
pub const LEVEL_KEY: &str = "scratchBlockLevel";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid preference file: {0}")]
    Format(#[from] serde_json::Error),
}

/// A string key-value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the selected tier. Missing or invalid values fall back to
/// [`Tier::LOWEST`].
pub fn stored_tier(store: &dyn PreferenceStore) -> Tier {
    match store.get(LEVEL_KEY) {
        None => Tier::LOWEST,
        Some(value) => Tier::parse(&value).unwrap_or_else(|| {
            log::warn!(
                "Ignoring invalid stored level {value:?}, using {}",
                Tier::LOWEST
            );
            Tier::LOWEST
        }),
    }
}

pub fn store_tier(store: &mut dyn PreferenceStore, tier: Tier) -> Result<(), PreferenceError> {
    store.set(LEVEL_KEY, tier.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn missing_value_falls_back_to_lowest() {
        let store = MemoryStore::new();
        assert_eq!(stored_tier(&store), Tier::Explorer);
    }

    #[rstest]
    #[case("creator", Tier::Creator)]
    #[case("studio", Tier::Studio)]
    #[case("Studio", Tier::Explorer)]
    #[case("wizard", Tier::Explorer)]
    #[case("", Tier::Explorer)]
    fn stored_values_are_validated(#[case] raw: &str, #[case] expected: Tier) {
        let mut store = MemoryStore::new();
        store.set(LEVEL_KEY, raw).unwrap();
        assert_eq!(stored_tier(&store), expected);
    }

    #[test]
    fn store_then_read_back() {
        let mut store = MemoryStore::new();
        store_tier(&mut store, Tier::Master).unwrap();

        assert_eq!(store.get(LEVEL_KEY).as_deref(), Some("master"));
        assert_eq!(stored_tier(&store), Tier::Master);
    }
}
