//! Owned-material inventory
//!
//! A plain name-to-count map supplied by the caller. Persistence is the
//! caller's concern; the planner only reads the counts current at
//! computation time.

use crate::core::Result;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: AHashMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned count for a material, zero when untracked
    pub fn owned(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn set(&mut self, name: impl Into<String>, count: u32) {
        self.counts.insert(name.into(), count);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Load from a TOML file of `"Material Name" = count` pairs
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_get_set() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.owned("Shell Credits"), 0);

        inventory.set("Shell Credits", 120000);
        inventory.set("LF Howler Core", 12);
        assert_eq!(inventory.owned("Shell Credits"), 120000);
        assert_eq!(inventory.owned("LF Howler Core"), 12);
        assert_eq!(inventory.len(), 2);

        inventory.set("Shell Credits", 0);
        assert_eq!(inventory.owned("Shell Credits"), 0);
    }

    #[test]
    fn test_inventory_toml_parsing() {
        let toml_content = r#"
"Shell Credits" = 250000
"Premium Resonance Potion" = 40
"LF Whisperin Core" = 13
"#;
        let inventory = Inventory::parse_toml(toml_content).expect("should parse");
        assert_eq!(inventory.owned("Shell Credits"), 250000);
        assert_eq!(inventory.owned("Premium Resonance Potion"), 40);
        assert_eq!(inventory.owned("LF Whisperin Core"), 13);
        assert_eq!(inventory.owned("Monument Bell"), 0);
    }

    #[test]
    fn test_inventory_json_parsing() {
        let inventory =
            Inventory::parse_json(r#"{"Monument Bell": 4}"#).expect("should parse");
        assert_eq!(inventory.owned("Monument Bell"), 4);
    }

    #[test]
    fn test_inventory_toml_rejects_invalid() {
        assert!(Inventory::parse_toml("\"Shell Credits\" = \"many\"").is_err());
    }
}
