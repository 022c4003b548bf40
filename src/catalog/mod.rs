//! Material catalog - the fixed set of progression materials
//!
//! Every material the planner can ever produce is declared once in the
//! static library and resolved by exact name at computation time.

pub mod library;
pub mod names;
pub mod sets;

pub use library::MATERIAL_LIBRARY;
pub use sets::TierFamily;

use ahash::AHashMap;
use serde::Serialize;

/// Star rating of a material (1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rarity {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rarity {
    pub fn stars(self) -> u8 {
        self as u8
    }
}

/// Authoritative category of a material
///
/// Stored directly on each record; classification never falls back to
/// name-set membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MaterialCategory {
    CharacterExp,
    WeaponExp,
    EchoExp,
    CharacterAscension,
    WeaponAscension,
    SkillMaterial,
    Currency,
}

/// Where a material is farmed, which drives its Waveplate cost and
/// display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FarmSource {
    Boss,
    Exp,
    Specialty,
    Forgery,
    Enemy,
    WeeklyBoss,
    Currency,
}

impl FarmSource {
    /// Display rank used when grouping consolidated output
    pub fn display_rank(self) -> u8 {
        match self {
            FarmSource::Boss => 0,
            FarmSource::Exp => 1,
            FarmSource::Specialty => 2,
            FarmSource::Forgery => 3,
            FarmSource::Enemy => 4,
            FarmSource::WeeklyBoss => 5,
            FarmSource::Currency => 6,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FarmSource::Boss => "Boss Ascension Materials",
            FarmSource::Exp => "EXP Materials",
            FarmSource::Specialty => "World Specialties",
            FarmSource::Forgery => "Forgery Materials",
            FarmSource::Enemy => "Enemy Materials",
            FarmSource::WeeklyBoss => "Weekly Skill Materials",
            FarmSource::Currency => "Currencies",
        }
    }
}

/// A single material record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    /// Unique display name, the lookup key everywhere
    pub name: &'static str,
    pub rarity: Option<Rarity>,
    pub category: MaterialCategory,
    pub source: FarmSource,
    /// Tier-family identifier for materials belonging to a 4-tier set
    pub family: Option<&'static str>,
    /// XP granted per unit, present only on experience materials
    pub xp_value: Option<u32>,
}

/// Name-indexed view over the static material library
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    index: AHashMap<&'static str, &'static Material>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        let mut index = AHashMap::with_capacity(MATERIAL_LIBRARY.len());
        for material in MATERIAL_LIBRARY {
            index.insert(material.name, material);
        }
        Self { index }
    }

    pub fn get(&self, name: &str) -> Option<&'static Material> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Material> + '_ {
        self.index.values().copied()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = MaterialCatalog::new();

        let credits = catalog.get(names::SHELL_CREDITS).expect("Shell Credits");
        assert_eq!(credits.category, MaterialCategory::Currency);
        assert_eq!(credits.source, FarmSource::Currency);
        assert_eq!(credits.rarity, Some(Rarity::Three));

        assert!(catalog.get("No Such Material").is_none());
    }

    #[test]
    fn test_catalog_covers_library() {
        let catalog = MaterialCatalog::new();
        assert_eq!(catalog.len(), MATERIAL_LIBRARY.len());
        for material in MATERIAL_LIBRARY {
            assert!(catalog.contains(material.name));
        }
    }

    #[test]
    fn test_library_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for material in MATERIAL_LIBRARY {
            assert!(
                seen.insert(material.name),
                "Duplicate material name: {}",
                material.name
            );
        }
    }

    #[test]
    fn test_xp_values_only_on_exp_materials() {
        for material in MATERIAL_LIBRARY {
            match material.category {
                MaterialCategory::CharacterExp | MaterialCategory::WeaponExp => {
                    let xp = material.xp_value.expect("exp material missing xp_value");
                    assert!(xp > 0, "{} has zero xp_value", material.name);
                }
                _ => assert!(
                    material.xp_value.is_none(),
                    "{} carries an xp_value but is not an exp material",
                    material.name
                ),
            }
        }
    }

    #[test]
    fn test_tier_families_resolve_in_rarity_order() {
        let catalog = MaterialCatalog::new();
        for family in sets::ALL_FAMILIES {
            let mut last = 0u8;
            for &name in family.iter() {
                let material = catalog.get(name).expect("family member in catalog");
                let stars = material.rarity.expect("tiered material has rarity").stars();
                assert!(
                    stars > last,
                    "family containing {} is not rarity-ascending",
                    name
                );
                last = stars;
            }
        }
    }
}
