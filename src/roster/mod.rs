//! Entity roster - characters and weapons with pre-built requirement tables
//!
//! Entities are constructed once at startup by instantiating the shared
//! templates with entity-specific slot bindings, then applying any
//! per-entity ascension overrides. Construction validates every generated
//! material name against the catalog; a miss is a data-integrity error and
//! fails the load rather than surfacing later as a bad lookup.

pub mod characters;
pub mod weapons;

use crate::catalog::MaterialCatalog;
use crate::core::{PlannerError, Result};
use crate::template::{LevelRequirement, MaterialAmount};
use serde::Serialize;

/// Weapon classes; each has its own forgery material family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeaponClass {
    Sword,
    Pistol,
    Rectifier,
    Broadblade,
    Gauntlets,
}

/// One independent progression track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressionAxis {
    Ascension,
    Exp,
    Skill,
    StatNode,
    InherentSkill,
}

/// Post-generation patch to one ascension breakpoint
///
/// Replaces the quantity of an existing material at the breakpoint, or
/// inserts the material if the template did not produce it there.
#[derive(Debug, Clone, Copy)]
pub struct AscensionOverride {
    pub level: u32,
    pub material: &'static str,
    pub quantity: u32,
}

pub(crate) fn apply_overrides(
    requirements: &mut [LevelRequirement],
    overrides: &[AscensionOverride],
) {
    for patch in overrides {
        let Some(entry) = requirements.iter_mut().find(|r| r.level == patch.level) else {
            tracing::warn!(
                level = patch.level,
                material = patch.material,
                "ascension override targets a level with no breakpoint, skipping"
            );
            continue;
        };
        match entry
            .materials
            .iter_mut()
            .find(|m| m.name == patch.material)
        {
            Some(existing) => existing.quantity = patch.quantity,
            None => entry.materials.push(MaterialAmount {
                name: patch.material,
                quantity: patch.quantity,
            }),
        }
    }
}

/// A playable character with all five progression axes
#[derive(Debug, Clone)]
pub struct Character {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: u8,
    pub weapon_class: WeaponClass,
    /// Display labels for the four stat-node pairs' bonus stats
    pub stat_node_names: [&'static str; 2],
    pub prerelease: bool,
    pub ascension: Vec<LevelRequirement>,
    pub exp: Vec<LevelRequirement>,
    pub skill: Vec<LevelRequirement>,
    pub stat_node: Vec<LevelRequirement>,
    pub inherent_skill: Vec<LevelRequirement>,
}

impl Character {
    pub fn requirements(&self, axis: ProgressionAxis) -> &[LevelRequirement] {
        match axis {
            ProgressionAxis::Ascension => &self.ascension,
            ProgressionAxis::Exp => &self.exp,
            ProgressionAxis::Skill => &self.skill,
            ProgressionAxis::StatNode => &self.stat_node,
            ProgressionAxis::InherentSkill => &self.inherent_skill,
        }
    }
}

/// A weapon with ascension and exp axes
#[derive(Debug, Clone)]
pub struct Weapon {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: u8,
    pub weapon_class: WeaponClass,
    pub ascension: Vec<LevelRequirement>,
    pub exp: Vec<LevelRequirement>,
}

/// All entities, built once and immutable afterwards
#[derive(Debug, Clone)]
pub struct Roster {
    characters: Vec<Character>,
    weapons: Vec<Weapon>,
}

impl Roster {
    /// Build every character and weapon and validate all generated
    /// material references against the catalog.
    pub fn load(catalog: &MaterialCatalog) -> Result<Self> {
        let characters: Vec<Character> = characters::CHARACTER_SPECS
            .iter()
            .map(|spec| spec.build(catalog))
            .collect();
        let weapons = weapons::WEAPON_SPECS
            .iter()
            .map(|spec| spec.build(catalog))
            .collect::<Result<Vec<Weapon>>>()?;

        for character in &characters {
            for axis in [
                &character.ascension,
                &character.exp,
                &character.skill,
                &character.stat_node,
                &character.inherent_skill,
            ] {
                validate_axis(character.id, axis, catalog)?;
            }
        }
        for weapon in &weapons {
            validate_axis(weapon.id, &weapon.ascension, catalog)?;
            validate_axis(weapon.id, &weapon.exp, catalog)?;
        }

        tracing::debug!(
            characters = characters.len(),
            weapons = weapons.len(),
            "roster loaded"
        );
        Ok(Self {
            characters,
            weapons,
        })
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// Weapons wieldable by the given class, the roster-side half of the
    /// "filter weapons by character type" toggle
    pub fn weapons_for(&self, class: WeaponClass) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter().filter(move |w| w.weapon_class == class)
    }
}

fn validate_axis(
    entity: &str,
    requirements: &[LevelRequirement],
    catalog: &MaterialCatalog,
) -> Result<()> {
    for requirement in requirements {
        for material in &requirement.materials {
            if !catalog.contains(material.name) {
                return Err(PlannerError::UnknownMaterial {
                    entity: entity.to_string(),
                    material: material.name.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names;

    fn roster() -> Roster {
        let catalog = MaterialCatalog::new();
        Roster::load(&catalog).expect("roster should load against the catalog")
    }

    #[test]
    fn test_roster_loads_and_validates() {
        let roster = roster();
        assert_eq!(roster.characters().len(), 37);
        assert_eq!(roster.weapons().len(), 56);
    }

    #[test]
    fn test_character_lookup() {
        let roster = roster();
        let calcharo = roster.character("calcharo").expect("calcharo");
        assert_eq!(calcharo.name, "Calcharo");
        assert_eq!(calcharo.rarity, 5);
        assert_eq!(calcharo.weapon_class, WeaponClass::Broadblade);
        assert!(roster.character("nonexistent").is_none());
    }

    #[test]
    fn test_axis_schedules() {
        let roster = roster();
        let character = roster.character("encore").unwrap();
        let levels: Vec<u32> = character.ascension.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![20, 40, 50, 60, 70, 80]);
        let levels: Vec<u32> = character.exp.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![20, 40, 50, 60, 70, 80, 90]);
        let levels: Vec<u32> = character.skill.iter().map(|r| r.level).collect();
        assert_eq!(levels, (2..=10).collect::<Vec<u32>>());
        assert_eq!(character.stat_node.len(), 2);
        assert_eq!(character.inherent_skill.len(), 2);
    }

    #[test]
    fn test_protagonist_ascension_overrides() {
        let roster = roster();
        let rover = roster.character("rover_spectro").unwrap();

        // Level 20 has no boss cost and no override
        let at_20 = &rover.ascension[0];
        assert!(at_20
            .materials
            .iter()
            .all(|m| m.name != names::MYSTERIOUS_CODE));

        // Levels 40..=80 are patched down to a single token each
        for requirement in rover.ascension.iter().skip(1) {
            let code = requirement
                .materials
                .iter()
                .find(|m| m.name == names::MYSTERIOUS_CODE)
                .expect("override applied");
            assert_eq!(code.quantity, 1);
        }

        // A character without overrides keeps the template quantities
        let calcharo = roster.character("calcharo").unwrap();
        let boss_at_80 = calcharo
            .ascension
            .last()
            .unwrap()
            .materials
            .iter()
            .find(|m| m.name == names::THUNDERING_TACET_CORE)
            .unwrap();
        assert_eq!(boss_at_80.quantity, 16);
    }

    #[test]
    fn test_override_inserts_missing_material() {
        let mut requirements = vec![LevelRequirement {
            level: 40,
            ascension: Some(2),
            materials: vec![MaterialAmount {
                name: names::SHELL_CREDITS,
                quantity: 10000,
            }],
        }];
        apply_overrides(
            &mut requirements,
            &[AscensionOverride {
                level: 40,
                material: names::MYSTERIOUS_CODE,
                quantity: 2,
            }],
        );
        assert_eq!(requirements[0].materials.len(), 2);
        assert_eq!(requirements[0].materials[1].quantity, 2);
    }

    #[test]
    fn test_weapon_rarity_templates() {
        let roster = roster();
        let five_star = roster.weapon("stringmaster").unwrap();
        assert_eq!(five_star.rarity, 5);
        let credits: u32 = five_star
            .ascension
            .iter()
            .flat_map(|r| &r.materials)
            .filter(|m| m.name == names::SHELL_CREDITS)
            .map(|m| m.quantity)
            .sum();
        assert_eq!(credits, 330000);

        let four_star = roster.weapon("augment").unwrap();
        assert_eq!(four_star.rarity, 4);
        let credits: u32 = four_star
            .ascension
            .iter()
            .flat_map(|r| &r.materials)
            .filter(|m| m.name == names::SHELL_CREDITS)
            .map(|m| m.quantity)
            .sum();
        assert_eq!(credits, 264000);
    }

    #[test]
    fn test_weapons_for_class() {
        let roster = roster();
        for weapon in roster.weapons_for(WeaponClass::Pistol) {
            assert_eq!(weapon.weapon_class, WeaponClass::Pistol);
        }
        assert!(roster.weapons_for(WeaponClass::Sword).count() > 0);
    }
}
