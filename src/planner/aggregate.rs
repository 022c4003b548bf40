//! Material aggregation over a level range
//!
//! Selects the breakpoints actually crossed between the current and target
//! level of one progression axis and sums the per-material quantities.

use crate::catalog::{Material, MaterialCatalog};
use crate::roster::ProgressionAxis;
use crate::template::LevelRequirement;
use ahash::AHashMap;
use serde::Serialize;

/// One material with its total quantity for a computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatedMaterial {
    pub material: &'static Material,
    pub quantity: u32,
}

/// Sum the materials for every breakpoint crossed in `(current, target]`.
///
/// A breakpoint counts once its level is exceeded, with one asymmetry: the
/// ascension performed *at* a breakpoint is only paid when progressing past
/// it, so on the ascension axis the target must be strictly greater than
/// the breakpoint level. On every other axis reaching the breakpoint level
/// is enough.
///
/// Returns an empty list when `current >= target`. Output order is the
/// first-seen order of the material names, so identical inputs always give
/// identical output.
pub fn aggregate(
    requirements: &[LevelRequirement],
    axis: ProgressionAxis,
    current: u32,
    target: u32,
    catalog: &MaterialCatalog,
) -> Vec<CalculatedMaterial> {
    if current >= target {
        return Vec::new();
    }

    let mut totals: Vec<CalculatedMaterial> = Vec::new();
    let mut index: AHashMap<&'static str, usize> = AHashMap::new();

    for requirement in requirements {
        let included = requirement.level > current
            && match axis {
                ProgressionAxis::Ascension => target > requirement.level,
                _ => target >= requirement.level,
            };
        if !included {
            continue;
        }

        for amount in &requirement.materials {
            if let Some(&slot) = index.get(amount.name) {
                totals[slot].quantity += amount.quantity;
                continue;
            }
            let Some(material) = catalog.get(amount.name) else {
                // Roster construction validates every name, so this is
                // unreachable for well-formed data.
                tracing::error!(material = amount.name, "material missing from catalog");
                continue;
            };
            index.insert(amount.name, totals.len());
            totals.push(CalculatedMaterial {
                material,
                quantity: amount.quantity,
            });
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names;
    use crate::roster::Roster;

    fn find(materials: &[CalculatedMaterial], name: &str) -> Option<u32> {
        materials
            .iter()
            .find(|m| m.material.name == name)
            .map(|m| m.quantity)
    }

    #[test]
    fn test_empty_when_range_is_not_ascending() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("calcharo").unwrap();

        for (current, target) in [(90, 90), (90, 1), (50, 50)] {
            assert!(aggregate(
                &character.ascension,
                ProgressionAxis::Ascension,
                current,
                target,
                &catalog
            )
            .is_empty());
        }
    }

    #[test]
    fn test_full_ascension_range() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("calcharo").unwrap();

        let materials = aggregate(
            &character.ascension,
            ProgressionAxis::Ascension,
            1,
            90,
            &catalog,
        );
        // 5000 + 10000 + 15000 + 20000 + 40000 + 80000
        assert_eq!(find(&materials, names::SHELL_CREDITS), Some(170000));
        assert_eq!(find(&materials, names::THUNDERING_TACET_CORE), Some(46));
        assert_eq!(find(&materials, names::IRIS), Some(60));
        assert_eq!(find(&materials, names::CRUDE_RING), Some(4));
        assert_eq!(find(&materials, names::BASIC_RING), Some(12));
        assert_eq!(find(&materials, names::IMPROVED_RING), Some(12));
        assert_eq!(find(&materials, names::TAILORED_RING), Some(4));
    }

    #[test]
    fn test_ascension_breakpoint_excluded_at_exact_target() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("calcharo").unwrap();

        // Reaching level 40 does not yet pay the level-40 ascension
        let at_40 = aggregate(
            &character.ascension,
            ProgressionAxis::Ascension,
            1,
            40,
            &catalog,
        );
        assert_eq!(find(&at_40, names::SHELL_CREDITS), Some(5000));
        assert_eq!(find(&at_40, names::THUNDERING_TACET_CORE), None);

        // One level past the breakpoint pays it
        let at_41 = aggregate(
            &character.ascension,
            ProgressionAxis::Ascension,
            1,
            41,
            &catalog,
        );
        assert_eq!(find(&at_41, names::SHELL_CREDITS), Some(15000));
        assert_eq!(find(&at_41, names::THUNDERING_TACET_CORE), Some(3));
    }

    #[test]
    fn test_exp_breakpoint_included_at_exact_target() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("calcharo").unwrap();

        let materials = aggregate(&character.exp, ProgressionAxis::Exp, 1, 20, &catalog);
        // ceil(33300 / 20000) = 2, rounded up
        assert_eq!(find(&materials, names::PREMIUM_RESONANCE_POTION), Some(2));
        assert_eq!(find(&materials, names::SHELL_CREDITS), Some(11655));
    }

    #[test]
    fn test_full_exp_range() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("verina").unwrap();

        let materials = aggregate(&character.exp, ProgressionAxis::Exp, 1, 90, &catalog);
        assert_eq!(find(&materials, names::PREMIUM_RESONANCE_POTION), Some(125));
        assert_eq!(find(&materials, names::SHELL_CREDITS), Some(853300));
    }

    #[test]
    fn test_skill_range_partial() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("jiyan").unwrap();

        // Levels 2 and 3 only
        let materials = aggregate(&character.skill, ProgressionAxis::Skill, 1, 3, &catalog);
        assert_eq!(find(&materials, names::WAVEWORN_RESIDUE_210), Some(5));
        assert_eq!(find(&materials, names::LF_HOWLER_CORE), Some(5));
        assert_eq!(find(&materials, names::SHELL_CREDITS), Some(3500));
        assert_eq!(find(&materials, names::MONUMENT_BELL), None);
    }

    #[test]
    fn test_stat_node_tier_two_only() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("jiyan").unwrap();

        // Tier 2 recorded without tier 1 is a valid partial range
        let materials = aggregate(
            &character.stat_node,
            ProgressionAxis::StatNode,
            1,
            2,
            &catalog,
        );
        assert_eq!(find(&materials, names::SHELL_CREDITS), Some(100000));
        assert_eq!(find(&materials, names::WAVEWORN_RESIDUE_239), Some(3));
        assert_eq!(find(&materials, names::MONUMENT_BELL), Some(1));
    }

    #[test]
    fn test_additivity_over_split_range() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("encore").unwrap();

        let whole = aggregate(&character.exp, ProgressionAxis::Exp, 1, 90, &catalog);
        let first = aggregate(&character.exp, ProgressionAxis::Exp, 1, 50, &catalog);
        let second = aggregate(&character.exp, ProgressionAxis::Exp, 50, 90, &catalog);

        for material in &whole {
            let split_sum = find(&first, material.material.name).unwrap_or(0)
                + find(&second, material.material.name).unwrap_or(0);
            assert_eq!(material.quantity, split_sum);
        }
    }

    #[test]
    fn test_monotonic_in_target() {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character("encore").unwrap();

        let mut previous: Vec<CalculatedMaterial> = Vec::new();
        for target in 1..=90 {
            let current = aggregate(
                &character.ascension,
                ProgressionAxis::Ascension,
                1,
                target,
                &catalog,
            );
            for material in &previous {
                let now = find(&current, material.material.name).unwrap_or(0);
                assert!(now >= material.quantity);
            }
            previous = current;
        }
    }
}
