//! Property tests for the aggregation and costing algebra

use proptest::prelude::*;

use resonance_planner::catalog::{FarmSource, MaterialCatalog, Rarity, MATERIAL_LIBRARY};
use resonance_planner::planner::aggregate::{aggregate, CalculatedMaterial};
use resonance_planner::planner::{net_against_inventory, waveplate_cost, Inventory};
use resonance_planner::roster::{ProgressionAxis, Roster};

fn quantity(materials: &[CalculatedMaterial], name: &str) -> u32 {
    materials
        .iter()
        .find(|m| m.material.name == name)
        .map(|m| m.quantity)
        .unwrap_or(0)
}

fn character_ids() -> &'static [&'static str] {
    &["calcharo", "encore", "jiyan", "rover_spectro", "carlotta"]
}

proptest! {
    /// Raising the target never lowers any material's total.
    #[test]
    fn aggregation_is_monotonic_in_target(
        character_index in 0..5usize,
        current in 0u32..=90,
        target_low in 0u32..=90,
        bump in 0u32..=20,
    ) {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character(character_ids()[character_index]).unwrap();
        let target_high = (target_low + bump).min(95);

        for axis in [ProgressionAxis::Ascension, ProgressionAxis::Exp, ProgressionAxis::Skill] {
            let low = aggregate(character.requirements(axis), axis, current, target_low, &catalog);
            let high = aggregate(character.requirements(axis), axis, current, target_high, &catalog);
            for material in &low {
                prop_assert!(quantity(&high, material.material.name) >= material.quantity);
            }
        }
    }

    /// Splitting a range at any intermediate level reproduces the whole,
    /// axis-inclusively: on non-ascension axes every split point works.
    #[test]
    fn exp_aggregation_is_additive(
        character_index in 0..5usize,
        mut bounds in proptest::array::uniform3(0u32..=95),
    ) {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character(character_ids()[character_index]).unwrap();
        bounds.sort_unstable();
        let [a, b, c] = bounds;

        for axis in [ProgressionAxis::Exp, ProgressionAxis::Skill] {
            let requirements = character.requirements(axis);
            let whole = aggregate(requirements, axis, a, c, &catalog);
            let first = aggregate(requirements, axis, a, b, &catalog);
            let second = aggregate(requirements, axis, b, c, &catalog);

            for material in &whole {
                let split = quantity(&first, material.material.name)
                    + quantity(&second, material.material.name);
                prop_assert_eq!(material.quantity, split);
            }
            // No split part may introduce a material the whole lacks
            for material in first.iter().chain(second.iter()) {
                prop_assert!(quantity(&whole, material.material.name) > 0);
            }
        }
    }

    /// Ascension ranges are additive at any split point that is not
    /// itself a breakpoint. (Splitting exactly at a breakpoint assigns
    /// the ascension performed there to neither half; the cost belongs to
    /// whoever progresses past it.)
    #[test]
    fn ascension_aggregation_is_additive_between_breakpoints(
        character_index in 0..5usize,
        mut bounds in proptest::array::uniform3(0u32..=95),
    ) {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character(character_ids()[character_index]).unwrap();
        bounds.sort_unstable();
        let [a, b, c] = bounds;
        prop_assume!(!character.ascension.iter().any(|r| r.level == b));

        let whole = aggregate(&character.ascension, ProgressionAxis::Ascension, a, c, &catalog);
        let first = aggregate(&character.ascension, ProgressionAxis::Ascension, a, b, &catalog);
        let second = aggregate(&character.ascension, ProgressionAxis::Ascension, b, c, &catalog);

        for material in &whole {
            let split = quantity(&first, material.material.name)
                + quantity(&second, material.material.name);
            prop_assert_eq!(material.quantity, split);
        }
    }

    /// Degenerate ranges always produce an empty result on every axis.
    #[test]
    fn degenerate_ranges_are_empty(
        character_index in 0..5usize,
        current in 0u32..=100,
        deficit in 0u32..=100,
    ) {
        let catalog = MaterialCatalog::new();
        let roster = Roster::load(&catalog).unwrap();
        let character = roster.character(character_ids()[character_index]).unwrap();
        let target = current.saturating_sub(deficit);

        for axis in [
            ProgressionAxis::Ascension,
            ProgressionAxis::Exp,
            ProgressionAxis::Skill,
            ProgressionAxis::StatNode,
            ProgressionAxis::InherentSkill,
        ] {
            prop_assert!(
                aggregate(character.requirements(axis), axis, current, target, &catalog)
                    .is_empty()
            );
        }
    }

    /// Netting never goes negative, whatever the inventory holds.
    #[test]
    fn netting_is_floored_at_zero(
        required in 0u32..=1_000_000,
        owned in 0u32..=2_000_000,
    ) {
        let catalog = MaterialCatalog::new();
        let material = catalog.get("Shell Credits").unwrap();
        let mut inventory = Inventory::new();
        inventory.set(material.name, owned);

        let consolidated = vec![CalculatedMaterial { material, quantity: required }];
        let nets = net_against_inventory(&consolidated, &inventory);
        prop_assert_eq!(nets[0].needed, required.saturating_sub(owned));
        prop_assert!(nets[0].needed <= required);
    }

    /// The cost function is total, finite and non-negative over every
    /// source/rarity combination, including names it has never seen.
    #[test]
    fn cost_is_total_and_nonnegative(
        material_index in 0..90usize,
        source_index in 0..7usize,
        rarity_index in 0..6usize,
    ) {
        let sources = [
            FarmSource::Boss,
            FarmSource::Exp,
            FarmSource::Specialty,
            FarmSource::Forgery,
            FarmSource::Enemy,
            FarmSource::WeeklyBoss,
            FarmSource::Currency,
        ];
        let rarities = [
            None,
            Some(Rarity::One),
            Some(Rarity::Two),
            Some(Rarity::Three),
            Some(Rarity::Four),
            Some(Rarity::Five),
        ];
        let name = MATERIAL_LIBRARY[material_index % MATERIAL_LIBRARY.len()].name;

        for candidate in [name, "Entirely Unknown Material"] {
            let cost = waveplate_cost(candidate, sources[source_index], rarities[rarity_index]);
            prop_assert!(cost.is_finite());
            prop_assert!(cost >= 0.0);
        }
    }
}
