//! Consolidation and net-requirement computation
//!
//! Merges per-axis aggregation results into one name-keyed list, nets it
//! against the owned inventory and prices the remainder.

use super::aggregate::CalculatedMaterial;
use super::cost::material_waveplate_cost;
use super::inventory::Inventory;
use crate::catalog::{FarmSource, Material};
use ahash::AHashMap;
use serde::Serialize;

/// Merge materials by name, summing quantities.
///
/// First-seen order and metadata win; duplicates carry identical metadata
/// by construction since every entry resolves through the same catalog.
pub fn consolidate(parts: impl IntoIterator<Item = CalculatedMaterial>) -> Vec<CalculatedMaterial> {
    let mut merged: Vec<CalculatedMaterial> = Vec::new();
    let mut index: AHashMap<&'static str, usize> = AHashMap::new();

    for part in parts {
        match index.get(part.material.name) {
            Some(&slot) => merged[slot].quantity += part.quantity,
            None => {
                index.insert(part.material.name, merged.len());
                merged.push(part);
            }
        }
    }
    merged
}

/// A consolidated material netted against the inventory
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetRequirement {
    pub material: &'static Material,
    /// Total required by the plan
    pub required: u32,
    /// Owned at computation time
    pub owned: u32,
    /// Still to farm, floored at zero
    pub needed: u32,
}

/// Net every consolidated material against the inventory.
///
/// Fully-covered materials stay in the list with `needed == 0`; they are
/// part of the full display but contribute nothing to cost.
pub fn net_against_inventory(
    consolidated: &[CalculatedMaterial],
    inventory: &Inventory,
) -> Vec<NetRequirement> {
    consolidated
        .iter()
        .map(|entry| {
            let owned = inventory.owned(entry.material.name);
            NetRequirement {
                material: entry.material,
                required: entry.quantity,
                owned,
                needed: entry.quantity.saturating_sub(owned),
            }
        })
        .collect()
}

/// Total Waveplates to farm everything still needed
pub fn total_waveplates(requirements: &[NetRequirement]) -> f64 {
    requirements
        .iter()
        .map(|r| f64::from(r.needed) * material_waveplate_cost(r.material))
        .sum()
}

/// The same total broken out per farm source, in display order, omitting
/// sources with no cost
pub fn waveplates_by_source(requirements: &[NetRequirement]) -> Vec<(FarmSource, f64)> {
    let mut by_source: Vec<(FarmSource, f64)> = Vec::new();
    for requirement in requirements {
        let cost = f64::from(requirement.needed) * material_waveplate_cost(requirement.material);
        if cost == 0.0 {
            continue;
        }
        let source = requirement.material.source;
        match by_source.iter_mut().find(|(s, _)| *s == source) {
            Some((_, total)) => *total += cost,
            None => by_source.push((source, cost)),
        }
    }
    by_source.sort_by_key(|(source, _)| source.display_rank());
    by_source
}

/// Order a consolidated list for display: farm source, then tier family,
/// then rarity ascending, then name.
pub fn sort_for_display(materials: &mut [CalculatedMaterial]) {
    materials.sort_by(|a, b| {
        let key = |m: &CalculatedMaterial| {
            (
                m.material.source.display_rank(),
                m.material.family.unwrap_or(""),
                m.material.rarity.map_or(0, |r| r.stars()),
                m.material.name,
            )
        };
        key(a).cmp(&key(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{names, MaterialCatalog};

    fn entry(catalog: &MaterialCatalog, name: &str, quantity: u32) -> CalculatedMaterial {
        CalculatedMaterial {
            material: catalog.get(name).expect("catalog material"),
            quantity,
        }
    }

    #[test]
    fn test_consolidate_merges_duplicates() {
        let catalog = MaterialCatalog::new();
        let merged = consolidate([
            entry(&catalog, names::SHELL_CREDITS, 170000),
            entry(&catalog, names::RAGE_TACET_CORE, 46),
            entry(&catalog, names::SHELL_CREDITS, 853300),
        ]);

        assert_eq!(merged.len(), 2);
        // First-seen order is preserved
        assert_eq!(merged[0].material.name, names::SHELL_CREDITS);
        assert_eq!(merged[0].quantity, 1023300);
        assert_eq!(merged[1].quantity, 46);
    }

    #[test]
    fn test_netting_floors_at_zero() {
        let catalog = MaterialCatalog::new();
        let consolidated = vec![
            entry(&catalog, names::RAGE_TACET_CORE, 46),
            entry(&catalog, names::PECOK_FLOWER, 60),
        ];
        let mut inventory = Inventory::new();
        inventory.set(names::RAGE_TACET_CORE, 10);
        inventory.set(names::PECOK_FLOWER, 999);

        let nets = net_against_inventory(&consolidated, &inventory);
        assert_eq!(nets[0].needed, 36);
        // Overfull inventory never goes negative, and the material stays
        // in the consolidated list
        assert_eq!(nets[1].needed, 0);
        assert_eq!(nets.len(), 2);
    }

    #[test]
    fn test_total_waveplates() {
        let catalog = MaterialCatalog::new();
        let consolidated = vec![
            entry(&catalog, names::RAGE_TACET_CORE, 9),
            entry(&catalog, names::MONUMENT_BELL, 3),
            entry(&catalog, names::LF_HOWLER_CORE, 50),
        ];
        let nets = net_against_inventory(&consolidated, &Inventory::new());

        // 9 boss drops at 60/4.5 each, 3 weekly drops at 20 each, enemy
        // drops free
        let expected = 9.0 * (60.0 / 4.5) + 3.0 * 20.0;
        assert!((total_waveplates(&nets) - expected).abs() < 1e-9);

        let by_source = waveplates_by_source(&nets);
        assert_eq!(by_source.len(), 2);
        assert_eq!(by_source[0].0, FarmSource::Boss);
        assert_eq!(by_source[1].0, FarmSource::WeeklyBoss);
    }

    #[test]
    fn test_covered_material_contributes_no_cost() {
        let catalog = MaterialCatalog::new();
        let consolidated = vec![entry(&catalog, names::RAGE_TACET_CORE, 5)];
        let mut inventory = Inventory::new();
        inventory.set(names::RAGE_TACET_CORE, 5);

        let nets = net_against_inventory(&consolidated, &inventory);
        assert_eq!(total_waveplates(&nets), 0.0);
        assert!(waveplates_by_source(&nets).is_empty());
    }

    #[test]
    fn test_display_sort_groups_sources_and_families() {
        let catalog = MaterialCatalog::new();
        let mut materials = vec![
            entry(&catalog, names::SHELL_CREDITS, 1),
            entry(&catalog, names::FF_HOWLER_CORE, 1),
            entry(&catalog, names::LF_HOWLER_CORE, 1),
            entry(&catalog, names::PRESTO_HELIX, 1),
            entry(&catalog, names::RAGE_TACET_CORE, 1),
            entry(&catalog, names::CRUDE_RING, 1),
        ];
        sort_for_display(&mut materials);

        let ordered: Vec<&str> = materials.iter().map(|m| m.material.name).collect();
        assert_eq!(
            ordered,
            vec![
                names::RAGE_TACET_CORE,
                names::PRESTO_HELIX,
                names::LF_HOWLER_CORE,
                names::FF_HOWLER_CORE,
                names::CRUDE_RING,
                names::SHELL_CREDITS,
            ]
        );
    }
}
