//! Requirement template engine
//!
//! Progression costs are authored once as generic per-breakpoint templates;
//! binding a template's abstract slots to concrete materials yields the
//! per-level requirement list for one entity and one progression axis.

pub mod tables;

use crate::catalog::{MaterialCatalog, TierFamily};
use serde::Serialize;

/// Abstract material slot referenced by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Boss,
    Enemy,
    Specialty,
    Forgery,
    Weekly,
    Credits,
    /// Total XP for the level step; converted to a material count via the
    /// bound material's per-unit XP value
    Xp,
}

/// Per-breakpoint cost of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCost {
    Flat(u32),
    /// One quantity per tier, pairing index-wise with a bound family
    Tiered([u32; 4]),
}

/// One breakpoint row of a template
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub level: u32,
    /// Ascension rank reached at this breakpoint, ascension templates only
    pub ascension: Option<u8>,
    pub costs: &'static [(Slot, SlotCost)],
}

/// Concrete material bound to a slot
#[derive(Debug, Clone, Copy)]
pub enum SlotBinding {
    Single(&'static str),
    Family(TierFamily),
}

/// Slot-to-material bindings for one entity and axis
#[derive(Debug, Clone, Default)]
pub struct SlotMap {
    bindings: Vec<(Slot, SlotBinding)>,
}

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, slot: Slot, binding: SlotBinding) -> Self {
        self.bindings.push((slot, binding));
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&SlotBinding> {
        self.bindings
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, b)| b)
    }
}

/// A material and how many of it one breakpoint consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialAmount {
    pub name: &'static str,
    pub quantity: u32,
}

/// Materials consumed when progressing past one breakpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelRequirement {
    pub level: u32,
    pub ascension: Option<u8>,
    pub materials: Vec<MaterialAmount>,
}

/// Instantiate a template against a slot map.
///
/// Slots with no usable binding are skipped with a warning rather than
/// failing the whole axis; a single authoring gap must not block every
/// other material. Zero quantities are never emitted.
pub fn apply_template(
    template: &[TemplateEntry],
    slots: &SlotMap,
    catalog: &MaterialCatalog,
) -> Vec<LevelRequirement> {
    template
        .iter()
        .map(|entry| {
            let mut materials = Vec::new();
            for &(slot, cost) in entry.costs {
                match cost {
                    SlotCost::Flat(quantity) if quantity > 0 => {
                        resolve_flat(slot, quantity, slots, catalog, entry.level, &mut materials);
                    }
                    SlotCost::Tiered(quantities) => {
                        resolve_tiered(slot, quantities, slots, entry.level, &mut materials);
                    }
                    SlotCost::Flat(_) => {}
                }
            }
            LevelRequirement {
                level: entry.level,
                ascension: entry.ascension,
                materials,
            }
        })
        .collect()
}

fn resolve_flat(
    slot: Slot,
    quantity: u32,
    slots: &SlotMap,
    catalog: &MaterialCatalog,
    level: u32,
    out: &mut Vec<MaterialAmount>,
) {
    let name = match slots.get(slot) {
        Some(SlotBinding::Single(name)) => *name,
        Some(SlotBinding::Family(_)) => {
            tracing::warn!(?slot, level, "flat slot bound to a tier family, skipping");
            return;
        }
        None => {
            tracing::warn!(?slot, level, "no material bound to slot, skipping");
            return;
        }
    };

    if slot == Slot::Xp {
        // The flat value is total XP; convert to a unit count, rounding up
        // so the requirement is never under-provisioned.
        let xp_value = catalog.get(name).and_then(|m| m.xp_value).unwrap_or(0);
        if xp_value == 0 {
            tracing::warn!(material = name, level, "xp material has no xp value, skipping");
            return;
        }
        out.push(MaterialAmount {
            name,
            quantity: quantity.div_ceil(xp_value),
        });
    } else {
        out.push(MaterialAmount { name, quantity });
    }
}

fn resolve_tiered(
    slot: Slot,
    quantities: [u32; 4],
    slots: &SlotMap,
    level: u32,
    out: &mut Vec<MaterialAmount>,
) {
    if quantities.iter().all(|&q| q == 0) {
        return;
    }
    let family = match slots.get(slot) {
        Some(SlotBinding::Family(family)) => *family,
        Some(SlotBinding::Single(_)) => {
            tracing::warn!(?slot, level, "tiered slot bound to a single material, skipping");
            return;
        }
        None => {
            tracing::warn!(?slot, level, "no family bound to tiered slot, skipping");
            return;
        }
    };
    for (tier, &quantity) in quantities.iter().enumerate() {
        if quantity > 0 {
            out.push(MaterialAmount {
                name: family[tier],
                quantity,
            });
        }
    }
}
