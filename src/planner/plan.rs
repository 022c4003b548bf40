//! Plan orchestration
//!
//! Gathers the caller's current selections, runs every active progression
//! axis through the aggregator, consolidates, nets against the inventory
//! and prices the remainder. One pure function; callers rerun it on every
//! input change.

use super::aggregate::{aggregate, CalculatedMaterial};
use super::consolidate::{
    consolidate, net_against_inventory, sort_for_display, total_waveplates, waveplates_by_source,
    NetRequirement,
};
use super::inventory::Inventory;
use crate::catalog::{FarmSource, MaterialCatalog};
use crate::roster::{Character, ProgressionAxis, Weapon};
use serde::Serialize;

/// Completion state of a two-tier track (stat node or inherent skill)
///
/// Tiers are recorded independently; tier 2 without tier 1 is a valid
/// state and costs exactly the tier-2 step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeState {
    pub tier_one: bool,
    pub tier_two: bool,
}

impl NodeState {
    pub const fn new(tier_one: bool, tier_two: bool) -> Self {
        Self { tier_one, tier_two }
    }

    /// The aggregation range this state pays for, if any
    pub fn level_range(self) -> Option<(u32, u32)> {
        match (self.tier_one, self.tier_two) {
            (true, true) => Some((0, 2)),
            (true, false) => Some((0, 1)),
            (false, true) => Some((1, 2)),
            (false, false) => None,
        }
    }
}

/// Number of leveled skills per character
pub const SKILL_COUNT: usize = 5;
/// Number of two-tier stat-node pairs per character
pub const STAT_NODE_COUNT: usize = 4;

/// Everything a plan computation depends on
#[derive(Debug, Clone)]
pub struct PlanRequest<'a> {
    pub character: Option<&'a Character>,
    pub character_levels: (u32, u32),
    /// Current/target per skill
    pub skills: [(u32, u32); SKILL_COUNT],
    pub stat_nodes: [NodeState; STAT_NODE_COUNT],
    pub inherent_skill: NodeState,
    pub weapon: Option<&'a Weapon>,
    pub weapon_levels: (u32, u32),
}

impl<'a> PlanRequest<'a> {
    /// No selection, full level ranges, everything-done node states
    pub fn new() -> Self {
        Self {
            character: None,
            character_levels: (1, 90),
            skills: [(1, 10); SKILL_COUNT],
            stat_nodes: [NodeState::new(true, true); STAT_NODE_COUNT],
            inherent_skill: NodeState::new(true, true),
            weapon: None,
            weapon_levels: (1, 90),
        }
    }
}

impl<'a> Default for PlanRequest<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one plan computation
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    /// Consolidated totals for every material the plan touches, in
    /// display order
    pub materials: Vec<CalculatedMaterial>,
    /// The same list netted against the inventory
    pub requirements: Vec<NetRequirement>,
    /// Waveplates to farm everything still needed
    pub total_waveplates: f64,
    pub waveplates_by_source: Vec<(FarmSource, f64)>,
}

impl PlanSummary {
    /// The "still needed" subset
    pub fn outstanding(&self) -> impl Iterator<Item = &NetRequirement> {
        self.requirements.iter().filter(|r| r.needed > 0)
    }
}

/// Compute the full plan for the current selections and inventory.
pub fn compute_plan(
    request: &PlanRequest,
    inventory: &Inventory,
    catalog: &MaterialCatalog,
) -> PlanSummary {
    let mut parts: Vec<CalculatedMaterial> = Vec::new();

    if let Some(character) = request.character {
        let (current, target) = request.character_levels;
        parts.extend(aggregate(
            &character.ascension,
            ProgressionAxis::Ascension,
            current,
            target,
            catalog,
        ));
        parts.extend(aggregate(
            &character.exp,
            ProgressionAxis::Exp,
            current,
            target,
            catalog,
        ));
        for &(current, target) in &request.skills {
            parts.extend(aggregate(
                &character.skill,
                ProgressionAxis::Skill,
                current,
                target,
                catalog,
            ));
        }
        for node in &request.stat_nodes {
            if let Some((current, target)) = node.level_range() {
                parts.extend(aggregate(
                    &character.stat_node,
                    ProgressionAxis::StatNode,
                    current,
                    target,
                    catalog,
                ));
            }
        }
        if let Some((current, target)) = request.inherent_skill.level_range() {
            parts.extend(aggregate(
                &character.inherent_skill,
                ProgressionAxis::InherentSkill,
                current,
                target,
                catalog,
            ));
        }
    }

    if let Some(weapon) = request.weapon {
        let (current, target) = request.weapon_levels;
        parts.extend(aggregate(
            &weapon.ascension,
            ProgressionAxis::Ascension,
            current,
            target,
            catalog,
        ));
        parts.extend(aggregate(
            &weapon.exp,
            ProgressionAxis::Exp,
            current,
            target,
            catalog,
        ));
    }

    let mut materials = consolidate(parts);
    sort_for_display(&mut materials);
    let requirements = net_against_inventory(&materials, inventory);
    let total = total_waveplates(&requirements);
    let by_source = waveplates_by_source(&requirements);

    PlanSummary {
        materials,
        requirements,
        total_waveplates: total,
        waveplates_by_source: by_source,
    }
}
