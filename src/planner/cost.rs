//! Waveplate cost model
//!
//! Estimates the energy needed to farm one unit of a material, derived
//! from claim costs and average drop counts per claim. Enemy drops and
//! gathered specialties have no energy gate and cost nothing.

use crate::catalog::{names, FarmSource, Material, Rarity};

/// Waveplates to claim one challenge (forgery / exp / credit) reward
pub const CHALLENGE_CLAIM_COST: f64 = 40.0;
/// Waveplates to claim one boss reward
pub const BOSS_CLAIM_COST: f64 = 60.0;

/// Average boss-material drops per claim
const BOSS_AVERAGE_DROPS: f64 = 4.5;
/// Weekly boss drops per claim (weekly-capped)
const WEEKLY_BOSS_DROPS: f64 = 3.0;
/// Forgery drops per claim, normalised to 2-star equivalents
const FORGERY_REFERENCE_DROPS: f64 = 50.9;
/// Raw XP yielded per exp-material claim
const EXP_REFERENCE_XP: f64 = 78600.0;
/// Shell Credits yielded per credit claim
const CREDIT_REFERENCE_YIELD: f64 = 84000.0;

/// The one boss material that cannot be farmed with Waveplates
pub const NON_FARMABLE_BOSS_MATERIAL: &str = names::MYSTERIOUS_CODE;

/// Waveplates per unit for a forgery material of the given rarity.
///
/// Tier weights 1/3/9/27 express each grade in 2-star equivalents.
fn forgery_tier_cost(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Two => CHALLENGE_CLAIM_COST / (FORGERY_REFERENCE_DROPS / 1.0),
        Rarity::Three => CHALLENGE_CLAIM_COST / (FORGERY_REFERENCE_DROPS / 3.0),
        Rarity::Four => CHALLENGE_CLAIM_COST / (FORGERY_REFERENCE_DROPS / 9.0),
        Rarity::Five => CHALLENGE_CLAIM_COST / (FORGERY_REFERENCE_DROPS / 27.0),
        Rarity::One => 0.0,
    }
}

/// Waveplates per unit for an exp material of the given rarity, weighted
/// by the XP each grade carries.
fn exp_tier_cost(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Two => CHALLENGE_CLAIM_COST / (EXP_REFERENCE_XP / 1000.0),
        Rarity::Three => CHALLENGE_CLAIM_COST / (EXP_REFERENCE_XP / 3000.0),
        Rarity::Four => CHALLENGE_CLAIM_COST / (EXP_REFERENCE_XP / 8000.0),
        Rarity::Five => CHALLENGE_CLAIM_COST / (EXP_REFERENCE_XP / 20000.0),
        Rarity::One => 0.0,
    }
}

/// Waveplates needed to farm one unit of a material.
///
/// Total over every input: unknown combinations cost 0 rather than
/// failing. Enemy drops are free open-world farming.
pub fn waveplate_cost(name: &str, source: FarmSource, rarity: Option<Rarity>) -> f64 {
    match source {
        FarmSource::Boss if name != NON_FARMABLE_BOSS_MATERIAL => {
            BOSS_CLAIM_COST / BOSS_AVERAGE_DROPS
        }
        FarmSource::WeeklyBoss => BOSS_CLAIM_COST / WEEKLY_BOSS_DROPS,
        FarmSource::Specialty => 0.0,
        FarmSource::Currency if name == names::SHELL_CREDITS => {
            CHALLENGE_CLAIM_COST / CREDIT_REFERENCE_YIELD
        }
        FarmSource::Forgery => rarity.map_or(0.0, forgery_tier_cost),
        FarmSource::Exp => rarity.map_or(0.0, exp_tier_cost),
        _ => 0.0,
    }
}

/// Convenience wrapper over a catalog record
pub fn material_waveplate_cost(material: &Material) -> f64 {
    waveplate_cost(material.name, material.source, material.rarity)
}
