//! Tiered material families
//!
//! A family is four materials of increasing rarity representing the same
//! resource at different grades. Index i of a family pairs with index i of
//! a template's tiered quantity array.

use super::names::*;

pub type TierFamily = [&'static str; 4];

// Forgery families, one per weapon class
pub const FORGERY_SWORD: TierFamily = [
    INERT_METALLIC_DRIP,
    REACTIVE_METALLIC_DRIP,
    POLARIZED_METALLIC_DRIP,
    HETERIZED_METALLIC_DRIP,
];

pub const FORGERY_PISTOL: TierFamily = [
    IMPURE_PHLOGISTON,
    EXTRACTED_PHLOGISTON,
    REFINED_PHLOGISTON,
    FLAWLESS_PHLOGISTON,
];

pub const FORGERY_RECTIFIER: TierFamily = [LENTO_HELIX, ADAGIO_HELIX, ANDANTE_HELIX, PRESTO_HELIX];

pub const FORGERY_BROADBLADE: TierFamily = [
    WAVEWORN_RESIDUE_210,
    WAVEWORN_RESIDUE_226,
    WAVEWORN_RESIDUE_235,
    WAVEWORN_RESIDUE_239,
];

pub const FORGERY_GAUNTLETS: TierFamily = [CADENCE_SEED, CADENCE_BUD, CADENCE_LEAF, CADENCE_BLOSSOM];

// Enemy drop families
pub const ENEMY_WHISPERIN: TierFamily = [
    LF_WHISPERIN_CORE,
    MF_WHISPERIN_CORE,
    HF_WHISPERIN_CORE,
    FF_WHISPERIN_CORE,
];

pub const ENEMY_HOWLER: TierFamily = [
    LF_HOWLER_CORE,
    MF_HOWLER_CORE,
    HF_HOWLER_CORE,
    FF_HOWLER_CORE,
];

pub const ENEMY_POLYGON: TierFamily = [
    LF_POLYGON_CORE,
    MF_POLYGON_CORE,
    HF_POLYGON_CORE,
    FF_POLYGON_CORE,
];

pub const ENEMY_TIDAL_RESIDUUM: TierFamily = [
    LF_TIDAL_RESIDUUM,
    MF_TIDAL_RESIDUUM,
    HF_TIDAL_RESIDUUM,
    FF_TIDAL_RESIDUUM,
];

pub const ENEMY_RING: TierFamily = [CRUDE_RING, BASIC_RING, IMPROVED_RING, TAILORED_RING];

// Family identifiers stored on the Material records for display grouping
pub const FAMILY_SWORD: &str = "metallic_drip";
pub const FAMILY_PISTOL: &str = "phlogiston";
pub const FAMILY_RECTIFIER: &str = "helix";
pub const FAMILY_BROADBLADE: &str = "waveworn_residue";
pub const FAMILY_GAUNTLETS: &str = "cadence";
pub const FAMILY_WHISPERIN: &str = "whisperin_core";
pub const FAMILY_HOWLER: &str = "howler_core";
pub const FAMILY_POLYGON: &str = "polygon_core";
pub const FAMILY_TIDAL: &str = "tidal_residuum";
pub const FAMILY_RING: &str = "ring";

/// All tiered families, used by catalog consistency tests
pub const ALL_FAMILIES: &[TierFamily] = &[
    FORGERY_SWORD,
    FORGERY_PISTOL,
    FORGERY_RECTIFIER,
    FORGERY_BROADBLADE,
    FORGERY_GAUNTLETS,
    ENEMY_WHISPERIN,
    ENEMY_HOWLER,
    ENEMY_POLYGON,
    ENEMY_TIDAL_RESIDUUM,
    ENEMY_RING,
];
