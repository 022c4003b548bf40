//! Static material library - every material record, defined once

use super::names;
use super::sets;
use super::{FarmSource, Material, MaterialCategory, Rarity};

const fn boss(name: &'static str) -> Material {
    Material {
        name,
        rarity: Some(Rarity::Four),
        category: MaterialCategory::CharacterAscension,
        source: FarmSource::Boss,
        family: None,
        xp_value: None,
    }
}

const fn enemy(name: &'static str, rarity: Rarity, family: &'static str) -> Material {
    Material {
        name,
        rarity: Some(rarity),
        category: MaterialCategory::CharacterAscension,
        source: FarmSource::Enemy,
        family: Some(family),
        xp_value: None,
    }
}

const fn forgery(name: &'static str, rarity: Rarity, family: &'static str) -> Material {
    Material {
        name,
        rarity: Some(rarity),
        category: MaterialCategory::WeaponAscension,
        source: FarmSource::Forgery,
        family: Some(family),
        xp_value: None,
    }
}

const fn character_exp(name: &'static str, rarity: Rarity, xp_value: u32) -> Material {
    Material {
        name,
        rarity: Some(rarity),
        category: MaterialCategory::CharacterExp,
        source: FarmSource::Exp,
        family: None,
        xp_value: Some(xp_value),
    }
}

const fn weapon_exp(name: &'static str, rarity: Rarity, xp_value: u32) -> Material {
    Material {
        name,
        rarity: Some(rarity),
        category: MaterialCategory::WeaponExp,
        source: FarmSource::Exp,
        family: None,
        xp_value: Some(xp_value),
    }
}

const fn weekly(name: &'static str) -> Material {
    Material {
        name,
        rarity: Some(Rarity::Four),
        category: MaterialCategory::SkillMaterial,
        source: FarmSource::WeeklyBoss,
        family: None,
        xp_value: None,
    }
}

const fn specialty(name: &'static str) -> Material {
    Material {
        name,
        rarity: Some(Rarity::One),
        category: MaterialCategory::CharacterAscension,
        source: FarmSource::Specialty,
        family: None,
        xp_value: None,
    }
}

const fn currency(name: &'static str, rarity: Option<Rarity>) -> Material {
    Material {
        name,
        rarity,
        category: MaterialCategory::Currency,
        source: FarmSource::Currency,
        family: None,
        xp_value: None,
    }
}

pub static MATERIAL_LIBRARY: &[Material] = &[
    // Boss materials
    boss(names::ELEGY_TACET_CORE),
    boss(names::GOLD_DISSOLVING_FEATHER),
    boss(names::GROUP_ABOMINATION_TACET_CORE),
    boss(names::HIDDEN_THUNDER_TACET_CORE),
    boss(names::MYSTERIOUS_CODE),
    boss(names::RAGE_TACET_CORE),
    boss(names::ROARING_ROCK_FIST),
    boss(names::SOUND_KEEPING_TACET_CORE),
    boss(names::STRIFE_TACET_CORE),
    boss(names::THUNDERING_TACET_CORE),
    boss(names::TOPOLOGICAL_CONFINEMENT),
    boss(names::BLAZING_BONE),
    boss(names::CLEANSING_CONCH),
    boss(names::PLATINUM_CORE),
    boss(names::UNFADING_GLORY),
    boss(names::TRUTH_IN_LIES),
    // Enemy materials, LF -> FF tiers
    enemy(names::LF_HOWLER_CORE, Rarity::Two, sets::FAMILY_HOWLER),
    enemy(names::MF_HOWLER_CORE, Rarity::Three, sets::FAMILY_HOWLER),
    enemy(names::HF_HOWLER_CORE, Rarity::Four, sets::FAMILY_HOWLER),
    enemy(names::FF_HOWLER_CORE, Rarity::Five, sets::FAMILY_HOWLER),
    enemy(names::LF_POLYGON_CORE, Rarity::Two, sets::FAMILY_POLYGON),
    enemy(names::MF_POLYGON_CORE, Rarity::Three, sets::FAMILY_POLYGON),
    enemy(names::HF_POLYGON_CORE, Rarity::Four, sets::FAMILY_POLYGON),
    enemy(names::FF_POLYGON_CORE, Rarity::Five, sets::FAMILY_POLYGON),
    enemy(names::LF_TIDAL_RESIDUUM, Rarity::Two, sets::FAMILY_TIDAL),
    enemy(names::MF_TIDAL_RESIDUUM, Rarity::Three, sets::FAMILY_TIDAL),
    enemy(names::HF_TIDAL_RESIDUUM, Rarity::Four, sets::FAMILY_TIDAL),
    enemy(names::FF_TIDAL_RESIDUUM, Rarity::Five, sets::FAMILY_TIDAL),
    enemy(names::LF_WHISPERIN_CORE, Rarity::Two, sets::FAMILY_WHISPERIN),
    enemy(names::MF_WHISPERIN_CORE, Rarity::Three, sets::FAMILY_WHISPERIN),
    enemy(names::HF_WHISPERIN_CORE, Rarity::Four, sets::FAMILY_WHISPERIN),
    enemy(names::FF_WHISPERIN_CORE, Rarity::Five, sets::FAMILY_WHISPERIN),
    enemy(names::CRUDE_RING, Rarity::Two, sets::FAMILY_RING),
    enemy(names::BASIC_RING, Rarity::Three, sets::FAMILY_RING),
    enemy(names::IMPROVED_RING, Rarity::Four, sets::FAMILY_RING),
    enemy(names::TAILORED_RING, Rarity::Five, sets::FAMILY_RING),
    // Forgery materials
    forgery(names::INERT_METALLIC_DRIP, Rarity::Two, sets::FAMILY_SWORD),
    forgery(names::REACTIVE_METALLIC_DRIP, Rarity::Three, sets::FAMILY_SWORD),
    forgery(names::POLARIZED_METALLIC_DRIP, Rarity::Four, sets::FAMILY_SWORD),
    forgery(names::HETERIZED_METALLIC_DRIP, Rarity::Five, sets::FAMILY_SWORD),
    forgery(names::IMPURE_PHLOGISTON, Rarity::Two, sets::FAMILY_PISTOL),
    forgery(names::EXTRACTED_PHLOGISTON, Rarity::Three, sets::FAMILY_PISTOL),
    forgery(names::REFINED_PHLOGISTON, Rarity::Four, sets::FAMILY_PISTOL),
    forgery(names::FLAWLESS_PHLOGISTON, Rarity::Five, sets::FAMILY_PISTOL),
    forgery(names::LENTO_HELIX, Rarity::Two, sets::FAMILY_RECTIFIER),
    forgery(names::ADAGIO_HELIX, Rarity::Three, sets::FAMILY_RECTIFIER),
    forgery(names::ANDANTE_HELIX, Rarity::Four, sets::FAMILY_RECTIFIER),
    forgery(names::PRESTO_HELIX, Rarity::Five, sets::FAMILY_RECTIFIER),
    forgery(names::WAVEWORN_RESIDUE_210, Rarity::Two, sets::FAMILY_BROADBLADE),
    forgery(names::WAVEWORN_RESIDUE_226, Rarity::Three, sets::FAMILY_BROADBLADE),
    forgery(names::WAVEWORN_RESIDUE_235, Rarity::Four, sets::FAMILY_BROADBLADE),
    forgery(names::WAVEWORN_RESIDUE_239, Rarity::Five, sets::FAMILY_BROADBLADE),
    forgery(names::CADENCE_SEED, Rarity::Two, sets::FAMILY_GAUNTLETS),
    forgery(names::CADENCE_BUD, Rarity::Three, sets::FAMILY_GAUNTLETS),
    forgery(names::CADENCE_LEAF, Rarity::Four, sets::FAMILY_GAUNTLETS),
    forgery(names::CADENCE_BLOSSOM, Rarity::Five, sets::FAMILY_GAUNTLETS),
    // Character experience materials
    character_exp(names::BASIC_RESONANCE_POTION, Rarity::Two, 1000),
    character_exp(names::MEDIUM_RESONANCE_POTION, Rarity::Three, 3000),
    character_exp(names::ADVANCED_RESONANCE_POTION, Rarity::Four, 8000),
    character_exp(names::PREMIUM_RESONANCE_POTION, Rarity::Five, 20000),
    // Weapon experience materials
    weapon_exp(names::BASIC_ENERGY_CORE, Rarity::Two, 1000),
    weapon_exp(names::MEDIUM_ENERGY_CORE, Rarity::Three, 3000),
    weapon_exp(names::ADVANCED_ENERGY_CORE, Rarity::Four, 8000),
    weapon_exp(names::PREMIUM_ENERGY_CORE, Rarity::Five, 20000),
    // Currencies
    currency(names::SHELL_CREDITS, Some(Rarity::Three)),
    currency(names::WAVEPLATES, None),
    // Weekly boss materials
    weekly(names::DREAMLESS_FEATHER),
    weekly(names::MONUMENT_BELL),
    weekly(names::UNENDING_DESTRUCTION),
    weekly(names::SENTINELS_DAGGER),
    weekly(names::THE_NETHERWORLDS_STARE),
    weekly(names::WHEN_IRISES_BLOOM),
    // World specialties
    specialty(names::BELLE_POPPY),
    specialty(names::CORIOLUS),
    specialty(names::IRIS),
    specialty(names::LANTERNBERRY),
    specialty(names::PECOK_FLOWER),
    specialty(names::TERRASPAWN_FUNGUS),
    specialty(names::VIOLET_CORAL),
    specialty(names::WINTRY_BELL),
    specialty(names::LOONGS_PEARL),
    specialty(names::PAVO_PLUM),
    specialty(names::NOVA),
    specialty(names::FIRECRACKER_JEWELWEED),
    specialty(names::GOLDEN_FLEECE),
    specialty(names::SWORD_ACORUS),
    specialty(names::SEASIDE_CENDRELIS),
    specialty(names::BAMBOO_IRIS),
    specialty(names::BLOODLEAF_VIBURNUM),
    specialty(names::AFTERLIFE),
];
