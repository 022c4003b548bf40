//! Character definitions
//!
//! One spec row per character: slot bindings for each axis plus optional
//! ascension overrides. Axis requirement lists are generated from the
//! shared templates at roster load.

use super::{apply_overrides, AscensionOverride, Character, WeaponClass};
use crate::catalog::sets::{
    ENEMY_HOWLER, ENEMY_POLYGON, ENEMY_RING, ENEMY_TIDAL_RESIDUUM, ENEMY_WHISPERIN,
    FORGERY_BROADBLADE, FORGERY_GAUNTLETS, FORGERY_PISTOL, FORGERY_RECTIFIER, FORGERY_SWORD,
};
use crate::catalog::{names, MaterialCatalog, TierFamily};
use crate::template::{apply_template, tables, Slot, SlotBinding, SlotMap};

pub(crate) struct CharacterSpec {
    id: &'static str,
    name: &'static str,
    rarity: u8,
    weapon_class: WeaponClass,
    stat_node_names: [&'static str; 2],
    prerelease: bool,
    boss: &'static str,
    enemy: TierFamily,
    specialty: &'static str,
    forgery: TierFamily,
    weekly: &'static str,
    overrides: &'static [AscensionOverride],
}

impl CharacterSpec {
    pub(crate) fn build(&self, catalog: &MaterialCatalog) -> Character {
        let ascension_map = SlotMap::new()
            .bind(Slot::Boss, SlotBinding::Single(self.boss))
            .bind(Slot::Enemy, SlotBinding::Family(self.enemy))
            .bind(Slot::Specialty, SlotBinding::Single(self.specialty))
            .bind(Slot::Credits, SlotBinding::Single(names::SHELL_CREDITS));
        let exp_map = SlotMap::new()
            .bind(
                Slot::Xp,
                SlotBinding::Single(names::PREMIUM_RESONANCE_POTION),
            )
            .bind(Slot::Credits, SlotBinding::Single(names::SHELL_CREDITS));
        // Skill, stat-node and inherent-skill axes share one binding set
        let skill_map = SlotMap::new()
            .bind(Slot::Forgery, SlotBinding::Family(self.forgery))
            .bind(Slot::Enemy, SlotBinding::Family(self.enemy))
            .bind(Slot::Weekly, SlotBinding::Single(self.weekly))
            .bind(Slot::Credits, SlotBinding::Single(names::SHELL_CREDITS));

        let mut ascension = apply_template(tables::CHARACTER_ASCENSION, &ascension_map, catalog);
        apply_overrides(&mut ascension, self.overrides);

        Character {
            id: self.id,
            name: self.name,
            rarity: self.rarity,
            weapon_class: self.weapon_class,
            stat_node_names: self.stat_node_names,
            prerelease: self.prerelease,
            ascension,
            exp: apply_template(tables::CHARACTER_EXP, &exp_map, catalog),
            skill: apply_template(tables::SKILL, &skill_map, catalog),
            stat_node: apply_template(tables::STAT_NODE, &skill_map, catalog),
            inherent_skill: apply_template(tables::INHERENT_SKILL, &skill_map, catalog),
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn spec(
    id: &'static str,
    name: &'static str,
    rarity: u8,
    weapon_class: WeaponClass,
    stat_node_names: [&'static str; 2],
    boss: &'static str,
    enemy: TierFamily,
    specialty: &'static str,
    forgery: TierFamily,
    weekly: &'static str,
) -> CharacterSpec {
    CharacterSpec {
        id,
        name,
        rarity,
        weapon_class,
        stat_node_names,
        prerelease: false,
        boss,
        enemy,
        specialty,
        forgery,
        weekly,
        overrides: &[],
    }
}

const fn with_overrides(
    mut spec: CharacterSpec,
    overrides: &'static [AscensionOverride],
) -> CharacterSpec {
    spec.overrides = overrides;
    spec
}

const fn prerelease(mut spec: CharacterSpec) -> CharacterSpec {
    spec.prerelease = true;
    spec
}

/// The protagonist's ascensions each consume one non-farmable story token
/// instead of the template's boss-material counts.
const PROTAGONIST_OVERRIDES: &[AscensionOverride] = &[
    AscensionOverride { level: 40, material: names::MYSTERIOUS_CODE, quantity: 1 },
    AscensionOverride { level: 50, material: names::MYSTERIOUS_CODE, quantity: 1 },
    AscensionOverride { level: 60, material: names::MYSTERIOUS_CODE, quantity: 1 },
    AscensionOverride { level: 70, material: names::MYSTERIOUS_CODE, quantity: 1 },
    AscensionOverride { level: 80, material: names::MYSTERIOUS_CODE, quantity: 1 },
];

pub(crate) static CHARACTER_SPECS: &[CharacterSpec] = &[
    // v1.0
    with_overrides(
        spec("rover_spectro", "Rover (Spectro)", 5, WeaponClass::Sword, ["Spectro DMG+", "ATK+"], names::MYSTERIOUS_CODE, ENEMY_WHISPERIN, names::PECOK_FLOWER, FORGERY_SWORD, names::UNENDING_DESTRUCTION),
        PROTAGONIST_OVERRIDES,
    ),
    with_overrides(
        spec("rover_havoc", "Rover (Havoc)", 5, WeaponClass::Sword, ["Havoc DMG+", "ATK+"], names::MYSTERIOUS_CODE, ENEMY_WHISPERIN, names::PECOK_FLOWER, FORGERY_SWORD, names::DREAMLESS_FEATHER),
        PROTAGONIST_OVERRIDES,
    ),
    spec("calcharo", "Calcharo", 5, WeaponClass::Broadblade, ["Crit. DMG+", "ATK+"], names::THUNDERING_TACET_CORE, ENEMY_RING, names::IRIS, FORGERY_BROADBLADE, names::MONUMENT_BELL),
    spec("encore", "Encore", 5, WeaponClass::Rectifier, ["Fusion DMG+", "ATK+"], names::RAGE_TACET_CORE, ENEMY_WHISPERIN, names::PECOK_FLOWER, FORGERY_RECTIFIER, names::UNENDING_DESTRUCTION),
    spec("jianxin", "Jianxin", 5, WeaponClass::Gauntlets, ["Crit. Rate+", "ATK+"], names::ROARING_ROCK_FIST, ENEMY_WHISPERIN, names::LANTERNBERRY, FORGERY_GAUNTLETS, names::UNENDING_DESTRUCTION),
    spec("lingyang", "Lingyang", 5, WeaponClass::Gauntlets, ["Glacio DMG+", "ATK+"], names::SOUND_KEEPING_TACET_CORE, ENEMY_WHISPERIN, names::CORIOLUS, FORGERY_GAUNTLETS, names::UNENDING_DESTRUCTION),
    spec("verina", "Verina", 5, WeaponClass::Rectifier, ["Healing Bonus+", "ATK+"], names::ELEGY_TACET_CORE, ENEMY_HOWLER, names::BELLE_POPPY, FORGERY_RECTIFIER, names::MONUMENT_BELL),
    spec("jiyan", "Jiyan", 5, WeaponClass::Broadblade, ["Crit. Rate+", "ATK+"], names::ROARING_ROCK_FIST, ENEMY_HOWLER, names::PECOK_FLOWER, FORGERY_BROADBLADE, names::MONUMENT_BELL),
    spec("yinlin", "Yinlin", 5, WeaponClass::Rectifier, ["Crit. Rate+", "ATK+"], names::GROUP_ABOMINATION_TACET_CORE, ENEMY_WHISPERIN, names::CORIOLUS, FORGERY_RECTIFIER, names::DREAMLESS_FEATHER),
    spec("aalto", "Aalto", 4, WeaponClass::Pistol, ["Aero DMG+", "ATK+"], names::ROARING_ROCK_FIST, ENEMY_HOWLER, names::WINTRY_BELL, FORGERY_PISTOL, names::MONUMENT_BELL),
    spec("baizhi", "Baizhi", 4, WeaponClass::Rectifier, ["Healing Bonus+", "HP+"], names::SOUND_KEEPING_TACET_CORE, ENEMY_HOWLER, names::LANTERNBERRY, FORGERY_RECTIFIER, names::MONUMENT_BELL),
    spec("chixia", "Chixia", 4, WeaponClass::Pistol, ["Fusion DMG+", "ATK+"], names::RAGE_TACET_CORE, ENEMY_WHISPERIN, names::BELLE_POPPY, FORGERY_PISTOL, names::MONUMENT_BELL),
    spec("danjin", "Danjin", 4, WeaponClass::Sword, ["Havoc DMG+", "ATK+"], names::STRIFE_TACET_CORE, ENEMY_RING, names::BELLE_POPPY, FORGERY_SWORD, names::DREAMLESS_FEATHER),
    spec("mortefi", "Mortefi", 4, WeaponClass::Pistol, ["Fusion DMG+", "ATK+"], names::RAGE_TACET_CORE, ENEMY_WHISPERIN, names::CORIOLUS, FORGERY_PISTOL, names::MONUMENT_BELL),
    spec("sanhua", "Sanhua", 4, WeaponClass::Sword, ["Glacio DMG+", "ATK+"], names::SOUND_KEEPING_TACET_CORE, ENEMY_WHISPERIN, names::WINTRY_BELL, FORGERY_SWORD, names::UNENDING_DESTRUCTION),
    spec("taoqi", "Taoqi", 4, WeaponClass::Broadblade, ["Havoc DMG+", "DEF+"], names::GOLD_DISSOLVING_FEATHER, ENEMY_HOWLER, names::IRIS, FORGERY_BROADBLADE, names::DREAMLESS_FEATHER),
    spec("yangyang", "Yangyang", 4, WeaponClass::Sword, ["Aero DMG+", "ATK+"], names::ROARING_ROCK_FIST, ENEMY_RING, names::WINTRY_BELL, FORGERY_SWORD, names::UNENDING_DESTRUCTION),
    spec("yuanwu", "Yuanwu", 4, WeaponClass::Gauntlets, ["Electro DMG+", "DEF+"], names::HIDDEN_THUNDER_TACET_CORE, ENEMY_RING, names::TERRASPAWN_FUNGUS, FORGERY_GAUNTLETS, names::UNENDING_DESTRUCTION),
    // v1.1
    spec("jinhsi", "Jinhsi", 5, WeaponClass::Broadblade, ["Crit. Rate+", "ATK+"], names::ELEGY_TACET_CORE, ENEMY_HOWLER, names::LOONGS_PEARL, FORGERY_BROADBLADE, names::SENTINELS_DAGGER),
    spec("changli", "Changli", 5, WeaponClass::Sword, ["Crit. Rate+", "ATK+"], names::RAGE_TACET_CORE, ENEMY_RING, names::PAVO_PLUM, FORGERY_SWORD, names::SENTINELS_DAGGER),
    // v1.2
    spec("zhezhi", "Zhezhi", 5, WeaponClass::Rectifier, ["Crit. Rate+", "ATK+"], names::SOUND_KEEPING_TACET_CORE, ENEMY_HOWLER, names::LANTERNBERRY, FORGERY_RECTIFIER, names::MONUMENT_BELL),
    spec("xiangli_yao", "Xiangli Yao", 5, WeaponClass::Gauntlets, ["Crit. DMG+", "ATK+"], names::HIDDEN_THUNDER_TACET_CORE, ENEMY_WHISPERIN, names::VIOLET_CORAL, FORGERY_GAUNTLETS, names::UNENDING_DESTRUCTION),
    // v1.3
    spec("shorekeeper", "Shorekeeper", 5, WeaponClass::Rectifier, ["Healing Bonus+", "HP+"], names::TOPOLOGICAL_CONFINEMENT, ENEMY_WHISPERIN, names::NOVA, FORGERY_RECTIFIER, names::SENTINELS_DAGGER),
    spec("youhu", "Youhu", 4, WeaponClass::Gauntlets, ["Crit. Rate+", "ATK+"], names::TOPOLOGICAL_CONFINEMENT, ENEMY_RING, names::VIOLET_CORAL, FORGERY_GAUNTLETS, names::MONUMENT_BELL),
    // v1.4
    spec("camellya", "Camellya", 5, WeaponClass::Sword, ["Crit. DMG+", "ATK+"], names::TOPOLOGICAL_CONFINEMENT, ENEMY_WHISPERIN, names::NOVA, FORGERY_SWORD, names::DREAMLESS_FEATHER),
    spec("lumi", "Lumi", 4, WeaponClass::Broadblade, ["Crit. Rate+", "ATK+"], names::THUNDERING_TACET_CORE, ENEMY_HOWLER, names::TERRASPAWN_FUNGUS, FORGERY_BROADBLADE, names::SENTINELS_DAGGER),
    // v2.0
    spec("carlotta", "Carlotta", 5, WeaponClass::Pistol, ["Crit. Rate+", "ATK+"], names::PLATINUM_CORE, ENEMY_POLYGON, names::SWORD_ACORUS, FORGERY_PISTOL, names::THE_NETHERWORLDS_STARE),
    spec("roccia", "Roccia", 5, WeaponClass::Gauntlets, ["Crit. DMG+", "ATK+"], names::CLEANSING_CONCH, ENEMY_TIDAL_RESIDUUM, names::FIRECRACKER_JEWELWEED, FORGERY_GAUNTLETS, names::THE_NETHERWORLDS_STARE),
    // v2.1
    spec("phoebe", "Phoebe", 5, WeaponClass::Rectifier, ["Crit. DMG+", "ATK+"], names::CLEANSING_CONCH, ENEMY_WHISPERIN, names::FIRECRACKER_JEWELWEED, FORGERY_RECTIFIER, names::SENTINELS_DAGGER),
    spec("brant", "Brant", 5, WeaponClass::Sword, ["Crit. Rate+", "ATK+"], names::BLAZING_BONE, ENEMY_TIDAL_RESIDUUM, names::GOLDEN_FLEECE, FORGERY_SWORD, names::THE_NETHERWORLDS_STARE),
    // v2.2
    with_overrides(
        spec("rover_aero", "Rover (Aero)", 5, WeaponClass::Sword, ["Healing Bonus+", "ATK+"], names::MYSTERIOUS_CODE, ENEMY_TIDAL_RESIDUUM, names::PECOK_FLOWER, FORGERY_SWORD, names::WHEN_IRISES_BLOOM),
        PROTAGONIST_OVERRIDES,
    ),
    spec("cantarella", "Cantarella", 5, WeaponClass::Rectifier, ["Crit. Rate+", "ATK+"], names::CLEANSING_CONCH, ENEMY_POLYGON, names::SEASIDE_CENDRELIS, FORGERY_RECTIFIER, names::WHEN_IRISES_BLOOM),
    // v2.3
    spec("zani", "Zani", 5, WeaponClass::Gauntlets, ["Crit. Rate+", "ATK+"], names::PLATINUM_CORE, ENEMY_POLYGON, names::SWORD_ACORUS, FORGERY_GAUNTLETS, names::THE_NETHERWORLDS_STARE),
    spec("ciaccona", "Ciaccona", 5, WeaponClass::Pistol, ["Crit. DMG+", "ATK+"], names::BLAZING_BONE, ENEMY_TIDAL_RESIDUUM, names::GOLDEN_FLEECE, FORGERY_PISTOL, names::WHEN_IRISES_BLOOM),
    // v2.4
    spec("cartethyia", "Cartethyia", 5, WeaponClass::Sword, ["Crit. Rate+", "HP+"], names::UNFADING_GLORY, ENEMY_TIDAL_RESIDUUM, names::BAMBOO_IRIS, FORGERY_SWORD, names::WHEN_IRISES_BLOOM),
    spec("lupa", "Lupa", 5, WeaponClass::Broadblade, ["Crit. Rate+", "ATK+"], names::UNFADING_GLORY, ENEMY_HOWLER, names::BLOODLEAF_VIBURNUM, FORGERY_BROADBLADE, names::THE_NETHERWORLDS_STARE),
    // v2.5
    prerelease(spec("phrolova", "Phrolova", 5, WeaponClass::Rectifier, ["Crit. Rate+", "ATK+"], names::TRUTH_IN_LIES, ENEMY_POLYGON, names::AFTERLIFE, FORGERY_RECTIFIER, names::THE_NETHERWORLDS_STARE)),
];
