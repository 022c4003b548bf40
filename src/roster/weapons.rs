//! Weapon definitions
//!
//! One spec row per weapon. The forgery family always matches the weapon
//! class; the enemy family varies per weapon. Only 4-star and 5-star
//! weapons have published progression data.

use super::{Weapon, WeaponClass};
use crate::catalog::sets::{
    ENEMY_HOWLER, ENEMY_RING, ENEMY_WHISPERIN, FORGERY_BROADBLADE, FORGERY_GAUNTLETS,
    FORGERY_PISTOL, FORGERY_RECTIFIER, FORGERY_SWORD,
};
use crate::catalog::{names, MaterialCatalog, TierFamily};
use crate::core::{PlannerError, Result};
use crate::template::{apply_template, tables, Slot, SlotBinding, SlotMap};

pub(crate) struct WeaponSpec {
    id: &'static str,
    name: &'static str,
    rarity: u8,
    weapon_class: WeaponClass,
    forgery: TierFamily,
    enemy: TierFamily,
}

impl WeaponSpec {
    pub(crate) fn build(&self, catalog: &MaterialCatalog) -> Result<Weapon> {
        let (ascension_template, exp_template) = match self.rarity {
            5 => (tables::WEAPON_ASCENSION_5, tables::WEAPON_EXP_5),
            4 => (tables::WEAPON_ASCENSION_4, tables::WEAPON_EXP_4),
            rarity => {
                return Err(PlannerError::UnsupportedWeaponRarity {
                    id: self.id.to_string(),
                    rarity,
                })
            }
        };

        let ascension_map = SlotMap::new()
            .bind(Slot::Forgery, SlotBinding::Family(self.forgery))
            .bind(Slot::Enemy, SlotBinding::Family(self.enemy))
            .bind(Slot::Credits, SlotBinding::Single(names::SHELL_CREDITS));
        let exp_map = SlotMap::new()
            .bind(Slot::Xp, SlotBinding::Single(names::PREMIUM_ENERGY_CORE))
            .bind(Slot::Credits, SlotBinding::Single(names::SHELL_CREDITS));

        Ok(Weapon {
            id: self.id,
            name: self.name,
            rarity: self.rarity,
            weapon_class: self.weapon_class,
            ascension: apply_template(ascension_template, &ascension_map, catalog),
            exp: apply_template(exp_template, &exp_map, catalog),
        })
    }
}

const fn spec(
    id: &'static str,
    name: &'static str,
    rarity: u8,
    weapon_class: WeaponClass,
    forgery: TierFamily,
    enemy: TierFamily,
) -> WeaponSpec {
    WeaponSpec {
        id,
        name,
        rarity,
        weapon_class,
        forgery,
        enemy,
    }
}

pub(crate) static WEAPON_SPECS: &[WeaponSpec] = &[
    // v1.0
    spec("abyss_surges", "Abyss Surges", 5, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("amity_accord", "Amity Accord", 4, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("augment", "Augment", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("autumntrace", "Autumntrace", 4, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("cadenza", "Cadenza", 4, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("comet_flare", "Comet Flare", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("commando_of_conviction", "Commando of Conviction", 4, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("cosmic_ripples", "Cosmic Ripples", 5, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("dauntless_evernight", "Dauntless Evernight", 4, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("discord", "Discord", 4, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("emerald_of_genesis", "Emerald of Genesis", 5, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("helios_cleaver", "Helios Cleaver", 4, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("hollow_mirage", "Hollow Mirage", 4, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("jinzhou_keeper", "Jinzhou Keeper", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("lumingloss", "Lumingloss", 4, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("lunar_cutter", "Lunar Cutter", 4, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("lustrous_razor", "Lustrous Razor", 5, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("marcato", "Marcato", 4, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("novaburst", "Novaburst", 4, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("overture", "Overture", 4, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("static_mist", "Static Mist", 5, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("stonard", "Stonard", 4, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("stringmaster", "Stringmaster", 5, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("thunderbolt", "Thunderbolt", 4, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("undying_flame", "Undying Flame", 4, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("variation", "Variation", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("verdant_summit", "Verdant Summit", 5, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    // v1.1
    spec("ages_of_harvest", "Ages of Harvest", 5, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("blazing_brilliance", "Blazing Brilliance", 5, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    // v1.2
    spec("rime_draped_sprouts", "Rime-Draped Sprouts", 5, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("veritys_handle", "Verity's Handle", 5, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    // v1.3
    spec("stellar_symphony", "Stellar Symphony", 5, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("waning_redshift", "Waning Redshift", 4, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("endless_collapse", "Endless Collapse", 4, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("relativistic_jet", "Relativistic Jet", 4, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("celestial_spiral", "Celestial Spiral", 4, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("fusion_accretion", "Fusion Accretion", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    // v1.4
    spec("red_spring", "Red Spring", 5, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("somnoire_anchor", "Somnoire Anchor", 4, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    // v2.0
    spec("the_last_dance", "The Last Dance", 5, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("tragicomedy", "Tragicomedy", 5, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("call_of_the_abyss", "Call of the Abyss", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("meditations_on_mercy", "Meditations On Mercy", 4, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
    spec("legend_of_drunken_hero", "Legend of Drunken Hero", 4, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("romance_in_farewell", "Romance in Farewell", 4, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    spec("waltz_in_masquerade", "Waltz in Masquerade", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("fables_of_wisdom", "Fables of Wisdom", 4, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    // v2.1
    spec("luminous_hymn", "Luminous Hymn", 5, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("unflickering_valor", "Unflickering Valor", 5, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("oceans_gift", "Ocean's Gift", 4, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    // v2.2
    spec("whispers_of_sirens", "Whispers of Sirens", 5, WeaponClass::Rectifier, FORGERY_RECTIFIER, ENEMY_RING),
    spec("bloodpacts_pledge", "Bloodpact's Pledge", 5, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    // v2.3
    spec("blazing_justice", "Blazing Justice", 5, WeaponClass::Gauntlets, FORGERY_GAUNTLETS, ENEMY_HOWLER),
    spec("woodland_aria", "Woodland Aria", 5, WeaponClass::Pistol, FORGERY_PISTOL, ENEMY_RING),
    // v2.4
    spec("defiers_thorn", "Defier's Thorn", 5, WeaponClass::Sword, FORGERY_SWORD, ENEMY_HOWLER),
    spec("wildfire_mark", "Wildfire Mark", 5, WeaponClass::Broadblade, FORGERY_BROADBLADE, ENEMY_WHISPERIN),
];
