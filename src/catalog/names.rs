//! Canonical material names
//!
//! Exact in-game display strings; these are the lookup keys used by the
//! catalog, the roster tables and the inventory.

// Character ascension boss materials
pub const ELEGY_TACET_CORE: &str = "Elegy Tacet Core";
pub const GOLD_DISSOLVING_FEATHER: &str = "Gold-Dissolving Feather";
pub const GROUP_ABOMINATION_TACET_CORE: &str = "Group Abomination Tacet Core";
pub const HIDDEN_THUNDER_TACET_CORE: &str = "Hidden Thunder Tacet Core";
pub const MYSTERIOUS_CODE: &str = "Mysterious Code";
pub const RAGE_TACET_CORE: &str = "Rage Tacet Core";
pub const ROARING_ROCK_FIST: &str = "Roaring Rock Fist";
pub const SOUND_KEEPING_TACET_CORE: &str = "Sound-Keeping Tacet Core";
pub const STRIFE_TACET_CORE: &str = "Strife Tacet Core";
pub const THUNDERING_TACET_CORE: &str = "Thundering Tacet Core";
pub const TOPOLOGICAL_CONFINEMENT: &str = "Topological Confinement";
pub const BLAZING_BONE: &str = "Blazing Bone";
pub const CLEANSING_CONCH: &str = "Cleansing Conch";
pub const PLATINUM_CORE: &str = "Platinum Core";
pub const UNFADING_GLORY: &str = "Unfading Glory";
// Placeholder until the v2.5 drop is named
pub const TRUTH_IN_LIES: &str = "Truth in Lies";

// Common enemy materials, four tiers per family
pub const LF_HOWLER_CORE: &str = "LF Howler Core";
pub const MF_HOWLER_CORE: &str = "MF Howler Core";
pub const HF_HOWLER_CORE: &str = "HF Howler Core";
pub const FF_HOWLER_CORE: &str = "FF Howler Core";

pub const LF_POLYGON_CORE: &str = "LF Polygon Core";
pub const MF_POLYGON_CORE: &str = "MF Polygon Core";
pub const HF_POLYGON_CORE: &str = "HF Polygon Core";
pub const FF_POLYGON_CORE: &str = "FF Polygon Core";

pub const LF_TIDAL_RESIDUUM: &str = "LF Tidal Residuum";
pub const MF_TIDAL_RESIDUUM: &str = "MF Tidal Residuum";
pub const HF_TIDAL_RESIDUUM: &str = "HF Tidal Residuum";
pub const FF_TIDAL_RESIDUUM: &str = "FF Tidal Residuum";

pub const LF_WHISPERIN_CORE: &str = "LF Whisperin Core";
pub const MF_WHISPERIN_CORE: &str = "MF Whisperin Core";
pub const HF_WHISPERIN_CORE: &str = "HF Whisperin Core";
pub const FF_WHISPERIN_CORE: &str = "FF Whisperin Core";

pub const CRUDE_RING: &str = "Crude Ring";
pub const BASIC_RING: &str = "Basic Ring";
pub const IMPROVED_RING: &str = "Improved Ring";
pub const TAILORED_RING: &str = "Tailored Ring";

// Forgery materials, four tiers per weapon class
pub const INERT_METALLIC_DRIP: &str = "Inert Metallic Drip";
pub const REACTIVE_METALLIC_DRIP: &str = "Reactive Metallic Drip";
pub const POLARIZED_METALLIC_DRIP: &str = "Polarized Metallic Drip";
pub const HETERIZED_METALLIC_DRIP: &str = "Heterized Metallic Drip";

pub const IMPURE_PHLOGISTON: &str = "Impure Phlogiston";
pub const EXTRACTED_PHLOGISTON: &str = "Extracted Phlogiston";
pub const REFINED_PHLOGISTON: &str = "Refined Phlogiston";
pub const FLAWLESS_PHLOGISTON: &str = "Flawless Phlogiston";

pub const LENTO_HELIX: &str = "Lento Helix";
pub const ADAGIO_HELIX: &str = "Adagio Helix";
pub const ANDANTE_HELIX: &str = "Andante Helix";
pub const PRESTO_HELIX: &str = "Presto Helix";

pub const WAVEWORN_RESIDUE_210: &str = "Waveworn Residue 210";
pub const WAVEWORN_RESIDUE_226: &str = "Waveworn Residue 226";
pub const WAVEWORN_RESIDUE_235: &str = "Waveworn Residue 235";
pub const WAVEWORN_RESIDUE_239: &str = "Waveworn Residue 239";

pub const CADENCE_SEED: &str = "Cadence Seed";
pub const CADENCE_BUD: &str = "Cadence Bud";
pub const CADENCE_LEAF: &str = "Cadence Leaf";
pub const CADENCE_BLOSSOM: &str = "Cadence Blossom";

// Experience materials
pub const BASIC_RESONANCE_POTION: &str = "Basic Resonance Potion";
pub const MEDIUM_RESONANCE_POTION: &str = "Medium Resonance Potion";
pub const ADVANCED_RESONANCE_POTION: &str = "Advanced Resonance Potion";
pub const PREMIUM_RESONANCE_POTION: &str = "Premium Resonance Potion";

pub const BASIC_ENERGY_CORE: &str = "Basic Energy Core";
pub const MEDIUM_ENERGY_CORE: &str = "Medium Energy Core";
pub const ADVANCED_ENERGY_CORE: &str = "Advanced Energy Core";
pub const PREMIUM_ENERGY_CORE: &str = "Premium Energy Core";

// Currencies
pub const SHELL_CREDITS: &str = "Shell Credits";
pub const WAVEPLATES: &str = "Waveplates";

// Weekly boss materials
pub const DREAMLESS_FEATHER: &str = "Dreamless Feather";
pub const MONUMENT_BELL: &str = "Monument Bell";
pub const UNENDING_DESTRUCTION: &str = "Unending Destruction";
pub const SENTINELS_DAGGER: &str = "Sentinel's Dagger";
pub const THE_NETHERWORLDS_STARE: &str = "The Netherworld's Stare";
pub const WHEN_IRISES_BLOOM: &str = "When Irises Bloom";

// World specialties
pub const BELLE_POPPY: &str = "Belle Poppy";
pub const CORIOLUS: &str = "Coriolus";
pub const IRIS: &str = "Iris";
pub const LANTERNBERRY: &str = "Lanternberry";
pub const PECOK_FLOWER: &str = "Pecok Flower";
pub const TERRASPAWN_FUNGUS: &str = "Terraspawn Fungus";
pub const VIOLET_CORAL: &str = "Violet Coral";
pub const WINTRY_BELL: &str = "Wintry Bell";
pub const LOONGS_PEARL: &str = "Loong's Pearl";
pub const PAVO_PLUM: &str = "Pavo Plum";
pub const NOVA: &str = "Nova";
pub const FIRECRACKER_JEWELWEED: &str = "Firecracker Jewelweed";
pub const GOLDEN_FLEECE: &str = "Golden Fleece";
pub const SWORD_ACORUS: &str = "Sword Acorus";
pub const SEASIDE_CENDRELIS: &str = "Seaside Cendrelis";
pub const BAMBOO_IRIS: &str = "Bamboo Iris";
pub const BLOODLEAF_VIBURNUM: &str = "Bloodleaf Viburnum";
// Placeholder until the v2.5 specialty is named
pub const AFTERLIFE: &str = "Afterlife";
