use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Unknown material '{material}' referenced by {entity}")]
    UnknownMaterial { entity: String, material: String },

    #[error("Unknown character id: {0}")]
    UnknownCharacter(String),

    #[error("Unknown weapon id: {0}")]
    UnknownWeapon(String),

    #[error("Unsupported rarity {rarity} for weapon '{id}'")]
    UnsupportedWeaponRarity { id: String, rarity: u8 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
