use thiserror::Error;

/// Recoverable simulation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("cannot generate a {width}x{height} map")]
    EmptyMap { width: u32, height: u32 },

    #[error("no walkable tile found after {attempts} attempts")]
    NoValidSpawn { attempts: u32 },

    #[error("inventory slot {index} out of range (inventory holds {len})")]
    InvalidInventoryIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
