//! Data-driven game balance
//!
//! Every number the simulation balances around lives here. Defaults match
//! the shipped game; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAP_HEIGHT, MAP_WIDTH};

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-species creature balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureTuning {
    /// How many spawn at world creation
    pub count: u32,
    pub hp: f32,
    /// Health removed from the player per attack
    pub damage: f32,
    /// Ticks between actions
    pub move_cooldown_ticks: u64,
    /// Probability an individual stays visible under the Blue Pill
    pub blue_visibility_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub map_width: u32,
    pub map_height: u32,
    pub coconut_count: u32,

    // === Survival ===
    /// Stat decay runs on every multiple of this tick count
    pub decay_interval_ticks: u64,
    pub hunger_decay: f32,
    pub thirst_decay: f32,
    pub stamina_regen: f32,
    /// Health lost per decay while hunger is empty
    pub starvation_damage: f32,
    /// Health lost per decay while thirst is empty
    pub dehydration_damage: f32,
    /// Hunger and thirst must both exceed this for stamina to regenerate
    pub regen_threshold: f32,
    pub red_pill_start_health: f32,
    pub blue_pill_start_health: f32,

    // === Creatures ===
    pub crab: CreatureTuning,
    pub boar: CreatureTuning,
    /// Hostile creatures closer than this chase the player
    pub chase_radius: f32,
    /// Hostile creatures this close attack instead of moving
    pub attack_radius: f32,
    /// Extra ticks a creature waits after attacking
    pub attack_cooldown_ticks: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            coconut_count: 10,

            decay_interval_ticks: 60,
            hunger_decay: 0.05,
            thirst_decay: 0.08,
            stamina_regen: 0.5,
            starvation_damage: 0.5,
            dehydration_damage: 1.0,
            regen_threshold: 20.0,
            red_pill_start_health: 60.0,
            blue_pill_start_health: 100.0,

            crab: CreatureTuning {
                count: 5,
                hp: 20.0,
                damage: 5.0,
                move_cooldown_ticks: 60,
                blue_visibility_chance: 1.0,
            },
            boar: CreatureTuning {
                count: 3,
                hp: 50.0,
                damage: 15.0,
                move_cooldown_ticks: 48,
                blue_visibility_chance: 0.5,
            },
            chase_radius: 6.0,
            attack_radius: 1.5,
            attack_cooldown_ticks: 30,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
