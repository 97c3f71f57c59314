//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every transition maps a snapshot to a new snapshot
//! - Seeded RNG only, carried inside the snapshot
//! - Time is the tick counter, never the wall clock
//! - No rendering or platform dependencies

pub mod actions;
pub mod ai;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod perception;
pub mod spawn;
pub mod state;
pub mod tick;

pub use actions::{apply_item, consume_item, move_player};
pub use ai::{AiOutcome, Attack, step_entity};
pub use error::{Result, SimError};
pub use grid::{Tile, WorldGrid};
pub use mapgen::{generate_map, wreckage_position};
pub use perception::{is_visible, perceive};
pub use spawn::{find_player_start, find_valid_spawn};
pub use state::{
    Entity, EntityKind, Facing, GameMode, Item, ItemKind, MessageLog, Pill, Player, Stats,
    WorldState,
};
pub use tick::{advance_tick, decay};
