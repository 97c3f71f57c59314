//! Friday's Lies - island survival where the HUD may lie to you
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world generation, ticks, AI, perception)
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Idle/demo player that drives a session headlessly

pub mod autopilot;
pub mod sim;
pub mod tuning;

pub use tuning::{CreatureTuning, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Default island dimensions (tiles)
    pub const MAP_WIDTH: u32 = 50;
    pub const MAP_HEIGHT: u32 = 50;

    /// Logical ticks per wall-clock second the driver is expected to run at
    pub const TICKS_PER_SECOND: u64 = 60;

    /// Time-of-day wraps at this value; each wrap is a new day
    pub const DAY_CYCLE: u32 = 2400;
    /// Time of day a fresh run starts at (morning)
    pub const START_TIME_OF_DAY: u32 = 800;

    /// Upper bound for every player stat
    pub const STAT_MAX: f32 = 100.0;

    /// Number of log lines kept in the world state
    pub const MESSAGE_LOG_LEN: usize = 5;

    /// Rejection-sampling cap for spawn searches
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}
