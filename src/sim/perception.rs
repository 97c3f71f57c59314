//! What the castaway believes
//!
//! Under the Red Pill the HUD mirrors reality. Under the Blue Pill it shows
//! comfortable numbers with a gentle wobble and only admits trouble when a
//! stat is nearly gone, so the reveal comes late and all at once.

use super::state::{Entity, Pill, Stats};

/// Real health below this is no longer hidden under the Blue Pill
pub const HEALTH_REVEAL_BELOW: f32 = 20.0;
/// Shown on top of real health once the reveal starts
pub const HEALTH_REVEAL_BONUS: f32 = 20.0;
/// Real hunger/thirst below this shows as `NEED_REVEAL_VALUE`
pub const NEED_REVEAL_BELOW: f32 = 10.0;
pub const NEED_REVEAL_VALUE: f32 = 30.0;
/// Centre and amplitude of the comforting hunger/thirst wobble
pub const NEED_COMFORT_BASE: f32 = 90.0;
pub const NEED_COMFORT_WOBBLE: f32 = 5.0;
/// Radians of wobble per tick
pub const WOBBLE_RATE: f64 = 0.05;

/// Map real stats to the stats the HUD shows
pub fn perceive(real: &Stats, pill: Pill, tick: u64) -> Stats {
    let shown = match pill {
        Pill::Red => *real,
        Pill::Blue => {
            let phase = tick as f64 * WOBBLE_RATE;
            Stats {
                health: if real.health < HEALTH_REVEAL_BELOW {
                    real.health + HEALTH_REVEAL_BONUS
                } else {
                    100.0
                },
                hunger: if real.hunger < NEED_REVEAL_BELOW {
                    NEED_REVEAL_VALUE
                } else {
                    NEED_COMFORT_BASE + phase.sin() as f32 * NEED_COMFORT_WOBBLE
                },
                thirst: if real.thirst < NEED_REVEAL_BELOW {
                    NEED_REVEAL_VALUE
                } else {
                    NEED_COMFORT_BASE + phase.cos() as f32 * NEED_COMFORT_WOBBLE
                },
                stamina: 100.0,
            }
        }
    };
    shown.clamped()
}

/// Whether a creature is drawn for the player
pub fn is_visible(entity: &Entity, pill: Pill) -> bool {
    match pill {
        Pill::Red => true,
        Pill::Blue => entity.visible_in_blue,
    }
}
