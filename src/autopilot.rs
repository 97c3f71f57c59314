//! Idle/demo mode: a castaway that plays itself
//!
//! The autopilot only reads what the HUD shows, so under the Blue Pill it is
//! fooled exactly like a human would be.

use glam::IVec2;
use rand::Rng;

use crate::sim::{self, ItemKind, SimError, WorldState};

/// Displayed hunger/thirst below which the autopilot eats
pub const EAT_BELOW: f32 = 60.0;

/// One player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move { dx: i32, dy: i32 },
    Consume(usize),
    Wait,
}

impl Intent {
    /// Apply this intent to a snapshot
    pub fn apply(self, state: &WorldState) -> Result<WorldState, SimError> {
        match self {
            Intent::Move { dx, dy } => Ok(sim::move_player(state, dx, dy)),
            Intent::Consume(index) => sim::consume_item(state, index),
            Intent::Wait => Ok(state.clone()),
        }
    }
}

/// Pick the next intent: eat if the HUD says so, otherwise walk toward the
/// nearest item, otherwise wander
pub fn choose_intent<R: Rng + ?Sized>(state: &WorldState, rng: &mut R) -> Intent {
    if !state.is_playing() {
        return Intent::Wait;
    }

    let shown = &state.player.display_stats;
    if shown.thirst < EAT_BELOW || shown.hunger < EAT_BELOW {
        if let Some(index) = state
            .player
            .inventory
            .iter()
            .position(|&k| k == ItemKind::Coconut)
        {
            return Intent::Consume(index);
        }
    }

    let pos = state.player.pos;
    let nearest = state
        .items
        .iter()
        .min_by_key(|item| manhattan(pos, item.pos))
        .map(|item| item.pos);

    if let Some(target) = nearest {
        let delta = target - pos;
        let horizontal = IVec2::new(delta.x.signum(), 0);
        let vertical = IVec2::new(0, delta.y.signum());
        let (first, second) = if delta.x.abs() >= delta.y.abs() {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        };
        for step in [first, second] {
            if step != IVec2::ZERO && state.grid.is_walkable(pos + step) {
                return Intent::Move {
                    dx: step.x,
                    dy: step.y,
                };
            }
        }
    }

    let dirs = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];
    let open: Vec<IVec2> = dirs
        .into_iter()
        .filter(|&d| state.grid.is_walkable(pos + d))
        .collect();
    if open.is_empty() {
        return Intent::Wait;
    }
    let step = open[rng.random_range(0..open.len())];
    Intent::Move {
        dx: step.x,
        dy: step.y,
    }
}

fn manhattan(a: IVec2, b: IVec2) -> i32 {
    (a - b).abs().element_sum()
}
