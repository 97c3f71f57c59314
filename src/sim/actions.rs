//! Player intents: walking and using inventory items

use glam::IVec2;

use super::error::{Result, SimError};
use super::perception::perceive;
use super::state::{Facing, GameMode, ItemKind, Pill, Stats, WorldState};
use crate::consts::STAT_MAX;

/// Step the player by `(dx, dy)`, picking up whatever lies on the
/// destination. Blocked or out-of-bounds steps leave the world unchanged.
pub fn move_player(state: &WorldState, dx: i32, dy: i32) -> WorldState {
    if state.mode != GameMode::Playing {
        return state.clone();
    }

    let dest = state.player.pos + IVec2::new(dx, dy);
    if !state.grid.is_walkable(dest) {
        return state.clone();
    }

    let mut next = state.clone();
    next.player.pos = dest;
    if dx > 0 {
        next.player.facing = Facing::Right;
    } else if dx < 0 {
        next.player.facing = Facing::Left;
    }

    if let Some(index) = next.items.iter().position(|i| i.pos == dest) {
        let item = next.items.remove(index);
        if next.pill == Pill::Blue && item.illusory {
            next.messages.push("You picked up... nothing?");
        } else {
            next.player.inventory.push(item.kind);
            next.messages.push(format!("Picked up {}", item.kind));
        }
    }

    next
}

/// Use the inventory item at `index`. Finished runs are left untouched.
pub fn consume_item(state: &WorldState, index: usize) -> Result<WorldState> {
    if state.mode != GameMode::Playing {
        return Ok(state.clone());
    }

    let len = state.player.inventory.len();
    if index >= len {
        return Err(SimError::InvalidInventoryIndex { index, len });
    }

    let mut next = state.clone();
    let kind = next.player.inventory.remove(index);
    next.player.real_stats = apply_item(&next.player.real_stats, kind);
    next.player.display_stats = perceive(&next.player.real_stats, next.pill, next.tick);
    next.messages.push(format!("You used {kind}."));
    Ok(next)
}

/// Effect of consuming one item on the real stats
pub fn apply_item(stats: &Stats, kind: ItemKind) -> Stats {
    let mut out = *stats;
    match kind {
        ItemKind::Coconut => {
            out.thirst = (out.thirst + 20.0).min(STAT_MAX);
            out.hunger = (out.hunger + 5.0).min(STAT_MAX);
        }
        ItemKind::Meat => {
            out.hunger = (out.hunger + 30.0).min(STAT_MAX);
            // Raw meat
            out.health = (out.health - 5.0).max(0.0);
        }
        ItemKind::Medkit => {
            out.health = (out.health + 50.0).min(STAT_MAX);
        }
        ItemKind::Wood | ItemKind::Spear | ItemKind::FakeWater => {}
    }
    out
}
