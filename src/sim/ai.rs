//! Creature behaviour
//!
//! Each creature decides on its own from the snapshot taken at the start of
//! the AI pass; creatures never coordinate or see each other's moves.

use glam::IVec2;
use rand::Rng;

use super::grid::WorldGrid;
use super::state::{Entity, EntityKind};
use crate::tuning::Tuning;

/// An attack landed on the player this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attack {
    pub attacker: u32,
    pub kind: EntityKind,
    pub damage: f32,
}

/// Result of one creature's turn
#[derive(Debug, Clone, PartialEq)]
pub struct AiOutcome {
    pub entity: Entity,
    pub attack: Option<Attack>,
}

const CARDINALS: [IVec2; 4] = [IVec2::NEG_Y, IVec2::Y, IVec2::NEG_X, IVec2::X];

/// Run one creature's turn at `tick`
pub fn step_entity<R: Rng + ?Sized>(
    entity: &Entity,
    grid: &WorldGrid,
    player_pos: IVec2,
    tick: u64,
    tuning: &Tuning,
    rng: &mut R,
) -> AiOutcome {
    // Cooling down (last_move_tick may be in the future after an attack)
    if tick.saturating_sub(entity.last_move_tick) < entity.move_cooldown_ticks {
        return AiOutcome {
            entity: entity.clone(),
            attack: None,
        };
    }

    let to_player = player_pos - entity.pos;
    let distance = to_player.as_vec2().length();
    let mut next = entity.clone();

    let step = if entity.hostile && distance < tuning.chase_radius {
        if distance <= tuning.attack_radius {
            log::debug!("{} {} attacks for {}", entity.kind.name(), entity.id, entity.damage);
            next.last_move_tick = tick + tuning.attack_cooldown_ticks;
            return AiOutcome {
                entity: next,
                attack: Some(Attack {
                    attacker: entity.id,
                    kind: entity.kind,
                    damage: entity.damage,
                }),
            };
        }
        // Close in along one axis only
        let dir = to_player.signum();
        if rng.random_bool(0.5) {
            IVec2::new(dir.x, 0)
        } else {
            IVec2::new(0, dir.y)
        }
    } else {
        CARDINALS[rng.random_range(0..CARDINALS.len())]
    };

    let dest = entity.pos + step;
    if grid.is_walkable(dest) {
        next.pos = dest;
    }
    next.last_move_tick = tick;

    AiOutcome {
        entity: next,
        attack: None,
    }
}
