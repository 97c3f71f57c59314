//! Fixed-step simulation tick
//!
//! Advances the world by one logical tick. The order of the stages matters:
//! decay, then creature AI, then the HUD remap, then the death check, so a
//! starvation tick can kill the player in the same tick it lands.

use super::ai::step_entity;
use super::perception::perceive;
use super::state::{GameMode, Stats, WorldState};
use crate::consts::{DAY_CYCLE, STAT_MAX};
use crate::tuning::Tuning;

/// Advance the world by one tick
pub fn advance_tick(state: &WorldState) -> WorldState {
    if state.mode != GameMode::Playing {
        return state.clone();
    }

    let mut next = state.clone();

    // 1. Clock
    next.tick += 1;
    next.time_of_day = (next.time_of_day + 1) % DAY_CYCLE;
    if next.time_of_day == 0 {
        next.day += 1;
        log::info!("Day {} begins", next.day);
    }

    // 2. Hunger and thirst
    if next.tick % next.tuning.decay_interval_ticks.max(1) == 0 {
        next.player.real_stats = decay(&next.player.real_stats, &next.tuning);
    }

    // 3. Creatures (the dead leave before anyone acts)
    remove_dead_entities(&mut next);
    run_ai(&mut next);

    // 4. The HUD
    next.player.display_stats = perceive(&next.player.real_stats, next.pill, next.tick);

    // 5. Death
    if next.player.real_stats.health <= 0.0 {
        next.player.real_stats.health = 0.0;
        next.mode = GameMode::GameOver;
        next.messages.push("You succumbed to the island.");
        log::info!(
            "Game over on day {} after {} ticks ({:?} pill)",
            next.day,
            next.tick,
            next.pill
        );
    }

    next
}

/// One decay step. Health is left unclamped; the death check settles it.
pub fn decay(stats: &Stats, tuning: &Tuning) -> Stats {
    let mut out = *stats;
    out.hunger = (out.hunger - tuning.hunger_decay).max(0.0);
    out.thirst = (out.thirst - tuning.thirst_decay).max(0.0);

    if out.hunger <= 0.0 {
        out.health -= tuning.starvation_damage;
    }
    if out.thirst <= 0.0 {
        out.health -= tuning.dehydration_damage;
    }

    if out.hunger > tuning.regen_threshold && out.thirst > tuning.regen_threshold {
        out.stamina = (out.stamina + tuning.stamina_regen).min(STAT_MAX);
    }
    out
}

fn run_ai(state: &mut WorldState) {
    let player_pos = state.player.pos;
    let entities = std::mem::take(&mut state.entities);
    let mut updated = Vec::with_capacity(entities.len());

    for entity in &entities {
        let outcome = step_entity(
            entity,
            &state.grid,
            player_pos,
            state.tick,
            &state.tuning,
            &mut state.rng,
        );
        if let Some(attack) = outcome.attack {
            state.player.real_stats.health -= attack.damage;
            state
                .messages
                .push(format!("The {} attacked you!", attack.kind.name()));
        }
        updated.push(outcome.entity);
    }

    state.entities = updated;
}

/// Creatures at zero hp leave the world
fn remove_dead_entities(state: &mut WorldState) {
    let (dead, alive): (Vec<_>, Vec<_>) = std::mem::take(&mut state.entities)
        .into_iter()
        .partition(|e| e.is_dead());
    for entity in &dead {
        log::debug!("{} {} removed at 0 hp", entity.kind.name(), entity.id);
        state.messages.push(format!("The {} lies still.", entity.kind.name()));
    }
    state.entities = alive;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EntityKind, Pill};
    use crate::sim::test_support::{crab, sandbox};
    use glam::IVec2;
    use proptest::prelude::*;

    #[test]
    fn test_decay_when_empty() {
        let stats = Stats {
            health: 50.0,
            hunger: 0.0,
            thirst: 0.0,
            stamina: 50.0,
        };
        let out = decay(&stats, &Tuning::default());
        assert_eq!(out.health, 48.5);
        assert_eq!(out.hunger, 0.0);
        assert_eq!(out.thirst, 0.0);
        assert_eq!(out.stamina, 50.0);
    }

    #[test]
    fn test_decay_regenerates_stamina_when_fed() {
        let stats = Stats {
            health: 50.0,
            hunger: 80.0,
            thirst: 80.0,
            stamina: 99.8,
        };
        let out = decay(&stats, &Tuning::default());
        assert_eq!(out.health, 50.0);
        assert!((out.hunger - 79.95).abs() < 1e-4);
        assert!((out.thirst - 79.92).abs() < 1e-4);
        assert_eq!(out.stamina, 100.0);
    }

    #[test]
    fn test_decay_may_leave_health_negative() {
        let stats = Stats {
            health: 0.5,
            hunger: 0.0,
            thirst: 0.0,
            stamina: 0.0,
        };
        assert_eq!(decay(&stats, &Tuning::default()).health, -1.0);
    }

    #[test]
    fn test_clock_and_day_rollover() {
        let mut state = sandbox(Pill::Red);
        state.time_of_day = 2399;
        let next = advance_tick(&state);
        assert_eq!(next.tick, state.tick + 1);
        assert_eq!(next.time_of_day, 0);
        assert_eq!(next.day, state.day + 1);
        // The input snapshot is untouched
        assert_eq!(state.time_of_day, 2399);
    }

    #[test]
    fn test_decay_only_on_interval() {
        let mut state = sandbox(Pill::Red);
        state.tick = 58;
        let next = advance_tick(&state);
        assert_eq!(next.player.real_stats.hunger, state.player.real_stats.hunger);
        let next = advance_tick(&next);
        assert_eq!(next.tick, 60);
        assert!(next.player.real_stats.hunger < state.player.real_stats.hunger);
    }

    #[test]
    fn test_first_tick_corrects_display() {
        let state = sandbox(Pill::Red);
        assert_eq!(state.player.display_stats, Stats::FULL);
        let next = advance_tick(&state);
        assert_eq!(next.player.display_stats, next.player.real_stats);
    }

    #[test]
    fn test_starvation_ends_the_run() {
        let mut state = sandbox(Pill::Blue);
        state.player.real_stats = Stats {
            health: 1.0,
            hunger: 0.0,
            thirst: 0.0,
            stamina: 0.0,
        };
        let mut ticks = 0;
        while state.is_playing() {
            state = advance_tick(&state);
            ticks += 1;
            assert!(ticks <= 60, "should die on the first decay tick");
        }
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.player.real_stats.health, 0.0);
        assert_eq!(state.messages.latest(), Some("You succumbed to the island."));
    }

    #[test]
    fn test_game_over_is_frozen() {
        let mut state = sandbox(Pill::Red);
        state.mode = GameMode::GameOver;
        let next = advance_tick(&state);
        assert_eq!(next.tick, state.tick);
        assert_eq!(next.time_of_day, state.time_of_day);
        assert_eq!(next.player, state.player);
        assert_eq!(next.messages, state.messages);
    }

    #[test]
    fn test_creature_attack_hurts_real_health_only() {
        let mut state = sandbox(Pill::Blue);
        let pos = state.player.pos;
        state.tick = 119;
        let neighbour = crab(&mut state, pos + IVec2::X);
        state.entities.push(neighbour);
        let next = advance_tick(&state);
        assert_eq!(next.player.real_stats.health, 95.0);
        assert_eq!(next.player.display_stats.health, 100.0);
        assert_eq!(next.messages.latest(), Some("The crab attacked you!"));
    }

    #[test]
    fn test_attack_can_kill() {
        let mut state = sandbox(Pill::Red);
        let pos = state.player.pos;
        state.player.real_stats.health = 4.0;
        state.tick = 119;
        let neighbour = crab(&mut state, pos + IVec2::Y);
        state.entities.push(neighbour);
        let next = advance_tick(&state);
        assert_eq!(next.mode, GameMode::GameOver);
        assert_eq!(next.player.real_stats.health, 0.0);
    }

    #[test]
    fn test_dead_creatures_are_removed() {
        let mut state = sandbox(Pill::Red);
        let far = IVec2::new(1, 1);
        let mut dead = crab(&mut state, far);
        dead.hp = 0.0;
        let alive = crab(&mut state, IVec2::new(18, 18));
        state.entities = vec![dead, alive.clone()];

        let next = advance_tick(&state);
        assert_eq!(next.entities.len(), 1);
        assert_eq!(next.entities[0].id, alive.id);
        assert!(next.messages.iter().any(|m| m == "The crab lies still."));
    }

    #[test]
    fn test_dead_creature_does_not_attack() {
        let mut state = sandbox(Pill::Red);
        let pos = state.player.pos;
        let health = state.player.real_stats.health;
        state.tick = 119;
        let mut dead = crab(&mut state, pos + IVec2::X);
        dead.hp = 0.0;
        state.entities.push(dead);

        let next = advance_tick(&state);
        assert_eq!(next.player.real_stats.health, health);
        assert!(next.entities.is_empty());
        assert!(!next.messages.iter().any(|m| m == "The crab attacked you!"));
        assert_eq!(next.messages.latest(), Some("The crab lies still."));
    }

    #[test]
    fn test_snapshot_resumes_after_json_export() {
        let mut state = crate::sim::WorldState::new(Pill::Blue, 2024).unwrap();
        for _ in 0..150 {
            state = advance_tick(&state);
        }
        let json = serde_json::to_string(&state).unwrap();
        let mut restored: crate::sim::WorldState = serde_json::from_str(&json).unwrap();

        for _ in 0..300 {
            state = advance_tick(&state);
            restored = advance_tick(&restored);
        }
        assert_eq!(restored.tick, state.tick);
        assert_eq!(restored.player, state.player);
        assert_eq!(restored.entities, state.entities);
        assert_eq!(restored.messages, state.messages);
        assert_eq!(restored.grid, state.grid);
        assert_eq!(restored.tuning, state.tuning);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = crate::sim::WorldState::new(Pill::Blue, 99).unwrap();
        let mut b = crate::sim::WorldState::new(Pill::Blue, 99).unwrap();
        for _ in 0..600 {
            a = advance_tick(&a);
            b = advance_tick(&b);
        }
        assert_eq!(a.entities, b.entities);
        assert_eq!(a.player, b.player);
        assert_eq!(a.messages, b.messages);
    }

    #[test]
    fn test_boss_kind_uses_its_name() {
        let mut state = sandbox(Pill::Red);
        let pos = state.player.pos;
        let mut boss = crab(&mut state, pos + IVec2::NEG_X);
        boss.kind = EntityKind::Boss;
        boss.damage = 1.0;
        state.entities.push(boss);
        state.tick = 119;
        let next = advance_tick(&state);
        assert_eq!(next.messages.latest(), Some("The boss attacked you!"));
    }

    proptest! {
        #[test]
        fn stats_stay_bounded(
            seed in 0u64..500,
            health in 0.0f32..=100.0,
            hunger in 0.0f32..=100.0,
            thirst in 0.0f32..=100.0,
            stamina in 0.0f32..=100.0,
            ticks in 1usize..300,
        ) {
            let mut state = crate::sim::WorldState::new(Pill::Red, seed).unwrap();
            state.player.real_stats = Stats { health, hunger, thirst, stamina };
            // Speed decay up so short runs exercise it
            let mut tuning = (*state.tuning).clone();
            tuning.decay_interval_ticks = 1;
            state.tuning = std::sync::Arc::new(tuning);

            for _ in 0..ticks {
                state = advance_tick(&state);
                prop_assert!(state.player.real_stats.in_bounds());
                prop_assert!(state.player.display_stats.in_bounds());
                prop_assert!(state.messages.len() <= crate::consts::MESSAGE_LOG_LEN);
            }
        }
    }
}
