//! World state and core simulation types
//!
//! A `WorldState` is a complete, self-contained snapshot: the island, the
//! player, every creature and item, and the seeded RNG that the next
//! transition will draw from. Transitions never mutate a snapshot in place.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::grid::WorldGrid;
use super::mapgen::generate_map;
use super::perception::is_visible;
use super::spawn::{find_player_start, find_valid_spawn};
use crate::consts::*;
use crate::tuning::{CreatureTuning, Tuning};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Playing,
    /// Player died; terminal
    GameOver,
    /// Reserved for a rescue ending
    Victory,
}

/// Perception mode chosen on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pill {
    /// Truthful: the HUD shows the real stats
    Red,
    /// Deceptive: the HUD reassures until it is too late
    Blue,
}

impl Pill {
    pub fn is_truthful(self) -> bool {
        self == Pill::Red
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "truth" => Some(Pill::Red),
            "blue" | "lie" => Some(Pill::Blue),
            _ => None,
        }
    }
}

/// Player condition, each field in `[0, STAT_MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub health: f32,
    pub hunger: f32,
    pub thirst: f32,
    pub stamina: f32,
}

impl Stats {
    pub const FULL: Stats = Stats {
        health: STAT_MAX,
        hunger: STAT_MAX,
        thirst: STAT_MAX,
        stamina: STAT_MAX,
    };

    /// Every field clamped to `[0, STAT_MAX]`
    pub fn clamped(self) -> Self {
        Self {
            health: self.health.clamp(0.0, STAT_MAX),
            hunger: self.hunger.clamp(0.0, STAT_MAX),
            thirst: self.thirst.clamp(0.0, STAT_MAX),
            stamina: self.stamina.clamp(0.0, STAT_MAX),
        }
    }

    pub fn in_bounds(&self) -> bool {
        [self.health, self.hunger, self.thirst, self.stamina]
            .iter()
            .all(|v| (0.0..=STAT_MAX).contains(v))
    }
}

/// Sprite facing; presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The castaway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    /// Ground truth; drives damage and death
    pub real_stats: Stats,
    /// What the HUD shows; recomputed from `real_stats` every tick
    pub display_stats: Stats,
    /// Carried items in pickup order
    pub inventory: Vec<ItemKind>,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Crab,
    Boar,
    Boss,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Crab => "crab",
            EntityKind::Boar => "boar",
            EntityKind::Boss => "boss",
        }
    }
}

/// A creature roaming the island
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: IVec2,
    pub hp: f32,
    pub max_hp: f32,
    pub damage: f32,
    pub hostile: bool,
    /// Whether the Blue Pill lets the player see this creature
    pub visible_in_blue: bool,
    /// Tick of the last action; may sit in the future after an attack
    pub last_move_tick: u64,
    pub move_cooldown_ticks: u64,
}

impl Entity {
    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Coconut,
    Meat,
    Medkit,
    Wood,
    Spear,
    FakeWater,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ItemKind::Coconut => "COCONUT",
            ItemKind::Meat => "MEAT",
            ItemKind::Medkit => "MEDKIT",
            ItemKind::Wood => "WOOD",
            ItemKind::Spear => "SPEAR",
            ItemKind::FakeWater => "FAKE_WATER",
        };
        f.write_str(tag)
    }
}

/// An item lying on the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub pos: IVec2,
    /// Picked up for nothing under the Blue Pill
    pub illusory: bool,
}

/// Bounded log of the most recent messages, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageLog {
    lines: VecDeque<String>,
    /// Messages ever pushed, including evicted ones
    total: u64,
}

impl MessageLog {
    pub fn push(&mut self, message: impl Into<String>) {
        self.lines.push_back(message.into());
        while self.lines.len() > MESSAGE_LOG_LEN {
            self.lines.pop_front();
        }
        self.total += 1;
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_pushed(&self) -> u64 {
        self.total
    }
}

/// Complete world snapshot (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generator the next transition draws from
    pub(crate) rng: Pcg32,
    /// Balance table, shared by every snapshot of a run
    pub tuning: Arc<Tuning>,
    pub mode: GameMode,
    pub pill: Pill,
    /// Terrain, shared read-only by every snapshot of a run
    pub grid: Arc<WorldGrid>,
    pub tick: u64,
    pub player: Player,
    /// Creatures (kept in spawn order)
    pub entities: Vec<Entity>,
    pub items: Vec<Item>,
    pub messages: MessageLog,
    pub day: u32,
    /// Cyclic clock in `[0, DAY_CYCLE)`
    pub time_of_day: u32,
    next_id: u32,
}

impl WorldState {
    /// Create a fresh run with default tuning
    pub fn new(pill: Pill, seed: u64) -> Result<Self> {
        Self::with_tuning(pill, seed, Arc::new(Tuning::default()))
    }

    /// Create a fresh run: island, castaway, creatures and coconuts
    pub fn with_tuning(pill: Pill, seed: u64, tuning: Arc<Tuning>) -> Result<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = generate_map(tuning.map_width, tuning.map_height, &mut rng)?;
        let start = find_player_start(&grid, &mut rng)?;

        let start_health = match pill {
            Pill::Red => tuning.red_pill_start_health,
            Pill::Blue => tuning.blue_pill_start_health,
        };

        let mut messages = MessageLog::default();
        messages.push("Welcome to the island.");
        messages.push(match pill {
            Pill::Red => "Survive.",
            Pill::Blue => "It's a beautiful day!",
        });

        let mut state = Self {
            seed,
            rng,
            tuning: Arc::clone(&tuning),
            mode: GameMode::Playing,
            pill,
            grid: Arc::new(grid),
            tick: 0,
            player: Player {
                pos: start,
                real_stats: Stats {
                    health: start_health,
                    hunger: 80.0,
                    thirst: 80.0,
                    stamina: 100.0,
                }
                .clamped(),
                // Optimistic until the first tick corrects it
                display_stats: Stats::FULL,
                inventory: Vec::new(),
                facing: Facing::Right,
            },
            entities: Vec::new(),
            items: Vec::new(),
            messages,
            day: 1,
            time_of_day: START_TIME_OF_DAY,
            next_id: 1,
        };

        for _ in 0..tuning.crab.count {
            state.spawn_creature(EntityKind::Crab, &tuning.crab)?;
        }
        for _ in 0..tuning.boar.count {
            state.spawn_creature(EntityKind::Boar, &tuning.boar)?;
        }
        for _ in 0..tuning.coconut_count {
            let pos = find_valid_spawn(&state.grid, &mut state.rng)?;
            state.spawn_item(ItemKind::Coconut, pos, false);
        }

        log::info!(
            "New {:?} pill run (seed {}): {} creatures, {} items, player at {}",
            pill,
            seed,
            state.entities.len(),
            state.items.len(),
            start
        );

        Ok(state)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    /// Allocate a new entity/item ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_creature(&mut self, kind: EntityKind, creature: &CreatureTuning) -> Result<()> {
        let pos = find_valid_spawn(&self.grid, &mut self.rng)?;
        let chance = creature.blue_visibility_chance.clamp(0.0, 1.0);
        let visible_in_blue = chance >= 1.0 || self.rng.random_bool(chance);
        let id = self.next_entity_id();
        self.entities.push(Entity {
            id,
            kind,
            pos,
            hp: creature.hp,
            max_hp: creature.hp,
            damage: creature.damage,
            hostile: true,
            visible_in_blue,
            last_move_tick: 0,
            move_cooldown_ticks: creature.move_cooldown_ticks,
        });
        Ok(())
    }

    /// Drop an item on the ground, returning its ID
    pub fn spawn_item(&mut self, kind: ItemKind, pos: IVec2, illusory: bool) -> u32 {
        let id = self.next_entity_id();
        self.items.push(Item {
            id,
            kind,
            pos,
            illusory,
        });
        id
    }

    /// Creatures the player can see under the active pill
    pub fn visible_entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities
            .iter()
            .filter(move |e| is_visible(e, self.pill))
    }

    pub fn item_at(&self, pos: IVec2) -> Option<&Item> {
        self.items.iter().find(|i| i.pos == pos)
    }
}
