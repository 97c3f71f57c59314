//! Radial-noise island generation
//!
//! The island is a set of concentric bands around the grid center: a wooded
//! core, a grass ring, a beach, then open water. Each cell's band edges are
//! pushed outward by its own random jitter so the coastline is ragged.

use glam::{IVec2, Vec2};
use rand::Rng;

use super::error::{Result, SimError};
use super::grid::{Tile, WorldGrid};

/// Maximum per-cell outward jitter of every band edge
pub const BAND_JITTER: f32 = 5.0;
/// Wooded core radius (trees and rocks)
pub const CORE_RADIUS: f32 = 8.0;
/// Outer edge of the grass ring
pub const GRASS_RADIUS: f32 = 15.0;
/// Outer edge of the beach
pub const SAND_RADIUS: f32 = 20.0;
/// Chance a core cell is rock instead of a tree
pub const ROCK_CHANCE: f64 = 0.2;
/// Rows south of center where the wreck washed up
pub const WRECKAGE_OFFSET: u32 = 12;

/// Generate an island of the given size
pub fn generate_map<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Result<WorldGrid> {
    if width == 0 || height == 0 {
        return Err(SimError::EmptyMap { width, height });
    }

    let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
    let mut grid = WorldGrid::filled(width, height, Tile::Water);

    for y in 0..height {
        for x in 0..width {
            let dist = (Vec2::new(x as f32, y as f32) - center).length();
            let jitter = rng.random::<f32>() * BAND_JITTER;

            let tile = if dist < CORE_RADIUS + jitter {
                if rng.random_bool(ROCK_CHANCE) {
                    Tile::Rock
                } else {
                    Tile::Tree
                }
            } else if dist < GRASS_RADIUS + jitter {
                Tile::Grass
            } else if dist < SAND_RADIUS + jitter {
                Tile::Sand
            } else {
                Tile::Water
            };
            grid.set(IVec2::new(x as i32, y as i32), tile);
        }
    }

    grid.set(wreckage_position(width, height), Tile::Wreckage);
    Ok(grid)
}

/// Cell of the wreck landmark. On maps too short for the usual offset the
/// wreck lands on the bottom row.
pub fn wreckage_position(width: u32, height: u32) -> IVec2 {
    let row = (height / 2 + WRECKAGE_OFFSET).min(height.saturating_sub(1));
    IVec2::new((width / 2) as i32, row as i32)
}
