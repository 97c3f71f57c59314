//! Spawn placement for creatures, items and the player

use glam::IVec2;
use rand::Rng;

use super::error::{Result, SimError};
use super::grid::{Tile, WorldGrid};
use crate::consts::MAX_SPAWN_ATTEMPTS;

/// Uniformly sample cells until one accepts a spawn (sand, grass or wreckage)
pub fn find_valid_spawn<R: Rng + ?Sized>(grid: &WorldGrid, rng: &mut R) -> Result<IVec2> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(SimError::NoValidSpawn { attempts: 0 });
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = IVec2::new(
            rng.random_range(0..grid.width()) as i32,
            rng.random_range(0..grid.height()) as i32,
        );
        if grid.get(pos).is_some_and(Tile::accepts_spawn) {
            return Ok(pos);
        }
    }

    Err(SimError::NoValidSpawn {
        attempts: MAX_SPAWN_ATTEMPTS,
    })
}

/// Search outward from the center with a radius that widens by one cell per
/// attempt until a walkable cell turns up
pub fn find_player_start<R: Rng + ?Sized>(grid: &WorldGrid, rng: &mut R) -> Result<IVec2> {
    let center = grid.center();
    let mut pos = center;

    for radius in 0..MAX_SPAWN_ATTEMPTS {
        if grid.is_walkable(pos) {
            return Ok(pos);
        }
        let spread = (radius + 1) as f32;
        let offset = IVec2::new(
            ((rng.random::<f32>() - 0.5) * spread).floor() as i32,
            ((rng.random::<f32>() - 0.5) * spread).floor() as i32,
        );
        pos = center + offset;
    }

    Err(SimError::NoValidSpawn {
        attempts: MAX_SPAWN_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_only_on_accepting_tiles() {
        let mut grid = WorldGrid::filled(10, 10, Tile::Water);
        grid.set(IVec2::new(3, 4), Tile::Grass);
        grid.set(IVec2::new(7, 1), Tile::Rock);

        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(find_valid_spawn(&grid, &mut rng), Ok(IVec2::new(3, 4)));
        }
    }

    #[test]
    fn test_wreckage_is_a_valid_spawn() {
        let mut grid = WorldGrid::filled(4, 4, Tile::Tree);
        grid.set(IVec2::new(0, 3), Tile::Wreckage);
        let mut rng = Pcg32::seed_from_u64(9);
        assert_eq!(find_valid_spawn(&grid, &mut rng), Ok(IVec2::new(0, 3)));
    }

    #[test]
    fn test_dense_map_fails_instead_of_looping() {
        let grid = WorldGrid::filled(8, 8, Tile::Rock);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            find_valid_spawn(&grid, &mut rng),
            Err(SimError::NoValidSpawn {
                attempts: MAX_SPAWN_ATTEMPTS
            })
        );
        assert!(find_player_start(&grid, &mut rng).is_err());
    }

    #[test]
    fn test_player_start_prefers_center() {
        let grid = WorldGrid::filled(9, 9, Tile::Sand);
        let mut rng = Pcg32::seed_from_u64(2);
        assert_eq!(find_player_start(&grid, &mut rng), Ok(IVec2::new(4, 4)));
    }

    #[test]
    fn test_player_start_walks_out_of_the_forest() {
        let mut grid = WorldGrid::filled(21, 21, Tile::Grass);
        for y in 7..=13 {
            for x in 7..=13 {
                grid.set(IVec2::new(x, y), Tile::Tree);
            }
        }
        let mut rng = Pcg32::seed_from_u64(3);
        let pos = find_player_start(&grid, &mut rng).unwrap();
        assert!(grid.is_walkable(pos));
    }
}
