//! Terrain tiles and the island grid

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Terrain kind of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Water,
    Sand,
    Grass,
    Tree,
    Wreckage,
    Rock,
}

impl Tile {
    /// Solid tiles block both the player and creatures
    pub fn is_solid(self) -> bool {
        match self {
            Tile::Water | Tile::Tree | Tile::Rock | Tile::Wreckage => true,
            Tile::Sand | Tile::Grass => false,
        }
    }

    /// Whether creatures and items may be placed here.
    /// Wreckage is accepted even though it is solid.
    pub fn accepts_spawn(self) -> bool {
        match self {
            Tile::Water | Tile::Tree | Tile::Rock => false,
            Tile::Sand | Tile::Grass | Tile::Wreckage => true,
        }
    }
}

/// Fixed-size rectangular tile grid, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl WorldGrid {
    /// A grid with every cell set to `tile`
    pub fn filled(width: u32, height: u32, tile: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Integer center cell (floor of half the dimensions)
    pub fn center(&self) -> IVec2 {
        IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    #[inline]
    fn index(&self, pos: IVec2) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Tile at `pos`, or `None` outside the grid
    pub fn get(&self, pos: IVec2) -> Option<Tile> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Overwrite a cell; positions outside the grid are ignored
    pub fn set(&mut self, pos: IVec2, tile: Tile) {
        if let Some(i) = self.index(pos) {
            self.tiles[i] = tile;
        }
    }

    /// In bounds and not solid
    pub fn is_walkable(&self, pos: IVec2) -> bool {
        self.get(pos).is_some_and(|t| !t.is_solid())
    }

    /// Every cell with its coordinates, row by row
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        let width = self.width.max(1) as usize;
        self.tiles.iter().enumerate().map(move |(i, &tile)| {
            (IVec2::new((i % width) as i32, (i / width) as i32), tile)
        })
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}
