//! World registry
//!
//! Owns every map area and tracks which one is active.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::generation::{self, GenerationError, CAVE_COUNT, MAX_DEPTH};
use super::layouts::{self, CAVE_BOULDER};
use super::map::{MapGrid, Position};
use super::tile::Tile;

/// Which map context is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Title screen, no grid is active
    #[default]
    Start,
    Overworld,
    Interior,
    Cave,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Start => "Start",
            Mode::Overworld => "Overworld",
            Mode::Interior => "Interior",
            Mode::Cave => "Cave",
        }
    }
}

/// All map areas plus the active mode and cave depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldRegistry {
    pub overworld: MapGrid,
    pub interior: MapGrid,
    caves: Vec<MapGrid>,
    mode: Mode,
    depth: u8,
}

/// Why a set of grids cannot form a world
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("expected 11 cave grids, found {0}")]
    CaveCount(usize),
    #[error("depth {0} is deeper than the shrine level")]
    Depth(u8),
}

impl WorldRegistry {
    /// Fresh overworld and interior plus a newly generated cave stack
    pub fn generate(rng: &mut StdRng) -> Result<Self, GenerationError> {
        Ok(Self {
            overworld: layouts::overworld()?,
            interior: layouts::interior()?,
            caves: generation::generate_caves(rng)?,
            mode: Mode::Start,
            depth: 0,
        })
    }

    /// Assemble a registry from decoded parts
    pub fn from_parts(
        overworld: MapGrid,
        interior: MapGrid,
        caves: Vec<MapGrid>,
        mode: Mode,
        depth: u8,
    ) -> Result<Self, RegistryError> {
        if caves.len() != CAVE_COUNT {
            return Err(RegistryError::CaveCount(caves.len()));
        }
        if depth > MAX_DEPTH {
            return Err(RegistryError::Depth(depth));
        }
        Ok(Self { overworld, interior, caves, mode, depth })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Active cave depth; only meaningful in cave mode
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Switch the active area; depth is clamped to the deepest level
    pub fn enter(&mut self, mode: Mode, depth: u8) {
        self.mode = mode;
        self.depth = depth.min(MAX_DEPTH);
    }

    pub fn caves(&self) -> &[MapGrid] {
        &self.caves
    }

    pub fn caves_mut(&mut self) -> &mut [MapGrid] {
        &mut self.caves
    }

    pub fn cave(&self, depth: u8) -> Option<&MapGrid> {
        self.caves.get(depth as usize)
    }

    /// The grid for the current mode, `None` on the start screen
    pub fn active(&self) -> Option<&MapGrid> {
        match self.mode {
            Mode::Start => None,
            Mode::Overworld => Some(&self.overworld),
            Mode::Interior => Some(&self.interior),
            Mode::Cave => self.caves.get(self.depth as usize),
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut MapGrid> {
        match self.mode {
            Mode::Start => None,
            Mode::Overworld => Some(&mut self.overworld),
            Mode::Interior => Some(&mut self.interior),
            Mode::Cave => self.caves.get_mut(self.depth as usize),
        }
    }

    /// Tile in the active grid
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.active().and_then(|grid| grid.get(pos))
    }

    /// Active crystals across every cave
    pub fn active_crystal_count(&self) -> usize {
        self.caves.iter().map(|cave| cave.count(Tile::CrystalActive)).sum()
    }

    /// Crystals in any state across every cave
    pub fn crystal_count(&self) -> usize {
        self.caves
            .iter()
            .flat_map(|cave| cave.cells())
            .filter(|(_, tile)| tile.is_crystal())
            .count()
    }

    /// Pick the boulder that hides the chest key
    pub fn choose_key_location(&self, rng: &mut StdRng) -> Option<Position> {
        let boulders: Vec<Position> = self
            .overworld
            .positions_of(Tile::Boulder)
            .into_iter()
            .filter(|pos| *pos != CAVE_BOULDER)
            .collect();
        boulders.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn world() -> WorldRegistry {
        WorldRegistry::generate(&mut StdRng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn test_active_grid_follows_mode() {
        let mut world = world();
        assert!(world.active().is_none());
        world.enter(Mode::Interior, 0);
        assert_eq!(world.active(), Some(&world.interior));
        world.enter(Mode::Cave, 4);
        assert_eq!(world.active(), world.cave(4));
        world.enter(Mode::Cave, 42);
        assert_eq!(world.depth(), MAX_DEPTH);
    }

    #[test]
    fn test_crystal_counts() {
        let mut world = world();
        assert_eq!(world.crystal_count(), 10);
        assert_eq!(world.active_crystal_count(), 0);
        world.caves_mut()[3].set(Position::new(0, 0), Tile::CrystalActive);
        assert_eq!(world.active_crystal_count(), 1);
        assert_eq!(world.crystal_count(), 11);
    }

    #[test]
    fn test_key_location_avoids_cave_boulder() {
        let world = world();
        for seed in 0..100 {
            let key = world.choose_key_location(&mut StdRng::seed_from_u64(seed)).unwrap();
            assert_ne!(key, CAVE_BOULDER);
            assert_eq!(world.overworld.get(key), Some(Tile::Boulder));
        }
    }

    #[test]
    fn test_key_location_without_boulders() {
        let mut world = world();
        for pos in world.overworld.positions_of(Tile::Boulder) {
            if pos != CAVE_BOULDER {
                world.overworld.set(pos, Tile::Rubble);
            }
        }
        assert_eq!(world.choose_key_location(&mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn test_from_parts_validates() {
        let world = world();
        let err = WorldRegistry::from_parts(
            world.overworld.clone(),
            world.interior.clone(),
            world.caves()[..5].to_vec(),
            Mode::Cave,
            2,
        );
        assert_eq!(err, Err(RegistryError::CaveCount(5)));
        let err = WorldRegistry::from_parts(
            world.overworld.clone(),
            world.interior.clone(),
            world.caves().to_vec(),
            Mode::Cave,
            11,
        );
        assert_eq!(err, Err(RegistryError::Depth(11)));
    }
}
