//! Cave generator
//!
//! Small walled chambers with a scatter of rock pillars, a pair of stairs and
//! one quiz crystal. The deepest level is the shrine and uses fixed positions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{GenerationError, MAX_DEPTH};
use crate::world::layouts::{SHRINE_CRYSTAL, SHRINE_STONES, SHRINE_UP_STAIRS};
use crate::world::{MapGrid, Position, Tile};

pub const CAVE_WIDTH: usize = 10;
pub const CAVE_HEIGHT: usize = 8;

/// Rock pillars attempted per level
const SCATTER_ATTEMPTS: usize = 6;

/// Depths that hide a fossil dig site
const DIG_SITE_DEPTHS: [u8; 4] = [2, 5, 6, 9];

const SHRINE_RESERVED: [Position; 3] = [SHRINE_UP_STAIRS, SHRINE_CRYSTAL, SHRINE_STONES];

/// Generate one cave level for `depth` in 1..=10
pub fn generate_cave(rng: &mut StdRng, depth: u8) -> Result<MapGrid, GenerationError> {
    if !(1..=MAX_DEPTH).contains(&depth) {
        return Err(GenerationError::DepthOutOfRange(depth));
    }

    let mut grid = MapGrid::filled(CAVE_WIDTH, CAVE_HEIGHT, Tile::CaveWall);
    for y in 1..CAVE_HEIGHT as i32 - 1 {
        for x in 1..CAVE_WIDTH as i32 - 1 {
            grid.set(Position::new(x, y), Tile::CaveFloor);
        }
    }

    scatter_pillars(rng, &mut grid, depth);

    if depth == MAX_DEPTH {
        grid.set(SHRINE_UP_STAIRS, Tile::StairsUp);
        grid.set(SHRINE_CRYSTAL, Tile::Crystal);
        grid.set(SHRINE_STONES, Tile::RitualStones);
        return Ok(grid);
    }

    let up = place_on_free(rng, &mut grid, depth, Tile::StairsUp, "up stairs", |_| true)?;
    place_on_free(rng, &mut grid, depth, Tile::StairsDown, "down stairs", |_| true)?;
    place_on_free(rng, &mut grid, depth, Tile::Crystal, "crystal", |pos| pos.distance(&up) > 1)?;

    if DIG_SITE_DEPTHS.contains(&depth) {
        place_on_free(rng, &mut grid, depth, Tile::DigSite, "dig site", |_| true)?;
    }

    Ok(grid)
}

fn scatter_pillars(rng: &mut StdRng, grid: &mut MapGrid, depth: u8) {
    for _ in 0..SCATTER_ATTEMPTS {
        let pos = Position::new(
            rng.gen_range(1..CAVE_WIDTH as i32 - 1),
            rng.gen_range(1..CAVE_HEIGHT as i32 - 1),
        );
        // The shrine keeps its fixed cells clear; the attempt is simply spent
        if depth == MAX_DEPTH && SHRINE_RESERVED.contains(&pos) {
            continue;
        }
        grid.set(pos, Tile::CaveWall);
    }
}

/// Put `tile` on a uniformly chosen floor cell that passes `accept`
fn place_on_free(
    rng: &mut StdRng,
    grid: &mut MapGrid,
    depth: u8,
    tile: Tile,
    feature: &'static str,
    accept: impl Fn(Position) -> bool,
) -> Result<Position, GenerationError> {
    let candidates: Vec<Position> = grid
        .positions_of(Tile::CaveFloor)
        .into_iter()
        .filter(|pos| accept(*pos))
        .collect();

    let pos = *candidates
        .choose(rng)
        .ok_or(GenerationError::NoFreeCell { depth, feature })?;
    grid.set(pos, tile);
    Ok(pos)
}
