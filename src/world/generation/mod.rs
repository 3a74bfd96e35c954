//! Procedural map generation
//!
//! Builds the full cave stack for a session. Depth 0 is the hand-authored
//! entrance; depths 1 through 10 come from [`caves::generate_cave`].

pub mod caves;

use rand::rngs::StdRng;
use thiserror::Error;

use super::layouts;
use super::map::{GridError, MapGrid};

pub use caves::generate_cave;

/// Deepest cave level
pub const MAX_DEPTH: u8 = 10;
/// Number of cave grids including the entrance
pub const CAVE_COUNT: usize = MAX_DEPTH as usize + 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("cave depth {0} cannot be generated (expected 1..=10)")]
    DepthOutOfRange(u8),
    #[error("no free floor cell left for the {feature} at depth {depth}")]
    NoFreeCell { depth: u8, feature: &'static str },
    #[error("fixed layout is invalid: {0}")]
    Layout(#[from] GridError),
}

/// Generate every cave depth, eagerly, for a new session
pub fn generate_caves(rng: &mut StdRng) -> Result<Vec<MapGrid>, GenerationError> {
    let mut caves = Vec::with_capacity(CAVE_COUNT);
    caves.push(layouts::entrance_cave()?);
    for depth in 1..=MAX_DEPTH {
        caves.push(generate_cave(rng, depth)?);
    }
    log::debug!("Generated {} cave depths", caves.len());
    Ok(caves)
}
