//! World module
//!
//! Tiles, map grids, the fixed layouts, the world registry and cave generation.

pub mod generation;
pub mod layouts;
pub mod map;
pub mod registry;
pub mod tile;

pub use generation::{GenerationError, MAX_DEPTH};
pub use map::{GridError, MapGrid, Position};
pub use registry::{Mode, RegistryError, WorldRegistry};
pub use tile::{Tile, TileBehavior, TILE_SIZE};
