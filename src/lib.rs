//! Stonebound - a tile-grid exploration game with an earth-science quiz
//!
//! Wander the surface, wake the crystals in the caves below and carry the
//! statue's pebble to the ritual stones. Progress travels as a short save
//! code that can be copied by hand.

pub mod audio;
pub mod config;
pub mod data;
pub mod entities;
pub mod game;
pub mod save;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use game::{GameController, GameEvent};
pub use world::{MapGrid, Mode, Position, Tile, WorldRegistry};
