//! Save codes
//!
//! The only persistence is a text code the player copies by hand.

pub mod cheats;
pub mod codec;
pub mod save_game;

pub use cheats::Cheat;
pub use save_game::{decode, encode, KeyLocation, SaveData, SaveError};
