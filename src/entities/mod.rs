//! Player and NPC definitions

pub mod npcs;
pub mod player;

pub use npcs::NpcKind;
pub use player::{Facing, Inventory, ItemKind, Player};
