//! Cheat codes
//!
//! Literal strings typed into the load box. They are checked before the
//! text is treated as a save code.

use crate::world::{Tile, WorldRegistry};

pub struct Cheat {
    /// Upper-case literal
    pub code: &'static str,
    /// Applies the cheat and returns the message to show
    pub apply: fn(&mut WorldRegistry) -> String,
}

pub const CHEATS: &[Cheat] = &[Cheat { code: "GREEN GEMS!", apply: energize_crystals }];

/// Match input against the registry, ignoring case and surrounding whitespace
pub fn find(input: &str) -> Option<&'static Cheat> {
    let normalized = input.trim().to_uppercase();
    CHEATS.iter().find(|cheat| cheat.code == normalized)
}

/// Turn every inactive and dormant crystal in the caves active
fn energize_crystals(world: &mut WorldRegistry) -> String {
    let mut count = 0;
    for cave in world.caves_mut() {
        for pos in cave.positions_of(Tile::Crystal).into_iter().chain(cave.positions_of(Tile::CrystalDormant)) {
            cave.set(pos, Tile::CrystalActive);
            count += 1;
        }
    }
    format!("CHEAT ACTIVATED: {} CRYSTALS ENERGIZED!", count)
}
