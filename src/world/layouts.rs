//! Hand-authored maps
//!
//! The overworld, the shop interior and the entrance cave are fixed layouts;
//! every other cave depth comes from the generator. Glyphs are documented on
//! [`Tile::glyph`](super::tile::Tile::glyph).

use super::map::{GridError, MapGrid, Position};
use super::registry::Mode;
use super::tile::Landing;

/// Where a new game starts
pub const SPAWN: Position = Position::new(6, 15);
/// Arrival cell inside the shop
pub const INTERIOR_SPAWN: Position = Position::new(5, 9);
/// Arrival cell in the entrance cave
pub const CAVE_SPAWN: Position = Position::new(4, 6);
/// Return cell when leaving the shop
pub const BUILDING_RETURN: Position = Position::new(27, 15);
/// Return cell when leaving the caves, also the quick escape landing
pub const CAVE_RETURN: Position = Position::new(26, 25);
/// The boulder that hides the cave entrance
pub const CAVE_BOULDER: Position = Position::new(26, 24);
pub const CHEST: Position = Position::new(1, 16);
/// Standing here after the ritual wins the game
pub const FINALE: Position = Position::new(48, 14);

// Shrine depth
pub const SHRINE_UP_STAIRS: Position = Position::new(8, 1);
pub const SHRINE_CRYSTAL: Position = Position::new(1, 1);
pub const SHRINE_STONES: Position = Position::new(1, 6);
pub const TELEPORT_LANDING: Position = Position::new(8, 2);

pub const INTERIOR_LANDING: Landing = Landing { mode: Mode::Interior, depth: 0, cell: INTERIOR_SPAWN };
pub const CAVE_SPAWN_LANDING: Landing = Landing { mode: Mode::Cave, depth: 0, cell: CAVE_SPAWN };
pub const BUILDING_EXIT_LANDING: Landing = Landing { mode: Mode::Overworld, depth: 0, cell: BUILDING_RETURN };
pub const CAVE_EXIT_LANDING: Landing = Landing { mode: Mode::Overworld, depth: 0, cell: CAVE_RETURN };
pub const QUICK_ESCAPE_LANDING: Landing = CAVE_EXIT_LANDING;
pub const INSTANT_TELEPORT_LANDING: Landing = Landing { mode: Mode::Cave, depth: 10, cell: TELEPORT_LANDING };

const OVERWORLD: [&str; 30] = [
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~...................................~..............~",
    "~...................................~..vvvvvvvvv...~",
    "~.......T..........T................~..vvvvVvvvv...~",
    "~...T...............................~..vvvvvvvvv...~",
    "~.........~~~~~...............T.....~..vvvvvvvvv...~",
    "~.........~~~~~..T..................~..vvGvvvvvv...~",
    "~.........~~~~~.....................~..vvvvvvvvv...~",
    "~.........~~~~~.......o.............~..............~",
    "~..T................................~.....u...o....~",
    "~...................................~.I............~",
    "~........o..........................~...u...I......~",
    "~...................A..........o....~..............~",
    "~........................T...T......~..........&&&.~",
    "~...........P...........T..H..T.....~............&.~",
    "~..........................:........~..........&&&.~",
    "~C::::::::::::::::::::::::::::::::::=::::::::::....~",
    "~.........................:.........~..............~",
    "~.........................:......o..~..............~",
    "~..............o........S.:.........~..............~",
    "~...................T.....:.........~...o..........~",
    "~.........................:.........~.......T......~",
    "~....T....................:......T..~..............~",
    "~.................o.......:.........~..............~",
    "~.........................o.........~..............~",
    "~...........T.......................=........T.....~",
    "~.......o.............T.............~..............~",
    "~..............................T....~..............~",
    "~...................................~..............~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
];

const INTERIOR: [&str; 11] = [
    "##########",
    "#__cRc___#",
    "#________#",
    "#________#",
    "#_th__D__#",
    "#________#",
    "#_ht_____#",
    "#________#",
    "#________#",
    "#________#",
    "#####E####",
];

const ENTRANCE_CAVE: [&str; 8] = [
    "WWWWWWWWWW",
    "W,,,,,,,,W",
    "W,B,,,,>,W",
    "W,,,W,,,,W",
    "W,,,,,,,,W",
    "W,,W,,,,,W",
    "W,,,,,,,,W",
    "WWWWXWWWWW",
];

pub fn overworld() -> Result<MapGrid, GridError> {
    MapGrid::from_layout(&OVERWORLD)
}

pub fn interior() -> Result<MapGrid, GridError> {
    MapGrid::from_layout(&INTERIOR)
}

/// Depth 0, the only hand-authored cave
pub fn entrance_cave() -> Result<MapGrid, GridError> {
    MapGrid::from_layout(&ENTRANCE_CAVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::tile::Tile;

    #[test]
    fn test_layouts_parse() {
        let world = overworld().unwrap();
        assert_eq!((world.width(), world.height()), (52, 30));
        assert_eq!((interior().unwrap().width(), interior().unwrap().height()), (10, 11));
        assert_eq!((entrance_cave().unwrap().width(), entrance_cave().unwrap().height()), (10, 8));
    }

    #[test]
    fn test_overworld_landmarks() {
        let world = overworld().unwrap();
        assert_eq!(world.get(SPAWN), Some(Tile::Grass));
        assert_eq!(world.get(CAVE_BOULDER), Some(Tile::Boulder));
        assert_eq!(world.get(CAVE_RETURN), Some(Tile::Grass));
        assert_eq!(world.get(BUILDING_RETURN), Some(Tile::Path));
        assert_eq!(world.get(BUILDING_RETURN.offset(0, -1)), Some(Tile::Building));
        assert_eq!(world.get(CHEST), Some(Tile::ChestClosed));
        assert_eq!(world.get(FINALE), Some(Tile::Grass));
        assert_eq!(world.get(FINALE.offset(-1, 0)), Some(Tile::Grass));
        assert_eq!(world.count(Tile::RitualStones), 7);
        for npc in [Tile::Magnus, Tile::Chip, Tile::MrArnold, Tile::MonsterStatue] {
            assert_eq!(world.count(npc), 1, "{:?}", npc);
        }
        assert!(world.count(Tile::Boulder) > 1);
    }

    #[test]
    fn test_interior_and_cave_landmarks() {
        let shop = interior().unwrap();
        assert_eq!(shop.get(INTERIOR_SPAWN), Some(Tile::InteriorFloor));
        assert_eq!(shop.get(INTERIOR_SPAWN.offset(0, 1)), Some(Tile::InteriorExit));
        assert_eq!(shop.count(Tile::Rocky), 1);
        assert_eq!(shop.count(Tile::Rex), 1);

        let cave = entrance_cave().unwrap();
        assert_eq!(cave.get(CAVE_SPAWN), Some(Tile::CaveFloor));
        assert_eq!(cave.get(CAVE_SPAWN.offset(0, 1)), Some(Tile::CaveExit));
        assert_eq!(cave.count(Tile::StairsDown), 1);
        assert_eq!(cave.count(Tile::IndianaBones), 1);
    }
}
