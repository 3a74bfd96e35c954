//! Tile definitions
//!
//! Tile codes and the behavior table consulted by movement and interaction.
//! The numeric codes are the contract with the renderer and with old save
//! codes, so they never change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::map::Position;
use super::registry::Mode;
use crate::entities::NpcKind;

/// Edge length of one tile in world pixels
pub const TILE_SIZE: f32 = 128.0;

/// A tile code that has no meaning in the tile table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown tile code {0}")]
pub struct UnknownTileCode(pub u8);

/// Every tile that can appear in a map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Tile {
    // Overworld terrain
    Grass = 0,
    Water = 2,
    Tree = 3,
    Path = 4,
    Boulder = 5,
    Bridge = 6,
    Building = 7,

    // Building interior
    InteriorFloor = 8,
    InteriorWall = 9,
    InteriorExit = 10,

    // Caves
    CaveMouth = 11,
    CaveWall = 12,
    CaveFloor = 13,
    CaveExit = 14,

    IndianaBones = 15,
    Table = 16,
    Chair = 17,
    Counter = 18,
    Rocky = 19,

    StairsDown = 20,
    StairsUp = 21,

    // Quiz crystals
    Crystal = 22,
    CrystalActive = 23,
    CrystalDormant = 24,

    Rubble = 25,
    ChestClosed = 26,
    ChestOpen = 27,
    KeyPickup = 28,
    RitualStones = 29,
    DigSite = 30,

    // Volcanic field
    VolcanicGround = 31,
    Volcano = 32,
    Magnus = 33,
    Chip = 34,
    BrokenPillar = 35,
    SmashedPot = 36,
    MonsterStatue = 37,
    MrArnold = 38,
    Rex = 39,
}

impl Tile {
    /// All tiles in code order
    pub const ALL: [Tile; 39] = [
        Tile::Grass,
        Tile::Water,
        Tile::Tree,
        Tile::Path,
        Tile::Boulder,
        Tile::Bridge,
        Tile::Building,
        Tile::InteriorFloor,
        Tile::InteriorWall,
        Tile::InteriorExit,
        Tile::CaveMouth,
        Tile::CaveWall,
        Tile::CaveFloor,
        Tile::CaveExit,
        Tile::IndianaBones,
        Tile::Table,
        Tile::Chair,
        Tile::Counter,
        Tile::Rocky,
        Tile::StairsDown,
        Tile::StairsUp,
        Tile::Crystal,
        Tile::CrystalActive,
        Tile::CrystalDormant,
        Tile::Rubble,
        Tile::ChestClosed,
        Tile::ChestOpen,
        Tile::KeyPickup,
        Tile::RitualStones,
        Tile::DigSite,
        Tile::VolcanicGround,
        Tile::Volcano,
        Tile::Magnus,
        Tile::Chip,
        Tile::BrokenPillar,
        Tile::SmashedPot,
        Tile::MonsterStatue,
        Tile::MrArnold,
        Tile::Rex,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Tile> {
        Tile::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Is this one of the three crystal states?
    pub fn is_crystal(self) -> bool {
        matches!(self, Tile::Crystal | Tile::CrystalActive | Tile::CrystalDormant)
    }

    /// Layout glyph, unique per tile
    pub fn glyph(self) -> char {
        match self {
            Tile::Grass => '.',
            Tile::Water => '~',
            Tile::Tree => 'T',
            Tile::Path => ':',
            Tile::Boulder => 'o',
            Tile::Bridge => '=',
            Tile::Building => 'H',
            Tile::InteriorFloor => '_',
            Tile::InteriorWall => '#',
            Tile::InteriorExit => 'E',
            Tile::CaveMouth => 'M',
            Tile::CaveWall => 'W',
            Tile::CaveFloor => ',',
            Tile::CaveExit => 'X',
            Tile::IndianaBones => 'B',
            Tile::Table => 't',
            Tile::Chair => 'h',
            Tile::Counter => 'c',
            Tile::Rocky => 'R',
            Tile::StairsDown => '>',
            Tile::StairsUp => '<',
            Tile::Crystal => '*',
            Tile::CrystalActive => '+',
            Tile::CrystalDormant => '!',
            Tile::Rubble => '%',
            Tile::ChestClosed => 'C',
            Tile::ChestOpen => 'U',
            Tile::KeyPickup => 'k',
            Tile::RitualStones => '&',
            Tile::DigSite => 'd',
            Tile::VolcanicGround => 'v',
            Tile::Volcano => 'V',
            Tile::Magnus => 'G',
            Tile::Chip => 'P',
            Tile::BrokenPillar => 'I',
            Tile::SmashedPot => 'u',
            Tile::MonsterStatue => 'S',
            Tile::MrArnold => 'A',
            Tile::Rex => 'D',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Tile> {
        Tile::ALL.iter().copied().find(|t| t.glyph() == glyph)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::Grass => "Grass",
            Tile::Water => "Water",
            Tile::Tree => "Tree",
            Tile::Path => "Path",
            Tile::Boulder => "Boulder",
            Tile::Bridge => "Bridge",
            Tile::Building => "Building",
            Tile::InteriorFloor => "Floor",
            Tile::InteriorWall => "Wall",
            Tile::InteriorExit => "Exit",
            Tile::CaveMouth => "Cave Entrance",
            Tile::CaveWall => "Cave Wall",
            Tile::CaveFloor => "Cave Floor",
            Tile::CaveExit => "Cave Exit",
            Tile::IndianaBones => "Indiana Bones",
            Tile::Table => "Table",
            Tile::Chair => "Chair",
            Tile::Counter => "Counter",
            Tile::Rocky => "Rocky",
            Tile::StairsDown => "Stairs Down",
            Tile::StairsUp => "Stairs Up",
            Tile::Crystal => "Crystal",
            Tile::CrystalActive => "Active Crystal",
            Tile::CrystalDormant => "Dormant Crystal",
            Tile::Rubble => "Rubble",
            Tile::ChestClosed => "Chest",
            Tile::ChestOpen => "Open Chest",
            Tile::KeyPickup => "Key",
            Tile::RitualStones => "Ritual Stones",
            Tile::DigSite => "Soft Earth",
            Tile::VolcanicGround => "Volcanic Ground",
            Tile::Volcano => "Volcano",
            Tile::Magnus => "Magnus Obsidia",
            Tile::Chip => "Chip",
            Tile::BrokenPillar => "Broken Pillar",
            Tile::SmashedPot => "Smashed Pot",
            Tile::MonsterStatue => "Monster Statue",
            Tile::MrArnold => "Mr. Arnold",
            Tile::Rex => "Rex",
        }
    }

    /// Look up the behavior descriptor for this tile
    pub fn behavior(self) -> TileBehavior {
        use super::layouts::{BUILDING_EXIT_LANDING, CAVE_EXIT_LANDING, CAVE_SPAWN_LANDING, INTERIOR_LANDING};

        match self {
            Tile::Tree => TileBehavior::footprint(HitRect::new(45.0, 85.0, 80.0, 120.0)),
            Tile::Boulder => TileBehavior::footprint(HitRect::new(30.0, 100.0, 60.0, 105.0))
                .with_interaction(Interaction::Boulder),
            Tile::Building => TileBehavior::footprint(HitRect::lower(60.0)).with_transition(
                Transition::Doorway {
                    zone: HitRect::new(20.0, 108.0, 100.0, TILE_SIZE + 1.0),
                    landing: INTERIOR_LANDING,
                },
            ),
            Tile::CaveMouth => TileBehavior::footprint(HitRect::lower(70.0)).with_transition(
                Transition::Doorway {
                    zone: HitRect::new(30.0, 90.0, 100.0, TILE_SIZE + 1.0),
                    landing: CAVE_SPAWN_LANDING,
                },
            ),
            Tile::InteriorExit => TileBehavior::open().with_transition(Transition::Exit(BUILDING_EXIT_LANDING)),
            Tile::CaveExit => TileBehavior::open().with_transition(Transition::Exit(CAVE_EXIT_LANDING)),
            Tile::StairsDown => TileBehavior::open().with_transition(Transition::StairsDown),
            Tile::StairsUp => TileBehavior::open().with_transition(Transition::StairsUp),

            Tile::Water
            | Tile::InteriorWall
            | Tile::CaveWall
            | Tile::Table
            | Tile::Chair
            | Tile::Counter
            | Tile::ChestOpen
            | Tile::Volcano
            | Tile::BrokenPillar
            | Tile::SmashedPot => TileBehavior::solid(),

            Tile::IndianaBones => TileBehavior::solid().with_interaction(Interaction::Npc(NpcKind::IndianaBones)),
            Tile::Rocky => TileBehavior::solid().with_interaction(Interaction::Npc(NpcKind::Rocky)),
            Tile::Magnus => TileBehavior::solid().with_interaction(Interaction::Npc(NpcKind::Magnus)),
            Tile::Chip => TileBehavior::solid().with_interaction(Interaction::Npc(NpcKind::Chip)),
            Tile::MrArnold => TileBehavior::solid().with_interaction(Interaction::Npc(NpcKind::MrArnold)),
            Tile::Rex => TileBehavior::solid().with_interaction(Interaction::Npc(NpcKind::Rex)),
            Tile::MonsterStatue => TileBehavior::solid().with_interaction(Interaction::Statue),
            Tile::ChestClosed => TileBehavior::solid().with_interaction(Interaction::LockedChest),
            Tile::Crystal => TileBehavior::solid().with_interaction(Interaction::Crystal(CrystalState::Inactive)),
            Tile::CrystalActive => TileBehavior::solid().with_interaction(Interaction::Crystal(CrystalState::Active)),
            Tile::CrystalDormant => TileBehavior::solid().with_interaction(Interaction::Crystal(CrystalState::Dormant)),

            Tile::RitualStones => TileBehavior {
                passability: Passability::RitualStones,
                transition: None,
                interaction: Some(Interaction::RitualStones),
            },
            Tile::DigSite => TileBehavior::open().with_interaction(Interaction::DigSite),
            Tile::KeyPickup => TileBehavior::open().with_interaction(Interaction::KeyPickup),

            Tile::Grass
            | Tile::Path
            | Tile::Bridge
            | Tile::InteriorFloor
            | Tile::CaveFloor
            | Tile::Rubble
            | Tile::VolcanicGround => TileBehavior::open(),
        }
    }

    /// Foreground color for terminal rendering
    pub fn fg_color(self) -> (u8, u8, u8) {
        match self {
            Tile::Grass => (70, 140, 60),
            Tile::Water => (90, 150, 255),
            Tile::Tree => (40, 160, 60),
            Tile::Path => (190, 160, 110),
            Tile::Boulder => (160, 160, 160),
            Tile::Bridge => (150, 100, 50),
            Tile::Building => (220, 180, 120),
            Tile::InteriorFloor => (110, 90, 70),
            Tile::InteriorWall => (170, 140, 110),
            Tile::InteriorExit => (255, 255, 255),
            Tile::CaveMouth => (30, 30, 30),
            Tile::CaveWall => (120, 110, 100),
            Tile::CaveFloor => (70, 65, 60),
            Tile::CaveExit => (255, 255, 255),
            Tile::StairsDown | Tile::StairsUp => (220, 220, 220),
            Tile::Crystal => (120, 200, 255),
            Tile::CrystalActive => (80, 255, 120),
            Tile::CrystalDormant => (255, 70, 70),
            Tile::Rubble => (140, 130, 120),
            Tile::ChestClosed | Tile::ChestOpen => (200, 150, 60),
            Tile::KeyPickup => (255, 215, 0),
            Tile::RitualStones => (180, 180, 200),
            Tile::DigSite => (110, 80, 50),
            Tile::VolcanicGround => (90, 50, 40),
            Tile::Volcano => (255, 100, 0),
            Tile::Table | Tile::Chair | Tile::Counter => (160, 110, 60),
            Tile::BrokenPillar | Tile::SmashedPot => (170, 160, 150),
            Tile::MonsterStatue => (200, 100, 255),
            Tile::IndianaBones | Tile::Rocky | Tile::Magnus | Tile::Chip | Tile::MrArnold | Tile::Rex => {
                (255, 230, 120)
            }
        }
    }

    /// Background color; some codes sit on grass outside and cave floor underground
    pub fn bg_color(self, mode: Mode) -> (u8, u8, u8) {
        const GRASS: (u8, u8, u8) = (20, 50, 20);
        const CAVE: (u8, u8, u8) = (25, 22, 20);
        const INDOOR: (u8, u8, u8) = (40, 30, 22);

        match self {
            Tile::Water => (10, 30, 80),
            Tile::Path => (60, 50, 30),
            Tile::VolcanicGround | Tile::Volcano | Tile::Magnus => (45, 20, 15),
            Tile::InteriorFloor
            | Tile::InteriorWall
            | Tile::InteriorExit
            | Tile::Table
            | Tile::Chair
            | Tile::Counter
            | Tile::Rocky
            | Tile::Rex => INDOOR,
            Tile::CaveWall | Tile::CaveExit => CAVE,
            Tile::CaveFloor
            | Tile::IndianaBones
            | Tile::StairsDown
            | Tile::StairsUp
            | Tile::Crystal
            | Tile::CrystalActive
            | Tile::CrystalDormant
            | Tile::Rubble
            | Tile::KeyPickup
            | Tile::RitualStones
            | Tile::DigSite => {
                if mode == Mode::Cave {
                    CAVE
                } else {
                    GRASS
                }
            }
            _ => GRASS,
        }
    }
}

impl TryFrom<u8> for Tile {
    type Error = UnknownTileCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Tile::from_code(code).ok_or(UnknownTileCode(code))
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.code()
    }
}

/// Rectangle in a tile's local pixel space; bounds are exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl HitRect {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Full-width band below `min_y`
    pub const fn lower(min_y: f32) -> Self {
        Self::new(-1.0, TILE_SIZE + 1.0, min_y, TILE_SIZE + 1.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.min_x && x < self.max_x && y > self.min_y && y < self.max_y
    }
}

/// Whether the foot point may enter a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Passability {
    Open,
    Solid,
    /// Only the given sub-rectangle blocks
    Footprint(HitRect),
    /// Solid underground, and on the surface once the ritual is done
    RitualStones,
}

/// Where a transition puts the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub mode: Mode,
    pub depth: u8,
    pub cell: Position,
}

/// Map change triggered by stepping onto a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Fires only while facing up with the foot inside `zone`
    Doorway { zone: HitRect, landing: Landing },
    Exit(Landing),
    StairsDown,
    StairsUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrystalState {
    /// Waiting for its question to be answered
    Inactive,
    Active,
    Dormant,
}

/// What the interact action does with a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    DigSite,
    Crystal(CrystalState),
    Statue,
    Npc(NpcKind),
    KeyPickup,
    LockedChest,
    Boulder,
    RitualStones,
}

/// Behavior descriptor for one tile code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBehavior {
    pub passability: Passability,
    pub transition: Option<Transition>,
    pub interaction: Option<Interaction>,
}

impl TileBehavior {
    const fn open() -> Self {
        Self { passability: Passability::Open, transition: None, interaction: None }
    }

    const fn solid() -> Self {
        Self { passability: Passability::Solid, transition: None, interaction: None }
    }

    const fn footprint(rect: HitRect) -> Self {
        Self { passability: Passability::Footprint(rect), transition: None, interaction: None }
    }

    const fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    const fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = Some(interaction);
        self
    }
}
