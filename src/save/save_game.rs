//! Save blob
//!
//! The whole mutable game in one record, serialized with short keys so the
//! resulting code stays short:
//!
//! | key  | content                       |
//! |------|-------------------------------|
//! | `w`  | overworld grid                |
//! | `c`  | the 11 cave grids             |
//! | `i`  | interior grid                 |
//! | `p`  | player                        |
//! | `gs` | mode                          |
//! | `d`  | cave depth                    |
//! | `k`  | hidden key cell, `-1` if none |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::codec;
use crate::entities::Player;
use crate::world::{MapGrid, Mode, Position, RegistryError, WorldRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("save code is empty")]
    Empty,
    #[error("'{0}' is not a save code character")]
    UnknownCharacter(char),
    #[error("save code does not decompress")]
    Decompress,
    #[error("save code holds malformed data: {0}")]
    Json(String),
    #[error("save code describes an invalid world: {0}")]
    Structure(#[from] RegistryError),
    #[error("compressed state starts with a zero byte and cannot be encoded")]
    LeadingZero,
}

/// Overworld cell of the hidden key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyLocation {
    pub x: i32,
    pub y: i32,
}

impl KeyLocation {
    pub const NONE: KeyLocation = KeyLocation { x: -1, y: -1 };
}

impl From<Option<Position>> for KeyLocation {
    fn from(pos: Option<Position>) -> Self {
        pos.map_or(KeyLocation::NONE, |p| KeyLocation { x: p.x, y: p.y })
    }
}

impl From<KeyLocation> for Option<Position> {
    fn from(key: KeyLocation) -> Self {
        (key.x >= 0 && key.y >= 0).then(|| Position::new(key.x, key.y))
    }
}

/// Complete save data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub w: MapGrid,
    pub c: Vec<MapGrid>,
    pub i: MapGrid,
    pub p: Player,
    pub gs: Mode,
    pub d: u8,
    pub k: KeyLocation,
}

impl SaveData {
    /// Snapshot the live state
    pub fn capture(world: &WorldRegistry, player: &Player, key_location: Option<Position>) -> Self {
        Self {
            w: world.overworld.clone(),
            c: world.caves().to_vec(),
            i: world.interior.clone(),
            p: player.clone(),
            gs: world.mode(),
            d: world.depth(),
            k: key_location.into(),
        }
    }

    /// Split back into live state, checking the world is well formed
    pub fn into_parts(self) -> Result<(WorldRegistry, Player, Option<Position>), SaveError> {
        let world = WorldRegistry::from_parts(self.w, self.i, self.c, self.gs, self.d)?;
        Ok((world, self.p, self.k.into()))
    }
}

/// Produce the transcribable code for a snapshot
pub fn encode(save: &SaveData) -> Result<String, SaveError> {
    let json = serde_json::to_string(save).map_err(|e| SaveError::Json(e.to_string()))?;
    codec::encode_text(&json)
}

/// Parse a code back into a snapshot; nothing live is touched
pub fn decode(code: &str) -> Result<SaveData, SaveError> {
    let json = codec::decode_text(code)?;
    serde_json::from_str(&json).map_err(|e| SaveError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Facing;
    use crate::save::codec::ALPHABET;
    use crate::world::Tile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(seed: u64) -> (WorldRegistry, Player, Option<Position>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = WorldRegistry::generate(&mut rng).unwrap();
        let key = world.choose_key_location(&mut rng);
        world.enter(Mode::Overworld, 0);
        (world, Player::new(), key)
    }

    #[test]
    fn test_full_session_round_trip() {
        let (mut world, mut player, key) = session(3);
        world.enter(Mode::Cave, 7);
        world.caves_mut()[7].set(Position::new(2, 2), Tile::CrystalDormant);
        world.overworld.set(Position::new(26, 24), Tile::CaveMouth);
        player.dir = Facing::Left;
        player.frame = 3;
        player.inventory.echo_prisms = 4_000_000;
        player.has_pickup_ability = true;
        player.reached_depth10 = true;

        let save = SaveData::capture(&world, &player, key);
        let code = encode(&save).unwrap();
        assert!(code.chars().all(|c| ALPHABET.contains(c)));

        let (world2, player2, key2) = decode(&code).unwrap().into_parts().unwrap();
        assert_eq!(world2, world);
        assert_eq!(player2, player);
        assert_eq!(key2, key);
    }

    #[test]
    fn test_every_mode_and_depth_survive() {
        let (mut world, player, _) = session(8);
        for mode in [Mode::Start, Mode::Overworld, Mode::Interior] {
            world.enter(mode, 0);
            let code = encode(&SaveData::capture(&world, &player, None)).unwrap();
            assert_eq!(decode(&code).unwrap().gs, mode);
        }
        for depth in 0..=10 {
            world.enter(Mode::Cave, depth);
            let code = encode(&SaveData::capture(&world, &player, None)).unwrap();
            let save = decode(&code).unwrap();
            assert_eq!((save.gs, save.d), (Mode::Cave, depth));
            assert_eq!(save.k, KeyLocation::NONE);
        }
    }

    #[test]
    fn test_every_tile_code_survives() {
        let (mut world, player, key) = session(4);
        for (n, tile) in Tile::ALL.iter().enumerate() {
            world.overworld.set(Position::new(n as i32 % 50 + 1, 1 + n as i32 / 50), *tile);
        }
        let code = encode(&SaveData::capture(&world, &player, key)).unwrap();
        assert_eq!(decode(&code).unwrap().w, world.overworld);
    }

    #[test]
    fn test_zero_counts_stay_zero() {
        let (world, mut player, key) = session(5);
        player.inventory.sediment = 0;
        player.inventory.key = 0;
        let code = encode(&SaveData::capture(&world, &player, key)).unwrap();
        let save = decode(&code).unwrap();
        assert_eq!(save.p.inventory.sediment, 0);
        assert_eq!(save.p.inventory.key, 0);
    }

    #[test]
    fn test_json_shape() {
        let (world, player, _) = session(6);
        let save = SaveData::capture(&world, &player, Some(Position::new(22, 8)));
        let value = serde_json::to_value(&save).unwrap();
        for key in ["w", "c", "i", "p", "gs", "d", "k"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["gs"], "overworld");
        assert_eq!(value["k"], serde_json::json!({"x": 22, "y": 8}));
        assert_eq!(value["c"].as_array().unwrap().len(), 11);
        assert!(value["p"].get("screenX").is_some());
    }

    #[test]
    fn test_malformed_codes_rejected() {
        assert!(matches!(decode("hey you"), Err(SaveError::UnknownCharacter(' '))));

        let code = codec::encode_text(r#"{"w":[[0]]}"#).unwrap();
        assert!(matches!(decode(&code), Err(SaveError::Json(_))));

        let (world, player, _) = session(7);
        let mut save = SaveData::capture(&world, &player, None);
        save.c.pop();
        let code = encode(&save).unwrap();
        assert_eq!(
            decode(&code).unwrap().into_parts().unwrap_err(),
            SaveError::Structure(RegistryError::CaveCount(10))
        );
    }
}
