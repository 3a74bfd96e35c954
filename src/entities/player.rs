//! The player record
//!
//! Position is kept in world pixels so movement can be sub-tile; the cell
//! under the player's feet drives every collision and interaction check.

use serde::{Deserialize, Serialize};

use crate::world::layouts::SPAWN;
use crate::world::{Position, TILE_SIZE};

/// Pixels moved per tick
pub const PLAYER_SPEED: i32 = 5;
/// Ticks between walk animation frames
pub const ANIM_TICKS: u32 = 8;
pub const ANIM_FRAMES: u8 = 4;

/// Foot anchor, relative to the sprite's top-left corner
pub const FOOT_OFFSET_X: f32 = TILE_SIZE / 2.0;
pub const FOOT_OFFSET_Y: f32 = TILE_SIZE * 0.95;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Everything the player can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    EchoPrism,
    QuickEscape,
    InstantTeleport,
    Hammer,
    Shovel,
    Key,
    Sediment,
    Fossil,
    IndexFossil,
    ExplorerHat,
    MetamorphicPebble,
    ArcaneEye,
}

impl ItemKind {
    /// Menu order
    pub const ALL: [ItemKind; 12] = [
        ItemKind::EchoPrism,
        ItemKind::QuickEscape,
        ItemKind::InstantTeleport,
        ItemKind::Hammer,
        ItemKind::Shovel,
        ItemKind::Key,
        ItemKind::Sediment,
        ItemKind::Fossil,
        ItemKind::IndexFossil,
        ItemKind::ExplorerHat,
        ItemKind::MetamorphicPebble,
        ItemKind::ArcaneEye,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::EchoPrism => "Echo Prism",
            ItemKind::QuickEscape => "Quick Escape",
            ItemKind::InstantTeleport => "Instant Teleport",
            ItemKind::Hammer => "Hammer",
            ItemKind::Shovel => "Shovel",
            ItemKind::Key => "Key",
            ItemKind::Sediment => "Sediment",
            ItemKind::Fossil => "Fossils",
            ItemKind::IndexFossil => "Index Fossil",
            ItemKind::ExplorerHat => "Explorer Hat",
            ItemKind::MetamorphicPebble => "Metamorphic Pebble",
            ItemKind::ArcaneEye => "Arcane Eye",
        }
    }

    /// Items that stack show their count in the inventory list
    pub fn shows_count(&self) -> bool {
        matches!(
            self,
            ItemKind::EchoPrism
                | ItemKind::QuickEscape
                | ItemKind::InstantTeleport
                | ItemKind::Hammer
                | ItemKind::Shovel
                | ItemKind::Key
                | ItemKind::Sediment
                | ItemKind::Fossil
        )
    }
}

/// Item counts; unsigned so a count can never go below zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub echo_prisms: u32,
    pub quick_escapes: u32,
    pub hammer: u32,
    pub key: u32,
    pub sediment: u32,
    pub shovel: u32,
    pub fossils: u32,
    pub index_fossil: u32,
    pub explorer_hat: u32,
    pub metamorphic_pebble: u32,
    pub arcane_eye: u32,
    pub instant_teleport: u32,
}

impl Inventory {
    pub fn count(&self, item: ItemKind) -> u32 {
        match item {
            ItemKind::EchoPrism => self.echo_prisms,
            ItemKind::QuickEscape => self.quick_escapes,
            ItemKind::InstantTeleport => self.instant_teleport,
            ItemKind::Hammer => self.hammer,
            ItemKind::Shovel => self.shovel,
            ItemKind::Key => self.key,
            ItemKind::Sediment => self.sediment,
            ItemKind::Fossil => self.fossils,
            ItemKind::IndexFossil => self.index_fossil,
            ItemKind::ExplorerHat => self.explorer_hat,
            ItemKind::MetamorphicPebble => self.metamorphic_pebble,
            ItemKind::ArcaneEye => self.arcane_eye,
        }
    }

    fn slot_mut(&mut self, item: ItemKind) -> &mut u32 {
        match item {
            ItemKind::EchoPrism => &mut self.echo_prisms,
            ItemKind::QuickEscape => &mut self.quick_escapes,
            ItemKind::InstantTeleport => &mut self.instant_teleport,
            ItemKind::Hammer => &mut self.hammer,
            ItemKind::Shovel => &mut self.shovel,
            ItemKind::Key => &mut self.key,
            ItemKind::Sediment => &mut self.sediment,
            ItemKind::Fossil => &mut self.fossils,
            ItemKind::IndexFossil => &mut self.index_fossil,
            ItemKind::ExplorerHat => &mut self.explorer_hat,
            ItemKind::MetamorphicPebble => &mut self.metamorphic_pebble,
            ItemKind::ArcaneEye => &mut self.arcane_eye,
        }
    }

    pub fn has(&self, item: ItemKind) -> bool {
        self.count(item) > 0
    }

    pub fn add(&mut self, item: ItemKind, amount: u32) {
        let slot = self.slot_mut(item);
        *slot = slot.saturating_add(amount);
    }

    pub fn set(&mut self, item: ItemKind, amount: u32) {
        *self.slot_mut(item) = amount;
    }

    /// Remove `amount` if that many are held; returns whether it happened
    pub fn spend(&mut self, item: ItemKind, amount: u32) -> bool {
        let slot = self.slot_mut(item);
        if *slot >= amount {
            *slot -= amount;
            true
        } else {
            false
        }
    }

    /// Items with a non-zero count, in menu order
    pub fn held(&self) -> Vec<(ItemKind, u32)> {
        ItemKind::ALL
            .iter()
            .map(|item| (*item, self.count(*item)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

/// The player; field names follow the save code layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub screen_x: i32,
    pub screen_y: i32,
    pub dir: Facing,
    pub frame: u8,
    pub is_moving: bool,
    pub speed: i32,
    pub anim_timer: u32,
    pub inventory: Inventory,
    pub has_pickup_ability: bool,
    pub found_dig_site: bool,
    pub has_activated_stonehenge: bool,
    pub wearing_hat: bool,
    pub reached_depth10: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A fresh player standing on the spawn cell
    pub fn new() -> Self {
        let mut player = Self {
            screen_x: 0,
            screen_y: 0,
            dir: Facing::Down,
            frame: 0,
            is_moving: false,
            speed: PLAYER_SPEED,
            anim_timer: 0,
            inventory: Inventory::default(),
            has_pickup_ability: false,
            found_dig_site: false,
            has_activated_stonehenge: false,
            wearing_hat: false,
            reached_depth10: false,
        };
        player.place_at(SPAWN);
        player
    }

    /// Snap the sprite so its feet stand in `cell`
    pub fn place_at(&mut self, cell: Position) {
        self.screen_x = cell.x * TILE_SIZE as i32;
        self.screen_y = cell.y * TILE_SIZE as i32;
    }

    /// Foot point in world pixels for a sprite at (x, y)
    pub fn foot_at(x: i32, y: i32) -> (f32, f32) {
        (x as f32 + FOOT_OFFSET_X, y as f32 + FOOT_OFFSET_Y)
    }

    /// Cell under the player's feet
    pub fn cell(&self) -> Position {
        cell_of(Self::foot_at(self.screen_x, self.screen_y))
    }
}

/// Cell containing a world-pixel point
pub fn cell_of((x, y): (f32, f32)) -> Position {
    Position::new((x / TILE_SIZE).floor() as i32, (y / TILE_SIZE).floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_stands_on_spawn() {
        let player = Player::new();
        assert_eq!(player.cell(), SPAWN);
        assert_eq!(player.screen_x, 6 * 128);
        assert_eq!(player.speed, PLAYER_SPEED);
        assert!(player.inventory.held().is_empty());
    }

    #[test]
    fn test_foot_anchor() {
        // Feet sit near the bottom edge, so the sprite can rise 121 px and stay in the cell
        let mut player = Player::new();
        player.place_at(Position::new(3, 4));
        player.screen_y -= 121;
        assert_eq!(player.cell(), Position::new(3, 4));
        player.screen_y -= 1;
        assert_eq!(player.cell(), Position::new(3, 3));
        assert_eq!(cell_of((-0.5, 10.0)), Position::new(-1, 0));
    }

    #[test]
    fn test_spend_never_goes_negative() {
        let mut inv = Inventory::default();
        assert!(!inv.spend(ItemKind::EchoPrism, 1));
        assert_eq!(inv.count(ItemKind::EchoPrism), 0);
        inv.add(ItemKind::Sediment, 7);
        assert!(!inv.spend(ItemKind::Sediment, 8));
        assert!(inv.spend(ItemKind::Sediment, 7));
        assert_eq!(inv.sediment, 0);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(Player::new()).unwrap();
        for key in [
            "screenX",
            "screenY",
            "dir",
            "frame",
            "isMoving",
            "speed",
            "animTimer",
            "hasPickupAbility",
            "foundDigSite",
            "hasActivatedStonehenge",
            "wearingHat",
            "reachedDepth10",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["dir"], "down");
        let inv = &json["inventory"];
        for key in [
            "echoPrisms",
            "quickEscapes",
            "hammer",
            "key",
            "sediment",
            "shovel",
            "fossils",
            "indexFossil",
            "explorerHat",
            "metamorphicPebble",
            "arcaneEye",
            "instantTeleport",
        ] {
            assert_eq!(inv[key], 0, "{}", key);
        }
    }
}
