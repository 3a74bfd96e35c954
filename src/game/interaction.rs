//! Interaction and item use
//!
//! Everything the player does to the cells around them: the interact key,
//! the inventory items and the sediment pickup. Each call either changes the
//! world and reports a message, or reports why nothing happened.

use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;

use super::dialogue::{self, Dialogue};
use super::events::{GameEvent, RITUAL_SHAKE_TICKS};
use super::movement;
use crate::audio::SoundId;
use crate::data::DataManager;
use crate::entities::{ItemKind, Player};
use crate::world::layouts::{CAVE_BOULDER, CAVE_RETURN, INSTANT_TELEPORT_LANDING, QUICK_ESCAPE_LANDING};
use crate::world::tile::{CrystalState, Interaction, Landing};
use crate::world::{Mode, Position, Tile, WorldRegistry, MAX_DEPTH};

/// Active crystals needed before the statue wakes
pub const STATUE_CRYSTALS: usize = 10;

/// Sediment gained per pickup
const SEDIMENT_YIELD: std::ops::RangeInclusive<u32> = 3..=9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseError {
    #[error("you have no {}", .0.name())]
    NotHeld(ItemKind),
    #[error("you don't know how to collect sediment yet")]
    NoPickupAbility,
}

/// Mutable view of the game a single action works on
pub struct Scene<'a> {
    pub world: &'a mut WorldRegistry,
    pub player: &'a mut Player,
    pub key_location: Option<Position>,
    pub events: &'a mut Vec<GameEvent>,
}

impl Scene<'_> {
    fn sound(&mut self, sound: SoundId) {
        self.events.push(GameEvent::Sound(sound));
    }

    /// First cell among `cells` whose tile passes `accept`
    fn find_near(&self, cells: &[Position], accept: impl Fn(Position, Tile) -> bool) -> Option<(Position, Tile)> {
        cells
            .iter()
            .filter_map(|&pos| self.world.tile_at(pos).map(|tile| (pos, tile)))
            .find(|&(pos, tile)| accept(pos, tile))
    }

    fn set(&mut self, pos: Position, tile: Tile) {
        if let Some(grid) = self.world.active_mut() {
            grid.set(pos, tile);
        }
    }

    fn here(&self) -> [Position; 5] {
        self.player.cell().with_neighbors()
    }
}

/// Interact with the first recognised tile around the player
pub fn interact(scene: &mut Scene, data: &DataManager, rng: &mut StdRng) -> Option<Dialogue> {
    let (pos, interaction) = scene
        .here()
        .iter()
        .filter_map(|&pos| scene.world.tile_at(pos).map(|tile| (pos, tile)))
        .find_map(|(pos, tile)| tile.behavior().interaction.map(|i| (pos, i)))?;

    log::debug!("Interacting with {:?} at {:?}", interaction, pos);
    let text = match interaction {
        Interaction::DigSite => {
            scene.player.found_dig_site = true;
            "It looks like you might be able to dig here."
        }
        Interaction::Crystal(CrystalState::Inactive) => {
            let depth = if scene.world.mode() == Mode::Cave { scene.world.depth() } else { 0 };
            return data.questions.for_depth(depth, rng).map(|q| Dialogue::quiz(q, pos));
        }
        Interaction::Crystal(CrystalState::Active) => "The crystal hums peacefully.",
        Interaction::Crystal(CrystalState::Dormant) => {
            "This crystal is dormant. You might need an Echo Prism to revive its energy."
        }
        Interaction::Statue => return Some(statue(scene)),
        Interaction::Npc(npc) => return Some(dialogue::open(npc, scene.player, &data.dialogue, scene.events)),
        Interaction::KeyPickup => {
            scene.player.inventory.key = 1;
            scene.set(pos, Tile::Rubble);
            "You picked up a Key!"
        }
        Interaction::LockedChest => "The chest is locked. Use the Key from your inventory to open it.",
        Interaction::Boulder => "It's a heavy boulder.",
        Interaction::RitualStones if scene.world.mode() == Mode::Overworld => {
            if scene.player.has_activated_stonehenge {
                "Ancient spirits dwell within these stones."
            } else {
                "The grass here feels... odd. As if something is missing."
            }
        }
        Interaction::RitualStones => "A strange pile of ancient stones. They pulse with a deep connection to the surface.",
    };
    Some(Dialogue::message(text))
}

fn statue(scene: &mut Scene) -> Dialogue {
    if scene.world.active_crystal_count() < STATUE_CRYSTALS {
        return Dialogue::message(
            "The statue of the monster stands silent. It seems to be waiting for something... \
             perhaps the activation of all the crystals deep below?",
        );
    }
    let player = &mut *scene.player;
    if player.inventory.metamorphic_pebble == 0 && !player.has_activated_stonehenge {
        player.inventory.metamorphic_pebble = 1;
        scene.sound(SoundId::Success);
        Dialogue::message(
            "The Monster Statue's eyes blaze with inner light! As you reach out, a strange stone \
             materializes in your hands: The Metamorphic Pebble.",
        )
    } else {
        Dialogue::message("The statue watches you with ancient, glowing eyes. You have already received its reward.")
    }
}

/// Settle a quiz crystal in the active grid
pub fn answer(scene: &mut Scene, cell: Position, correct: bool) -> Dialogue {
    if correct {
        scene.set(cell, Tile::CrystalActive);
        Dialogue::message("Correct! The crystal glows green.")
    } else {
        scene.set(cell, Tile::CrystalDormant);
        Dialogue::message("Incorrect. The crystal is dormant (red).")
    }
}

/// Use an inventory item. `Ok(None)` means it worked without anything to say.
pub fn use_item(scene: &mut Scene, item: ItemKind) -> Result<Option<String>, UseError> {
    if !scene.player.inventory.has(item) {
        return Err(UseError::NotHeld(item));
    }
    log::debug!("Using {}", item.name());

    let text = match item {
        ItemKind::EchoPrism => {
            let neighbors = scene.player.cell().neighbors();
            match scene.find_near(&neighbors, |_, tile| tile == Tile::CrystalDormant) {
                Some((pos, _)) => {
                    scene.set(pos, Tile::Crystal);
                    scene.player.inventory.spend(item, 1);
                    scene.sound(SoundId::Success);
                    "You used an Echo Prism! The crystal is active again."
                }
                None => "You need to be next to a dormant (red) crystal to use this.",
            }
        }
        ItemKind::QuickEscape => {
            scene.player.inventory.spend(item, 1);
            travel(scene, QUICK_ESCAPE_LANDING);
            "Used Quick Escape! Returned to surface."
        }
        ItemKind::InstantTeleport => {
            scene.player.inventory.spend(item, 1);
            travel(scene, INSTANT_TELEPORT_LANDING);
            "Used Instant Teleport! Arrived at Cave Depth 10."
        }
        ItemKind::ExplorerHat => {
            scene.player.wearing_hat = !scene.player.wearing_hat;
            scene.sound(SoundId::Success);
            return Ok(None);
        }
        ItemKind::Key => {
            let here = scene.here();
            match scene.find_near(&here, |_, tile| tile == Tile::ChestClosed) {
                Some((pos, _)) => {
                    scene.set(pos, Tile::ChestOpen);
                    scene.player.inventory.key = 0;
                    scene.player.has_pickup_ability = true;
                    scene.sound(SoundId::Success);
                    "Erosion is the physical act of moving materials like soil, rocks, or sediment from \
                     the location they were at to another. You have now helped Mr. Pense gain that ability."
                }
                None => "You need to stand next to a closed chest to use the key.",
            }
        }
        ItemKind::Hammer => smash(scene),
        ItemKind::Shovel => {
            let here = scene.here();
            match scene.find_near(&here, |_, tile| tile == Tile::DigSite) {
                Some((pos, _)) => {
                    scene.set(pos, Tile::CaveFloor);
                    scene.player.inventory.add(ItemKind::Fossil, 1);
                    scene.sound(SoundId::Dig);
                    "You found a fossil!"
                }
                None => "Nothing to dig here.",
            }
        }
        ItemKind::ArcaneEye => {
            "The Arcane Eye pulses with a deep violet light! It detects magic nearby... Wait. It's actually \
             detecting its own powerful magical aura. It will always tell you magic is nearby. \
             Mr. Arnold really got you on this one!"
        }
        ItemKind::MetamorphicPebble => place_pebble(scene),
        ItemKind::Sediment => "Just some dirt and rocks.",
        ItemKind::Fossil => "A curious ancient fossil.",
        ItemKind::IndexFossil => "An extremely rare fossil that helps date rock layers precisely.",
    };
    Ok(Some(text.to_string()))
}

fn travel(scene: &mut Scene, landing: Landing) {
    movement::land(scene.world, scene.player, landing);
    scene.sound(SoundId::Success);
    scene.events.push(GameEvent::ModeChanged { mode: landing.mode, depth: landing.depth });
}

fn smash(scene: &mut Scene) -> &'static str {
    let here = scene.here();
    let target = scene.find_near(&here, |pos, tile| match tile {
        Tile::Boulder => true,
        Tile::CaveWall => scene.world.active().is_some_and(|grid| !grid.is_border(pos)),
        _ => false,
    });
    let Some((pos, tile)) = target else {
        return "Nothing to smash here.";
    };

    let on_surface = scene.world.mode() == Mode::Overworld;
    let text = if tile == Tile::Boulder && on_surface && pos == CAVE_BOULDER {
        scene.set(pos, Tile::CaveMouth);
        scene.player.place_at(CAVE_RETURN);
        "You smashed the boulder revealing a cave entrance!"
    } else if tile == Tile::Boulder && on_surface && Some(pos) == scene.key_location {
        scene.set(pos, Tile::KeyPickup);
        "You smashed the boulder and found a key!"
    } else if tile == Tile::Boulder {
        scene.set(pos, Tile::Rubble);
        "You smashed the boulder!"
    } else {
        scene.set(pos, Tile::Rubble);
        "You smashed the wall!"
    };
    scene.sound(SoundId::Smash);
    text
}

fn place_pebble(scene: &mut Scene) -> &'static str {
    let at_shrine = scene.world.mode() == Mode::Cave && scene.world.depth() == MAX_DEPTH;
    let here = scene.here();
    if !at_shrine || scene.find_near(&here, |_, tile| tile == Tile::RitualStones).is_none() {
        return "A rare pebble that has undergone intense heat and pressure, changing its very form. \
                It pulses with a strange energy from the statue.";
    }

    scene.player.has_activated_stonehenge = true;
    scene.player.inventory.metamorphic_pebble = 0;
    scene.events.push(GameEvent::ScreenShake { ticks: RITUAL_SHAKE_TICKS });
    scene.sound(SoundId::Earthquake);
    log::info!("Ritual stones activated");
    "You placed the Metamorphic Pebble onto the pile of stones... Suddenly, the earth begins to rumble \
     with a massive earthquake! You must have done something to cause this. I wonder if something might \
     have happened on the surface?"
}

/// Collect sediment from a rubble cell around the player
pub fn pick_up(scene: &mut Scene, rng: &mut StdRng) -> Result<String, UseError> {
    if !scene.player.has_pickup_ability {
        return Err(UseError::NoPickupAbility);
    }
    let here = scene.here();
    let Some((pos, _)) = scene.find_near(&here, |_, tile| tile == Tile::Rubble) else {
        return Ok("Nothing to pick up here.".to_string());
    };

    let cleared = if scene.world.mode() == Mode::Cave { Tile::CaveFloor } else { Tile::Grass };
    scene.set(pos, cleared);
    let amount = rng.gen_range(SEDIMENT_YIELD);
    scene.player.inventory.add(ItemKind::Sediment, amount);
    scene.sound(SoundId::Pickup);
    Ok(format!("Picked up {} Sediment!", amount))
}
