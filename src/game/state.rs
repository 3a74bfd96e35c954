//! Game controller
//!
//! Owns the world, the player and everything that decides what happens next.
//! Front ends feed it input and drain the events it queues.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::action::DirectionInput;
use super::dialogue::{self, Choice, Dialogue};
use super::events::GameEvent;
use super::interaction::{self, Scene, UseError};
use super::movement::{self, StepOutcome};
use crate::audio::{MusicTrack, SoundId};
use crate::data::DataManager;
use crate::entities::{ItemKind, Player};
use crate::save::{self, cheats, SaveData, SaveError};
use crate::world::layouts::FINALE;
use crate::world::{GenerationError, Mode, Position, WorldRegistry};

/// What a successful load did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A cheat ran; carries its message
    Cheat(String),
    Restored,
}

pub struct GameController {
    world: WorldRegistry,
    player: Player,
    /// Overworld boulder hiding the chest key
    key_location: Option<Position>,
    rng: StdRng,
    data: DataManager,
    /// Open modal; blocks movement and interaction
    dialogue: Option<Dialogue>,
    won: bool,
    shake_ticks: u32,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Build a session sitting on the start screen
    pub fn new(data: DataManager) -> Result<Self, GenerationError> {
        Self::with_rng(data, StdRng::from_entropy())
    }

    /// Same as [`GameController::new`] with a fixed seed
    pub fn with_seed(data: DataManager, seed: u64) -> Result<Self, GenerationError> {
        Self::with_rng(data, StdRng::seed_from_u64(seed))
    }

    fn with_rng(data: DataManager, mut rng: StdRng) -> Result<Self, GenerationError> {
        let world = WorldRegistry::generate(&mut rng)?;
        let key_location = world.choose_key_location(&mut rng);
        Ok(Self {
            world,
            player: Player::new(),
            key_location,
            rng,
            data,
            dialogue: None,
            won: false,
            shake_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Throw away the session and start over in the overworld
    pub fn new_game(&mut self) -> Result<(), GenerationError> {
        self.world = WorldRegistry::generate(&mut self.rng)?;
        self.key_location = self.world.choose_key_location(&mut self.rng);
        self.player = Player::new();
        self.dialogue = None;
        self.won = false;
        self.shake_ticks = 0;
        self.world.enter(Mode::Overworld, 0);
        self.events.push(GameEvent::ModeChanged { mode: Mode::Overworld, depth: 0 });
        log::info!("New game started, key hidden at {:?}", self.key_location);
        Ok(())
    }

    pub fn world(&self) -> &WorldRegistry {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn data(&self) -> &DataManager {
        &self.data
    }

    pub fn dialogue(&self) -> Option<&Dialogue> {
        self.dialogue.as_ref()
    }

    pub fn key_location(&self) -> Option<Position> {
        self.key_location
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn shake_ticks(&self) -> u32 {
        self.shake_ticks
    }

    pub fn music(&self) -> MusicTrack {
        MusicTrack::for_mode(self.world.mode())
    }

    /// Active crystals across all caves
    pub fn crystal_progress(&self) -> (usize, usize) {
        (self.world.active_crystal_count(), self.world.crystal_count())
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Play is possible: a map is active, nothing modal is open, not won
    fn can_act(&self) -> bool {
        !self.won && self.world.mode() != Mode::Start && self.dialogue.is_none()
    }

    /// Advance one frame
    pub fn tick(&mut self, input: DirectionInput) {
        self.shake_ticks = self.shake_ticks.saturating_sub(1);
        if !self.can_act() {
            return;
        }

        match movement::step(&mut self.world, &mut self.player, input) {
            StepOutcome::Transition { mode, depth } => {
                self.events.push(GameEvent::ModeChanged { mode, depth });
            }
            _ => self.check_win(),
        }
    }

    fn check_win(&mut self) {
        if self.world.mode() == Mode::Overworld
            && self.player.has_activated_stonehenge
            && !self.won
            && self.player.cell() == FINALE
        {
            self.won = true;
            self.events.push(GameEvent::Sound(SoundId::Win));
            self.events.push(GameEvent::Won);
            log::info!("Game won");
        }
    }

    /// Interact with whatever is around the player
    pub fn interact(&mut self) {
        if !self.can_act() {
            return;
        }
        let mut scene = Scene {
            world: &mut self.world,
            player: &mut self.player,
            key_location: self.key_location,
            events: &mut self.events,
        };
        self.dialogue = interaction::interact(&mut scene, &self.data, &mut self.rng);
    }

    /// Pick option `index` of the open dialogue
    pub fn choose(&mut self, index: usize) {
        let Some(choice) = self.dialogue.as_ref().and_then(|d| d.options.get(index)).map(|o| o.choice) else {
            return;
        };
        self.dialogue = match choice {
            Choice::Answer { cell, correct } => {
                let mut scene = Scene {
                    world: &mut self.world,
                    player: &mut self.player,
                    key_location: self.key_location,
                    events: &mut self.events,
                };
                Some(interaction::answer(&mut scene, cell, correct))
            }
            other => dialogue::resolve(other, &mut self.player, &self.data.dialogue, &mut self.rng, &mut self.events),
        };
    }

    pub fn close_dialogue(&mut self) {
        self.dialogue = None;
    }

    /// Use an item from the inventory; failures are also reported as a message
    pub fn use_item(&mut self, item: ItemKind) -> Result<(), UseError> {
        if !self.can_act() {
            return Ok(());
        }
        let first_new = self.events.len();
        let mut scene = Scene {
            world: &mut self.world,
            player: &mut self.player,
            key_location: self.key_location,
            events: &mut self.events,
        };
        match interaction::use_item(&mut scene, item) {
            Ok(text) => {
                self.dialogue = text.map(Dialogue::message);
                self.absorb_events(first_new);
                Ok(())
            }
            Err(e) => {
                self.events.push(GameEvent::Message(e.to_string()));
                Err(e)
            }
        }
    }

    /// Collect sediment from nearby rubble
    pub fn pick_up(&mut self) -> Result<(), UseError> {
        if !self.can_act() {
            return Ok(());
        }
        let mut scene = Scene {
            world: &mut self.world,
            player: &mut self.player,
            key_location: self.key_location,
            events: &mut self.events,
        };
        match interaction::pick_up(&mut scene, &mut self.rng) {
            Ok(text) => {
                self.dialogue = Some(Dialogue::message(text));
                Ok(())
            }
            Err(e) => {
                self.events.push(GameEvent::Message(e.to_string()));
                Err(e)
            }
        }
    }

    fn absorb_events(&mut self, first_new: usize) {
        for event in &self.events[first_new..] {
            if let GameEvent::ScreenShake { ticks } = event {
                self.shake_ticks = *ticks;
            }
        }
    }

    /// Current state as a save code
    pub fn save_code(&self) -> Result<String, SaveError> {
        let code = save::encode(&SaveData::capture(&self.world, &self.player, self.key_location))?;
        log::info!("Generated save code ({} characters)", code.len());
        Ok(code)
    }

    /// Apply a cheat or restore a save code. A bad code changes nothing.
    pub fn load_code(&mut self, input: &str) -> Result<LoadOutcome, SaveError> {
        if let Some(cheat) = cheats::find(input) {
            let message = (cheat.apply)(&mut self.world);
            if self.world.mode() == Mode::Start {
                self.world.enter(Mode::Overworld, 0);
                self.events.push(GameEvent::ModeChanged { mode: Mode::Overworld, depth: 0 });
            }
            log::info!("Cheat {:?} applied", cheat.code);
            self.events.push(GameEvent::Message(message.clone()));
            return Ok(LoadOutcome::Cheat(message));
        }

        let restored = save::decode(input).and_then(SaveData::into_parts);
        let (world, player, key_location) = match restored {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("Rejected save code: {}", e);
                return Err(e);
            }
        };
        self.world = world;
        self.player = player;
        self.key_location = key_location;
        self.dialogue = None;
        self.won = false;
        self.shake_ticks = 0;
        self.events.push(GameEvent::ModeChanged { mode: self.world.mode(), depth: self.world.depth() });
        log::info!("Save restored: {} at depth {}", self.world.mode().name(), self.world.depth());
        Ok(LoadOutcome::Restored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Facing;
    use crate::world::Tile;

    fn started(seed: u64) -> GameController {
        let mut game = GameController::with_seed(DataManager::default(), seed).unwrap();
        game.new_game().unwrap();
        game.drain_events();
        game
    }

    fn right() -> DirectionInput {
        DirectionInput { right: true, ..Default::default() }
    }

    #[test]
    fn test_start_screen_blocks_play() {
        let mut game = GameController::with_seed(DataManager::default(), 1).unwrap();
        assert_eq!(game.world().mode(), Mode::Start);
        let before = game.player().clone();
        game.tick(right());
        game.interact();
        assert_eq!(game.player(), &before);
        assert_eq!(game.music(), MusicTrack::Silence);
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut game = started(2);
        assert_eq!(game.world().mode(), Mode::Overworld);
        assert_eq!(game.music(), MusicTrack::Overworld);
        let key = game.key_location().unwrap();
        assert_eq!(game.world().overworld.get(key), Some(Tile::Boulder));

        game.player.inventory.sediment = 9;
        game.new_game().unwrap();
        assert_eq!(game.player(), &Player::new());
        assert_eq!(game.drain_events(), vec![GameEvent::ModeChanged { mode: Mode::Overworld, depth: 0 }]);
    }

    #[test]
    fn test_dialogue_blocks_movement() {
        let mut game = started(3);
        game.dialogue = Some(Dialogue::message("hello"));
        let x = game.player().screen_x;
        game.tick(right());
        assert_eq!(game.player().screen_x, x);
        game.choose(0);
        assert!(game.dialogue().is_none());
        game.tick(right());
        assert_eq!(game.player().screen_x, x + 5);
    }

    #[test]
    fn test_walking_onto_finale_after_ritual_wins() {
        let mut game = started(4);
        game.player.screen_x = FINALE.x * 128 - 66;
        game.player.screen_y = FINALE.y * 128;
        game.tick(right());
        assert!(!game.is_won());

        game.player.screen_x = FINALE.x * 128 - 66;
        game.player.has_activated_stonehenge = true;
        game.tick(right());
        assert!(game.is_won());
        assert_eq!(game.drain_events(), vec![GameEvent::Sound(SoundId::Win), GameEvent::Won]);

        let x = game.player().screen_x;
        game.tick(right());
        assert_eq!(game.player().screen_x, x);
    }

    #[test]
    fn test_quiz_through_controller() {
        let mut game = started(5);
        game.world.enter(Mode::Cave, 4);
        let crystal = game.world().cave(4).unwrap().find(Tile::Crystal).unwrap();
        game.player.place_at(crystal.offset(-1, 0));
        game.interact();

        let options = game.dialogue().unwrap().options.clone();
        let right_answer = options
            .iter()
            .position(|o| matches!(o.choice, Choice::Answer { correct: true, .. }))
            .unwrap();
        game.choose(right_answer);
        assert_eq!(game.dialogue().unwrap().text, "Correct! The crystal glows green.");
        assert_eq!(game.world().tile_at(crystal), Some(Tile::CrystalActive));
        assert_eq!(game.crystal_progress().0, 1);
        // Answering is silent either way
        assert!(!game.drain_events().iter().any(|e| matches!(e, GameEvent::Sound(_))));
    }

    #[test]
    fn test_use_failures_become_messages() {
        let mut game = started(6);
        assert_eq!(game.use_item(ItemKind::Hammer), Err(UseError::NotHeld(ItemKind::Hammer)));
        assert_eq!(game.drain_events(), vec![GameEvent::Message("you have no Hammer".to_string())]);
        assert_eq!(game.pick_up(), Err(UseError::NoPickupAbility));
    }

    #[test]
    fn test_ritual_starts_screen_shake() {
        let mut game = started(7);
        game.world.enter(Mode::Cave, 10);
        game.player.place_at(Position::new(1, 5));
        game.player.inventory.metamorphic_pebble = 1;
        game.use_item(ItemKind::MetamorphicPebble).unwrap();
        assert_eq!(game.shake_ticks(), 240);
        game.close_dialogue();
        game.tick(DirectionInput::default());
        assert_eq!(game.shake_ticks(), 239);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut game = started(8);
        game.player.inventory.hammer = 1;
        game.player.dir = Facing::Up;
        game.world.overworld.set(Position::new(3, 3), Tile::Rubble);
        let code = game.save_code().unwrap();

        let mut other = started(9);
        assert_eq!(other.load_code(&code), Ok(LoadOutcome::Restored));
        assert_eq!(other.player(), game.player());
        assert_eq!(other.world(), game.world());
        assert_eq!(other.key_location(), game.key_location());
    }

    #[test]
    fn test_bad_code_changes_nothing() {
        let mut game = started(10);
        let world = game.world().clone();
        let player = game.player().clone();
        assert!(game.load_code("not a code!").is_err());
        assert!(game.load_code("zzzz").is_err());
        assert_eq!(game.world(), &world);
        assert_eq!(game.player(), &player);
    }

    #[test]
    fn test_cheat_from_start_screen_enters_overworld() {
        let mut game = GameController::with_seed(DataManager::default(), 11).unwrap();
        let total = game.crystal_progress().1;
        let outcome = game.load_code(" green gems! ").unwrap();
        assert_eq!(outcome, LoadOutcome::Cheat(format!("CHEAT ACTIVATED: {} CRYSTALS ENERGIZED!", total)));
        assert_eq!(game.world().mode(), Mode::Overworld);
        assert_eq!(game.crystal_progress(), (total, total));
    }
}
