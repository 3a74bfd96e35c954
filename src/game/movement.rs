//! Movement and collision
//!
//! Advances the player one tick against the active grid. The target cell is
//! the one under the player's feet after the move; its behavior descriptor
//! decides whether the move commits, is rejected, or switches maps.

use crate::entities::player::{cell_of, ANIM_FRAMES, ANIM_TICKS};
use crate::entities::{Facing, Player};
use crate::world::tile::{Landing, Passability, Transition};
use crate::world::{MapGrid, Mode, Position, Tile, WorldRegistry, MAX_DEPTH, TILE_SIZE};

use super::action::DirectionInput;

/// What a tick of movement did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No direction held
    Idle,
    Moved,
    Blocked,
    /// A map switch fired; nothing else happened this tick
    Transition { mode: Mode, depth: u8 },
}

/// Does `tile` stop a foot at `local` (pixels inside the tile)?
pub fn is_blocked(tile: Tile, local: (f32, f32), mode: Mode, player: &Player) -> bool {
    match tile.behavior().passability {
        Passability::Open => false,
        Passability::Solid => true,
        Passability::Footprint(rect) => rect.contains(local.0, local.1),
        Passability::RitualStones => mode == Mode::Cave || player.has_activated_stonehenge,
    }
}

/// Advance one tick with the given direction keys held
pub fn step(world: &mut WorldRegistry, player: &mut Player, input: DirectionInput) -> StepOutcome {
    let (mut dx, mut dy) = (0, 0);
    player.is_moving = false;

    if input.up {
        dy = -player.speed;
        player.dir = Facing::Up;
        player.is_moving = true;
    } else if input.down {
        dy = player.speed;
        player.dir = Facing::Down;
        player.is_moving = true;
    }
    if input.left {
        dx = -player.speed;
        player.dir = Facing::Left;
        player.is_moving = true;
    } else if input.right {
        dx = player.speed;
        player.dir = Facing::Right;
        player.is_moving = true;
    }

    if !player.is_moving {
        player.frame = 0;
        return StepOutcome::Idle;
    }

    let next = (player.screen_x + dx, player.screen_y + dy);
    let outcome = match resolve(world, player, next) {
        Resolution::Transition(transition) => return apply_transition(world, player, transition),
        Resolution::Pass => {
            player.screen_x = next.0;
            player.screen_y = next.1;
            StepOutcome::Moved
        }
        Resolution::Block => StepOutcome::Blocked,
    };

    player.anim_timer += 1;
    if player.anim_timer > ANIM_TICKS {
        player.frame = (player.frame + 1) % ANIM_FRAMES;
        player.anim_timer = 0;
    }
    outcome
}

enum Resolution {
    Pass,
    Block,
    Transition(Transition),
}

fn resolve(world: &WorldRegistry, player: &Player, (x, y): (i32, i32)) -> Resolution {
    let foot = Player::foot_at(x, y);
    let Some(tile) = world.tile_at(cell_of(foot)) else {
        return Resolution::Block;
    };
    let local = (foot.0.rem_euclid(TILE_SIZE), foot.1.rem_euclid(TILE_SIZE));

    match tile.behavior().transition {
        Some(Transition::Doorway { zone, landing }) if player.dir == Facing::Up && zone.contains(local.0, local.1) => {
            return Resolution::Transition(Transition::Exit(landing));
        }
        Some(transition @ Transition::Exit(_)) => return Resolution::Transition(transition),
        Some(Transition::StairsDown) if world.depth() < MAX_DEPTH => {
            return Resolution::Transition(Transition::StairsDown);
        }
        Some(Transition::StairsUp) if world.depth() > 0 => return Resolution::Transition(Transition::StairsUp),
        _ => {}
    }

    if is_blocked(tile, local, world.mode(), player) {
        Resolution::Block
    } else {
        Resolution::Pass
    }
}

fn apply_transition(world: &mut WorldRegistry, player: &mut Player, transition: Transition) -> StepOutcome {
    match transition {
        Transition::Exit(landing) | Transition::Doorway { landing, .. } => land(world, player, landing),
        Transition::StairsDown => {
            let depth = world.depth() + 1;
            if depth == MAX_DEPTH {
                player.reached_depth10 = true;
            }
            take_stairs(world, player, depth, Tile::StairsUp);
        }
        Transition::StairsUp => {
            let depth = world.depth().saturating_sub(1);
            take_stairs(world, player, depth, Tile::StairsDown);
        }
    }
    log::debug!("Entered {} at depth {}", world.mode().name(), world.depth());
    StepOutcome::Transition { mode: world.mode(), depth: world.depth() }
}

/// Move to a fixed spot in another area
pub fn land(world: &mut WorldRegistry, player: &mut Player, landing: Landing) {
    world.enter(landing.mode, landing.depth);
    player.place_at(landing.cell);
}

/// Change depth and stand next to the matching staircase; without one only
/// the depth changes
fn take_stairs(world: &mut WorldRegistry, player: &mut Player, depth: u8, arrive_at: Tile) {
    world.enter(Mode::Cave, depth);
    if let Some(cell) = world.cave(depth).and_then(|grid| stair_landing(grid, arrive_at)) {
        player.place_at(cell);
    }
}

/// One below the first `stair`, else one above, else the stair itself.
/// A neighbour counts as open unless it is cave wall.
pub fn stair_landing(grid: &MapGrid, stair: Tile) -> Option<Position> {
    let pos = grid.find(stair)?;
    let open = |p: Position| grid.get(p).is_some_and(|t| t != Tile::CaveWall);

    let below = pos.offset(0, 1);
    let above = pos.offset(0, -1);
    if open(below) {
        Some(below)
    } else if open(above) {
        Some(above)
    } else {
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::layouts::{BUILDING_RETURN, CAVE_BOULDER, CAVE_RETURN, CAVE_SPAWN, INTERIOR_SPAWN, SPAWN};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn world_in(mode: Mode, depth: u8) -> WorldRegistry {
        let mut world = WorldRegistry::generate(&mut StdRng::seed_from_u64(21)).unwrap();
        world.enter(mode, depth);
        world
    }

    fn held(dir: Facing) -> DirectionInput {
        DirectionInput {
            up: dir == Facing::Up,
            down: dir == Facing::Down,
            left: dir == Facing::Left,
            right: dir == Facing::Right,
        }
    }

    /// Position the player so one step in `dir` crosses into `target`
    fn stand_before(player: &mut Player, target: Position, dir: Facing) {
        let (tx, ty) = (target.x * 128, target.y * 128);
        let (x, y) = match dir {
            Facing::Down => (tx, ty - 124),
            Facing::Up => (tx, ty + 128 - 119),
            Facing::Right => (tx - 66, ty),
            Facing::Left => (tx + 128 - 62, ty),
        };
        player.screen_x = x;
        player.screen_y = y;
        player.dir = dir;
    }

    #[test]
    fn test_axis_priority_and_facing() {
        let mut world = world_in(Mode::Overworld, 0);
        let mut player = Player::new();
        let (x, y) = (player.screen_x, player.screen_y);

        let input = DirectionInput { up: true, down: true, left: true, right: true };
        assert_eq!(step(&mut world, &mut player, input), StepOutcome::Moved);
        assert_eq!((player.screen_x, player.screen_y), (x - 5, y - 5));
        assert_eq!(player.dir, Facing::Left);

        let input = DirectionInput { down: true, right: true, ..Default::default() };
        step(&mut world, &mut player, input);
        assert_eq!((player.screen_x, player.screen_y), (x, y));
        assert_eq!(player.dir, Facing::Right);
    }

    #[test]
    fn test_animation_cycle() {
        let mut world = world_in(Mode::Overworld, 0);
        let mut player = Player::new();
        for _ in 0..9 {
            step(&mut world, &mut player, held(Facing::Right));
        }
        assert_eq!(player.frame, 1);
        assert_eq!(player.anim_timer, 0);
        step(&mut world, &mut player, DirectionInput::default());
        assert_eq!(player.frame, 0);
        assert!(!player.is_moving);
    }

    #[test]
    fn test_water_blocks() {
        let mut world = world_in(Mode::Overworld, 0);
        let mut player = Player::new();
        // Left edge of the map is water
        stand_before(&mut player, Position::new(0, 15), Facing::Left);
        let before = (player.screen_x, player.screen_y);
        assert_eq!(step(&mut world, &mut player, held(Facing::Left)), StepOutcome::Blocked);
        assert_eq!((player.screen_x, player.screen_y), before);
        assert_eq!(player.anim_timer, 1);
    }

    #[test]
    fn test_tree_trunk_footprint() {
        let mut world = world_in(Mode::Overworld, 0);
        let tree = Position::new(3, 9);
        assert_eq!(world.overworld.get(tree), Some(Tile::Tree));
        let mut player = Player::new();

        // Canopy row is walkable
        stand_before(&mut player, tree, Facing::Down);
        assert_eq!(step(&mut world, &mut player, held(Facing::Down)), StepOutcome::Moved);
        assert_eq!(player.cell(), tree);

        // Trunk band blocks: foot at local (42, 100.6) moving right
        player.screen_x = tree.x * 128 - 22;
        player.screen_y = tree.y * 128 - 21;
        assert_eq!(step(&mut world, &mut player, held(Facing::Right)), StepOutcome::Blocked);
    }

    #[test]
    fn test_boulder_footprint() {
        let mut world = world_in(Mode::Overworld, 0);
        let mut player = Player::new();
        player.screen_x = CAVE_BOULDER.x * 128;
        player.screen_y = CAVE_BOULDER.y * 128 - 63;
        assert_eq!(player.cell(), CAVE_BOULDER);
        assert_eq!(step(&mut world, &mut player, held(Facing::Down)), StepOutcome::Blocked);
    }

    #[test]
    fn test_enter_and_leave_building() {
        let mut world = world_in(Mode::Overworld, 0);
        let mut player = Player::new();
        let door = BUILDING_RETURN.offset(0, -1);

        // Side approach hits the wall
        stand_before(&mut player, door, Facing::Right);
        assert_eq!(step(&mut world, &mut player, held(Facing::Right)), StepOutcome::Blocked);

        stand_before(&mut player, door, Facing::Up);
        assert_eq!(
            step(&mut world, &mut player, held(Facing::Up)),
            StepOutcome::Transition { mode: Mode::Interior, depth: 0 }
        );
        assert_eq!(player.cell(), INTERIOR_SPAWN);

        assert_eq!(
            step(&mut world, &mut player, held(Facing::Down)),
            StepOutcome::Moved
        );
        stand_before(&mut player, INTERIOR_SPAWN.offset(0, 1), Facing::Down);
        assert_eq!(
            step(&mut world, &mut player, held(Facing::Down)),
            StepOutcome::Transition { mode: Mode::Overworld, depth: 0 }
        );
        assert_eq!(player.cell(), BUILDING_RETURN);
    }

    #[test]
    fn test_cave_mouth_and_exit() {
        let mut world = world_in(Mode::Overworld, 0);
        world.overworld.set(CAVE_BOULDER, Tile::CaveMouth);
        let mut player = Player::new();

        stand_before(&mut player, CAVE_BOULDER, Facing::Up);
        assert_eq!(
            step(&mut world, &mut player, held(Facing::Up)),
            StepOutcome::Transition { mode: Mode::Cave, depth: 0 }
        );
        assert_eq!(player.cell(), CAVE_SPAWN);

        stand_before(&mut player, CAVE_SPAWN.offset(0, 1), Facing::Down);
        assert_eq!(
            step(&mut world, &mut player, held(Facing::Down)),
            StepOutcome::Transition { mode: Mode::Overworld, depth: 0 }
        );
        assert_eq!(player.cell(), CAVE_RETURN);
    }

    #[test]
    fn test_stairs_down_to_shrine_sets_flag() {
        let mut world = world_in(Mode::Cave, 9);
        let stairs = world.cave(9).unwrap().find(Tile::StairsDown).unwrap();
        let mut player = Player::new();
        stand_before(&mut player, stairs, Facing::Down);

        let outcome = step(&mut world, &mut player, held(Facing::Down));
        assert_eq!(outcome, StepOutcome::Transition { mode: Mode::Cave, depth: 10 });
        assert!(player.reached_depth10);
        let expected = stair_landing(world.cave(10).unwrap(), Tile::StairsUp).unwrap();
        assert_eq!(player.cell(), expected);
    }

    #[test]
    fn test_stairs_at_bounds_are_plain_floor() {
        let mut world = world_in(Mode::Cave, 10);
        world.caves_mut()[10].set(Position::new(4, 4), Tile::StairsDown);
        let mut player = Player::new();
        stand_before(&mut player, Position::new(4, 4), Facing::Down);
        assert_eq!(step(&mut world, &mut player, held(Facing::Down)), StepOutcome::Moved);
        assert_eq!(world.depth(), 10);

        let mut world = world_in(Mode::Cave, 0);
        world.caves_mut()[0].set(Position::new(5, 4), Tile::StairsUp);
        stand_before(&mut player, Position::new(5, 4), Facing::Right);
        assert_eq!(step(&mut world, &mut player, held(Facing::Right)), StepOutcome::Moved);
        assert_eq!(world.depth(), 0);
    }

    #[test]
    fn test_stairs_up_lands_by_down_stairs() {
        let mut world = world_in(Mode::Cave, 1);
        let up = world.cave(1).unwrap().find(Tile::StairsUp).unwrap();
        let mut player = Player::new();
        stand_before(&mut player, up, Facing::Up);
        assert_eq!(
            step(&mut world, &mut player, held(Facing::Up)),
            StepOutcome::Transition { mode: Mode::Cave, depth: 0 }
        );
        // Entrance cave stairs down sit at (7, 2) with open floor below
        assert_eq!(player.cell(), Position::new(7, 3));
    }

    #[test]
    fn test_stair_landing_fallbacks() {
        let grid = MapGrid::from_layout(&["WWW", "W<W", "W,W"]).unwrap();
        assert_eq!(stair_landing(&grid, Tile::StairsUp), Some(Position::new(1, 2)));
        let grid = MapGrid::from_layout(&["W,W", "W<W", "WWW"]).unwrap();
        assert_eq!(stair_landing(&grid, Tile::StairsUp), Some(Position::new(1, 0)));
        let grid = MapGrid::from_layout(&["WWW", "W<W", "WWW"]).unwrap();
        assert_eq!(stair_landing(&grid, Tile::StairsUp), Some(Position::new(1, 1)));
        // Last row: nothing below, so go above
        let grid = MapGrid::from_layout(&["W,W", "W<W"]).unwrap();
        assert_eq!(stair_landing(&grid, Tile::StairsUp), Some(Position::new(1, 0)));
        assert_eq!(stair_landing(&grid, Tile::StairsDown), None);
    }

    #[test]
    fn test_ritual_stones_rules() {
        let player = Player::new();
        let mut activated = Player::new();
        activated.has_activated_stonehenge = true;
        let local = (64.0, 64.0);
        assert!(!is_blocked(Tile::RitualStones, local, Mode::Overworld, &player));
        assert!(is_blocked(Tile::RitualStones, local, Mode::Overworld, &activated));
        assert!(is_blocked(Tile::RitualStones, local, Mode::Cave, &player));
    }

    #[test]
    fn test_random_walk_never_commits_into_blocked_spot() {
        let mut rng = StdRng::seed_from_u64(99);
        for mode in [Mode::Overworld, Mode::Interior, Mode::Cave] {
            let mut world = world_in(mode, 3);
            let mut player = Player::new();
            player.has_activated_stonehenge = rng.gen_bool(0.5);
            match mode {
                Mode::Interior => player.place_at(INTERIOR_SPAWN),
                Mode::Cave => {
                    let up = world.cave(3).unwrap().find(Tile::StairsUp).unwrap();
                    player.place_at(stair_landing(world.cave(3).unwrap(), Tile::StairsUp).unwrap_or(up));
                }
                _ => player.place_at(SPAWN),
            }
            for _ in 0..5000 {
                let input = DirectionInput {
                    up: rng.gen_bool(0.3),
                    down: rng.gen_bool(0.3),
                    left: rng.gen_bool(0.3),
                    right: rng.gen_bool(0.3),
                };
                if let StepOutcome::Moved = step(&mut world, &mut player, input) {
                    let foot = Player::foot_at(player.screen_x, player.screen_y);
                    let tile = world.tile_at(cell_of(foot)).unwrap();
                    let local = (foot.0.rem_euclid(TILE_SIZE), foot.1.rem_euclid(TILE_SIZE));
                    assert!(!is_blocked(tile, local, world.mode(), &player), "{:?} at {:?}", tile, local);
                }
            }
        }
    }
}
