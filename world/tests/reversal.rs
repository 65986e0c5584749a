//! Full round trip of a recorded run: every consuming interaction along a
//! corridor, then one `undo` call that must restore the exact starting
//! grid serialization and player state.

use maze_rewind_core::{Color, Direction, Point};
use maze_rewind_world::{Tile, World};

fn corridor() -> World {
    let mut world = World::generate(Point::new(6, 1), 1, -1).expect("generate");
    let key = Point::new(1, 0);
    let treasure = Point::new(2, 0);
    let door = Point::new(3, 0);
    let gate = Point::new(4, 0);
    let exit = Point::new(5, 0);
    world
        .set_tile(key, Tile::key(key, Color::Red).expect("key"))
        .expect("set");
    world
        .set_tile(treasure, Tile::treasure(treasure))
        .expect("set");
    world
        .set_tile(door, Tile::locked_door(door, Color::Red).expect("door"))
        .expect("set");
    world.set_tile(gate, Tile::locked_exit(gate)).expect("set");
    world.set_tile(exit, Tile::exit(exit)).expect("set");
    world
}

#[test]
fn five_recorded_moves_undo_to_the_exact_start() {
    let mut world = corridor();
    let before = world.grid_string();
    assert_eq!(before, "GKTDLE\n");

    let mut recorded = Vec::new();
    for _ in 0..5 {
        world.move_player_turning(Direction::Right).expect("move");
        recorded.extend(world.drain_changes());
    }
    assert_eq!(recorded.len(), 5);
    assert_eq!(world.grid_string(), "GGGGGE\n");
    assert_eq!(world.player().state().position(), Point::new(5, 0));
    assert_eq!(world.player().key_count(), 0);
    assert_eq!(world.treasures_left(), 0);
    assert!(world.game_won());

    let reversed: Vec<_> = recorded.iter().rev().copied().collect();
    world.undo(&reversed).expect("undo");

    assert_eq!(world.grid_string(), before);
    assert_eq!(world.player().state().position(), Point::ZERO);
    assert_eq!(world.player().state().facing(), Direction::Down);
    assert_eq!(world.player().key_count(), 0);
    assert_eq!(world.treasures_left(), 1);
    assert!(!world.game_won());
}

#[test]
fn a_move_across_a_bounce_pad_undoes_in_one_step() {
    let mut world = World::generate(Point::new(6, 1), 0, -1).expect("generate");
    let pad = Point::new(1, 0);
    let key = Point::new(3, 0);
    world
        .set_tile(pad, Tile::bouncy_pad(pad, Direction::Right))
        .expect("set");
    world
        .set_tile(key, Tile::key(key, Color::Blue).expect("key"))
        .expect("set");

    world.move_player_turning(Direction::Right).expect("move");
    assert_eq!(world.player().state().position(), key);
    assert!(world.player().has_key(Color::Blue));

    // The pad carried the player past the cell it stepped toward; the
    // drained action holds the whole displacement, not the one-cell step.
    let recorded = world.drain_changes();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].move_vector, Point::new(3, 0));

    world.undo(&recorded).expect("undo");
    assert_eq!(world.player().state().position(), Point::ZERO);
    assert_eq!(world.player().state().facing(), Direction::Down);
    assert_eq!(world.player().key_count(), 0);
    assert_eq!(world.grid_string(), "GBGKGG\n");

    world.apply(&recorded).expect("apply");
    assert_eq!(world.player().state().position(), key);
    assert!(world.player().has_key(Color::Blue));
}

#[test]
fn undo_then_apply_reproduces_the_final_grid() {
    let mut world = corridor();

    let mut recorded = Vec::new();
    for _ in 0..5 {
        world.move_player_turning(Direction::Right).expect("move");
        recorded.extend(world.drain_changes());
    }
    let after = world.grid_string();

    let reversed: Vec<_> = recorded.iter().rev().copied().collect();
    world.undo(&reversed).expect("undo");
    world.apply(&recorded).expect("apply");

    assert_eq!(world.grid_string(), after);
    assert_eq!(world.player().state().position(), Point::new(5, 0));
    assert!(world.game_won());
}
