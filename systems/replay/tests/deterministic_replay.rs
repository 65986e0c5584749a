//! A recorded run scrubbed over a fresh world must land on the same grid
//! fingerprints as the live run, in both directions.

use std::time::Duration;

use maze_rewind_core::{Color, Direction, Point, Recording};
use maze_rewind_system_recorder::Recorder;
use maze_rewind_system_replay::{PlaybackDirection, PlaybackSpeed, Scrubber, Transport};
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

/// Runs the corridor live, recording one state per move, and returns the
/// recording together with the grid fingerprint after every state.
fn record_corridor_run() -> (Recording, Vec<String>) {
    let mut world = corridor();
    let mut recorder = Recorder::new(1, 0);
    let mut fingerprints = vec![world.grid_string()];
    for tick in 0..5u64 {
        world.move_player_turning(Direction::Right).expect("move");
        for action in world.drain_changes() {
            recorder.add_action(action, tick * 100);
        }
        fingerprints.push(world.grid_string());
    }
    (recorder.into_recording(), fingerprints)
}

#[test]
fn scrubbing_forward_reproduces_every_recorded_state() {
    let (recording, fingerprints) = record_corridor_run();
    let mut world = corridor();
    let mut scrubber = Scrubber::new(recording);

    for target in 1..=scrubber.len() {
        scrubber.scrub(&mut world, target).expect("scrub");
        assert_eq!(world.grid_string(), fingerprints[target]);
    }
    assert!(world.game_won());
}

#[test]
fn scrubbing_backward_unwinds_to_the_start() {
    let (recording, fingerprints) = record_corridor_run();
    let mut world = corridor();
    let mut scrubber = Scrubber::new(recording);

    let end = scrubber.len();
    scrubber.scrub(&mut world, end).expect("scrub");
    for target in (0..end).rev() {
        scrubber.scrub(&mut world, target).expect("scrub");
        assert_eq!(world.grid_string(), fingerprints[target]);
    }
    assert_eq!(
        world.player().state().position(),
        Point::ZERO,
        "the player must be back on the start cell"
    );
    assert_eq!(world.treasures_left(), 1);
    assert_eq!(world.player().key_count(), 0);
}

#[test]
fn scrubbing_to_the_cursor_is_idempotent_and_targets_clamp() {
    let (recording, fingerprints) = record_corridor_run();
    let mut world = corridor();
    let mut scrubber = Scrubber::new(recording);

    scrubber.scrub(&mut world, 3).expect("scrub");
    let at_three = world.grid_string();
    scrubber.scrub(&mut world, 3).expect("scrub");
    assert_eq!(world.grid_string(), at_three);
    assert_eq!(scrubber.cursor(), 3);

    scrubber.scrub(&mut world, 999).expect("scrub");
    assert_eq!(scrubber.cursor(), 5);
    assert_eq!(world.grid_string(), fingerprints[5]);
}

#[test]
fn the_transport_plays_to_the_end_and_returns_ownership() {
    let (recording, fingerprints) = record_corridor_run();
    let world = corridor();
    let scrubber = Scrubber::new(recording);

    let transport = Transport::start(
        world,
        scrubber,
        PlaybackDirection::Forward,
        PlaybackSpeed::new(5),
    );
    // Five steps at 200ms each; leave headroom before collecting.
    std::thread::sleep(Duration::from_millis(1500));
    let reported = transport.latest_position();
    let outcome = transport.stop();

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.scrubber.cursor(), 5);
    assert_eq!(reported, Some(5));
    assert_eq!(outcome.world.grid_string(), fingerprints[5]);
    assert!(outcome.world.game_won());
}

#[test]
fn stopping_a_transport_at_the_boundary_is_immediate() {
    let (recording, _) = record_corridor_run();
    let world = corridor();
    let scrubber = Scrubber::new(recording);

    // Rewinding from cursor 0 has nowhere to go; the worker exits on its
    // own and stop only collects the pieces.
    let transport = Transport::start(
        world,
        scrubber,
        PlaybackDirection::Backward,
        PlaybackSpeed::new(1),
    );
    let outcome = transport.stop();
    assert!(outcome.result.is_ok());
    assert_eq!(outcome.scrubber.cursor(), 0);
}
