#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for Maze Rewind: runs scripted simulations over
//! TOML levels and replays transferred recordings.

mod level_file;
mod recording_transfer;

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use maze_rewind_core::{Direction, EntityId};
use maze_rewind_system_recorder::Recorder;
use maze_rewind_system_replay::{PlaybackDirection, PlaybackSpeed, Scrubber, Transport};
use maze_rewind_world::{DomainError, World};

use crate::level_file::LevelFile;

/// Milliseconds of simulated time per scripted move.
const TICK_MS: u64 = 100;

#[derive(Parser)]
#[command(name = "maze-rewind", about = "Deterministic, reversible maze simulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted move sequence on a level, print the final grid and
    /// the recording transfer string.
    Simulate {
        /// Path to the TOML level description.
        #[arg(long)]
        level: PathBuf,
        /// Moves as a string of U, D, L and R characters.
        #[arg(long)]
        moves: String,
    },
    /// Re-run a transferred recording over a freshly loaded level.
    Replay {
        /// Path to the TOML level description the recording was made on.
        #[arg(long)]
        level: PathBuf,
        /// The rewind:v1 transfer string.
        #[arg(long)]
        transfer: String,
        /// Play continuously at this speed (1..=5) instead of jumping
        /// straight to the end.
        #[arg(long)]
        speed: Option<u8>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Simulate { level, moves } => simulate(&level, &moves),
        Command::Replay {
            level,
            transfer,
            speed,
        } => replay(&level, &transfer, speed),
    }
}

fn simulate(level: &Path, moves: &str) -> anyhow::Result<()> {
    let file = LevelFile::load(level)?;
    let mut world = file.build_world()?;
    let mut recorder = Recorder::new(file.level, 0);

    for (index, step) in moves.chars().enumerate() {
        let direction = parse_move(step)?;
        let now = (index as u64 + 1) * TICK_MS;

        tick_enemies(&mut world, now)?;
        if let Err(error) = world.move_player_turning(direction) {
            match error {
                // The classic fallback: a blocked move still turns.
                DomainError::InvalidMove { .. } => world.set_player_direction(direction)?,
                other => return Err(other.into()),
            }
        }
        for action in world.drain_changes() {
            recorder.add_action(action, now);
        }
        if world.is_game_lost() || world.game_won() {
            break;
        }
    }

    report(&world);
    println!("{}", recording_transfer::encode(&recorder.into_recording()));
    Ok(())
}

/// Pings every enemy whose interval divides the current simulated time.
/// A patrol spawned facing an obstruction cannot step; it skips the tick.
fn tick_enemies(world: &mut World, now: u64) -> anyhow::Result<()> {
    let due: Vec<EntityId> = world
        .enemies()
        .iter()
        .filter(|enemy| {
            let speed = u64::from(enemy.speed());
            speed != 0 && now % speed == 0
        })
        .map(|enemy| enemy.state().id())
        .collect();
    for entity in due {
        if let Err(error) = world.ping(entity) {
            match error {
                DomainError::InvalidMove { .. } => {
                    warn!(?entity, "enemy is walled in, skipping its tick");
                }
                other => return Err(other.into()),
            }
        }
    }
    Ok(())
}

fn replay(level: &Path, transfer: &str, speed: Option<u8>) -> anyhow::Result<()> {
    let file = LevelFile::load(level)?;
    let recording = recording_transfer::decode(transfer).context("invalid transfer string")?;
    if recording.level != file.level {
        bail!(
            "recording is for level {} but the level file describes level {}",
            recording.level,
            file.level
        );
    }

    let world = file.build_world()?;
    let mut scrubber = Scrubber::new(recording);
    let end = scrubber.len();

    let world = match speed {
        None => {
            let mut world = world;
            scrubber.scrub(&mut world, end)?;
            world
        }
        Some(speed) => {
            let speed = PlaybackSpeed::new(speed);
            info!(speed = speed.get(), states = end, "playing recording");
            let transport = Transport::start(world, scrubber, PlaybackDirection::Forward, speed);
            while !transport.is_finished() {
                if let Some(position) = transport.latest_position() {
                    info!(position, "replay advanced");
                }
                thread::sleep(Duration::from_millis(50));
            }
            let outcome = transport.stop();
            outcome.result?;
            outcome.world
        }
    };

    report(&world);
    Ok(())
}

fn report(world: &World) {
    print!("{}", world.grid_string());
    let player = maze_rewind_world::query::player_view(world);
    println!("player at ({}, {}) facing {:?}", player.position.x(), player.position.y(), player.facing);
    if world.is_game_lost() {
        println!("game lost");
    } else if world.game_won() {
        println!("level complete");
    }
}

fn parse_move(step: char) -> anyhow::Result<Direction> {
    Ok(match step.to_ascii_uppercase() {
        'U' => Direction::Up,
        'D' => Direction::Down,
        'L' => Direction::Left,
        'R' => Direction::Right,
        other => bail!("unknown move '{other}', expected one of U, D, L, R"),
    })
}
