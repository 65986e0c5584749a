#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cursor-based scrubbing and continuous playback over a recording.
//!
//! The scrubber composes forward `apply` and backward `undo` ranges in
//! strict order to land the world on any recorded state. The transport
//! drives it continuously from a worker thread that owns both the world and
//! the scrubber for the duration, so a new scrub can never overlap a
//! running one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use maze_rewind_core::{Action, Recording};
use maze_rewind_world::{DomainError, World};

/// Jumps a world to any index of a recording by composing deltas.
///
/// `cursor` is the index of the next not-yet-applied state; 0 means nothing
/// has been applied.
#[derive(Debug)]
pub struct Scrubber {
    states: Vec<maze_rewind_core::GameState>,
    cursor: usize,
}

impl Scrubber {
    /// Wraps a recording for scrubbing, starting with nothing applied.
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        Self {
            states: recording.states,
            cursor: 0,
        }
    }

    /// Index of the next state that has not been applied yet.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of states in the underlying recording.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the underlying recording has no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Moves the world to `target` (clamped to `[0, len]`).
    ///
    /// Forward scrubs apply each state's actions in recorded order;
    /// backward scrubs undo each state's actions in reverse, so entities
    /// that interacted on the same tick are unwound last-interacted-first.
    /// Scrubbing to the current cursor is a no-op. The cursor advances one
    /// state at a time, so an error leaves it on the boundary of the state
    /// that failed.
    pub fn scrub(&mut self, world: &mut World, target: usize) -> Result<(), DomainError> {
        let target = target.min(self.states.len());
        trace!(cursor = self.cursor, target, "scrub");
        while self.cursor < target {
            world.apply(&self.states[self.cursor].actions)?;
            self.cursor += 1;
        }
        while self.cursor > target {
            let reversed: Vec<Action> = self.states[self.cursor - 1]
                .actions
                .iter()
                .rev()
                .copied()
                .collect();
            world.undo(&reversed)?;
            self.cursor -= 1;
        }
        Ok(())
    }
}

/// Playback rate, clamped to the 1..=5 range the recorder UI exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackSpeed(u8);

impl PlaybackSpeed {
    /// Creates a speed, clamping out-of-range values into 1..=5.
    #[must_use]
    pub const fn new(speed: u8) -> Self {
        Self(if speed < 1 {
            1
        } else if speed > 5 {
            5
        } else {
            speed
        })
    }

    /// The numeric speed factor.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Time between transport steps: 1000/speed milliseconds.
    #[must_use]
    pub const fn period(&self) -> Duration {
        Duration::from_millis(1000 / self.0 as u64)
    }
}

/// Which way the transport walks the recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackDirection {
    /// Continuous play towards the end of the recording.
    Forward,
    /// Continuous rewind towards its start.
    Backward,
}

/// Everything the worker hands back when playback ends.
#[derive(Debug)]
pub struct TransportOutcome {
    /// The world, wherever playback left it.
    pub world: World,
    /// The scrubber, cursor included.
    pub scrubber: Scrubber,
    /// The first error a step produced, if any.
    pub result: Result<(), DomainError>,
}

/// Continuous play/rewind on a background worker.
///
/// The worker takes ownership of the world and the scrubber, which enforces
/// the single-writer rule by construction. It steps once per period, checks
/// the cooperative flag every iteration, and stops on its own at the
/// recording's boundary.
#[derive(Debug)]
pub struct Transport {
    running: Arc<AtomicBool>,
    positions: mpsc::Receiver<usize>,
    worker: thread::JoinHandle<(World, Scrubber, Result<(), DomainError>)>,
}

impl Transport {
    /// Starts continuous playback from the scrubber's current cursor.
    #[must_use]
    pub fn start(
        world: World,
        scrubber: Scrubber,
        direction: PlaybackDirection,
        speed: PlaybackSpeed,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let (sender, positions) = mpsc::channel();
        debug!(?direction, speed = speed.get(), "starting transport");
        let worker = thread::spawn(move || {
            let mut world = world;
            let mut scrubber = scrubber;
            let period = speed.period();
            let mut result = Ok(());
            while flag.load(Ordering::SeqCst) {
                let target = match direction {
                    PlaybackDirection::Forward => {
                        if scrubber.cursor() == scrubber.len() {
                            break;
                        }
                        scrubber.cursor() + 1
                    }
                    PlaybackDirection::Backward => {
                        if scrubber.cursor() == 0 {
                            break;
                        }
                        scrubber.cursor() - 1
                    }
                };
                if let Err(error) = scrubber.scrub(&mut world, target) {
                    result = Err(error);
                    break;
                }
                // The receiver may already be gone if the caller only
                // cares about the final outcome.
                let _ = sender.send(scrubber.cursor());
                thread::sleep(period);
            }
            (world, scrubber, result)
        });
        Self {
            running,
            positions,
            worker,
        }
    }

    /// The most recent cursor position the worker has reported, if it has
    /// stepped since the last call.
    #[must_use]
    pub fn latest_position(&self) -> Option<usize> {
        self.positions.try_iter().last()
    }

    /// Whether the worker has already stopped on its own, at a boundary or
    /// on a failed step.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Clears the cooperative flag, waits for the worker to finish its
    /// current step, and returns ownership of the world and scrubber.
    pub fn stop(self) -> TransportOutcome {
        self.running.store(false, Ordering::SeqCst);
        match self.worker.join() {
            Ok((world, scrubber, result)) => TransportOutcome {
                world,
                scrubber,
                result,
            },
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
