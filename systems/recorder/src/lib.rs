#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Batches drained actions into the timestamped, append-only action log.
//!
//! Actions arriving with the same timestamp belong to the same tick and
//! stay grouped in one [`GameState`]; a new timestamp seals the open state
//! and opens the next one. The resulting [`Recording`] is the bit-exact
//! input to replay.

use tracing::trace;

use maze_rewind_core::{Action, GameState, Recording};

/// Captures an ordered action log for one level run.
#[derive(Debug)]
pub struct Recorder {
    level: i32,
    sealed: Vec<GameState>,
    open: GameState,
}

impl Recorder {
    /// Starts a recording for a level, opening state 0 at the provided
    /// start timestamp.
    #[must_use]
    pub fn new(level: i32, start_ms: u64) -> Self {
        Self {
            level,
            sealed: Vec::new(),
            open: GameState::open(0, start_ms),
        }
    }

    /// The level this recording belongs to.
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.level
    }

    /// Appends an action, sealing the open state first whenever the
    /// timestamp has moved on since it was opened.
    pub fn add_action(&mut self, action: Action, timestamp_ms: u64) {
        if self.open.timestamp_ms != timestamp_ms {
            let sequence_id = self.sealed.len() as u32 + 1;
            let sealed = std::mem::replace(&mut self.open, GameState::open(sequence_id, timestamp_ms));
            trace!(
                sequence_id = sealed.sequence_id,
                actions = sealed.actions.len(),
                "sealed game state"
            );
            self.sealed.push(sealed);
        }
        self.open.actions.push(action);
    }

    /// Number of states the recording currently spans, counting the open
    /// one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sealed.len() + 1
    }

    /// A recording always spans at least the open state.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The sealed states captured so far, oldest first.
    #[must_use]
    pub fn sealed_states(&self) -> &[GameState] {
        &self.sealed
    }

    /// Finishes the capture: seals the open state and hands over the full
    /// ordered log.
    #[must_use]
    pub fn into_recording(mut self) -> Recording {
        self.sealed.push(self.open);
        Recording {
            level: self.level,
            states: self.sealed,
        }
    }
}
