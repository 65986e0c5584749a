#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Rewind engine.
//!
//! This crate defines the value vocabulary that connects the authoritative
//! world, the recorder, and the replay scrubber. The world emits [`Action`]
//! values describing one entity's delta for one tick, the recorder batches
//! them into timestamp-grouped [`GameState`] values, and a [`Recording`] is
//! the ordered, persisted list of those groups that any replay tool can
//! consume. Everything serialized here is a bit-exact contract: the same
//! bytes must reconstruct the same history.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Location on the tile map expressed as signed column and row offsets.
///
/// Points are plain values; whether a point names a real cell is a question
/// for the world that owns the grid bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// The origin point.
    pub const ZERO: Point = Point::new(0, 0);

    /// Creates a new point from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the point.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the point.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Componentwise sum of this point and another.
    #[must_use]
    pub const fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Componentwise difference of this point and another.
    #[must_use]
    pub const fn subtract(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// The point one step from this one in the provided direction.
    #[must_use]
    pub const fn stepped(self, direction: Direction) -> Point {
        self.add(direction.unit_vector())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::subtract(self, rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Cardinal facing and movement directions available to entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector describing one step in this direction.
    #[must_use]
    pub const fn unit_vector(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Colors shared by keys and the doors they unlock.
///
/// `None` is the wire-level "no color" used by interactions that carry no
/// color payload; colored tiles reject it at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Absent color value.
    None,
    /// Red keys and doors.
    Red,
    /// Green keys and doors.
    Green,
    /// Blue keys and doors.
    Blue,
    /// Yellow keys and doors.
    Yellow,
}

/// Unique identifier assigned to an entity by the world's global counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    /// Creates a new entity identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Kinds of tile interaction an action can carry.
///
/// Each consuming kind owns an exact inverse procedure in the world's undo
/// path, because consumed tiles reset themselves to ground and the forward
/// action alone cannot reconstruct them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// No tile interaction happened in this action.
    None,
    /// A key tile was picked up.
    PickupKey,
    /// A treasure tile was picked up.
    PickupTreasure,
    /// A locked door was unlocked and consumed.
    UnlockDoor,
    /// The locked exit gate was unlocked and consumed.
    UnlockExit,
    /// An autonomous entity took its timer-driven step.
    Pinged,
}

/// Tile interaction recorded as part of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// The kind of interaction that occurred.
    pub action_type: ActionType,
    /// The color carried by the interaction, if any.
    pub color: Color,
}

impl Interaction {
    /// The empty interaction attached to plain movement actions.
    pub const NONE: Interaction = Interaction {
        action_type: ActionType::None,
        color: Color::None,
    };

    /// Creates an interaction from its parts.
    #[must_use]
    pub const fn new(action_type: ActionType, color: Color) -> Self {
        Self { action_type, color }
    }
}

/// One entity's delta for one tick.
///
/// Applying the action replays the move; undoing it restores the prior
/// position, facing, and any tile the interaction consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Identifier of the entity this action belongs to.
    pub entity: EntityId,
    /// The realized displacement of the move, including knock-on effects
    /// such as bounce pads, so negating it restores the starting cell.
    pub move_vector: Point,
    /// Direction the entity faced before the action.
    pub prev_direction: Direction,
    /// Direction the entity faces after the action.
    pub new_direction: Direction,
    /// The tile interaction, if any, that happened during the action.
    pub interaction: Interaction,
}

/// Ordered batch of actions sharing a single timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Position of this state within the recording, starting at zero.
    pub sequence_id: u32,
    /// Millisecond timestamp shared by every action in the batch.
    pub timestamp_ms: u64,
    /// Actions in arrival order.
    pub actions: Vec<Action>,
}

impl GameState {
    /// Creates an empty state opened at the provided timestamp.
    #[must_use]
    pub const fn open(sequence_id: u32, timestamp_ms: u64) -> Self {
        Self {
            sequence_id,
            timestamp_ms,
            actions: Vec::new(),
        }
    }
}

/// A full recorded session: the ordered list of game states for one level.
///
/// Append-only during capture, random access during replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// The level the session was recorded on.
    pub level: i32,
    /// Game states in capture order.
    pub states: Vec<GameState>,
}

#[cfg(test)]
mod tests {
    use super::{
        Action, ActionType, Color, Direction, EntityId, GameState, Interaction, Point, Recording,
    };
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn point_arithmetic_is_componentwise() {
        let a = Point::new(3, -2);
        let b = Point::new(-1, 5);
        assert_eq!(a + b, Point::new(2, 3));
        assert_eq!(a - b, Point::new(4, -7));
        assert_eq!(-a, Point::new(-3, 2));
        assert_eq!(a + Point::ZERO, a);
    }

    #[test]
    fn opposite_directions_cancel() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(
                direction.unit_vector() + direction.opposite().unit_vector(),
                Point::ZERO,
            );
        }
    }

    #[test]
    fn stepping_follows_unit_vectors() {
        let origin = Point::new(4, 4);
        assert_eq!(origin.stepped(Direction::Up), Point::new(4, 3));
        assert_eq!(origin.stepped(Direction::Down), Point::new(4, 5));
        assert_eq!(origin.stepped(Direction::Left), Point::new(3, 4));
        assert_eq!(origin.stepped(Direction::Right), Point::new(5, 4));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    fn sample_action() -> Action {
        Action {
            entity: EntityId::new(7),
            move_vector: Point::new(0, 1),
            prev_direction: Direction::Left,
            new_direction: Direction::Down,
            interaction: Interaction::new(ActionType::PickupKey, Color::Blue),
        }
    }

    #[test]
    fn action_round_trips_through_bincode() {
        assert_round_trip(&sample_action());
    }

    #[test]
    fn game_state_round_trips_through_bincode() {
        let state = GameState {
            sequence_id: 3,
            timestamp_ms: 4200,
            actions: vec![sample_action()],
        };
        assert_round_trip(&state);
    }

    #[test]
    fn recording_round_trips_through_bincode() {
        let mut state = GameState::open(0, 1000);
        state.actions.push(sample_action());
        let recording = Recording {
            level: 2,
            states: vec![state],
        };
        assert_round_trip(&recording);
    }

    #[test]
    fn entity_id_round_trips_through_bincode() {
        assert_round_trip(&EntityId::new(42));
    }

    #[test]
    fn interaction_none_carries_no_color() {
        assert_eq!(Interaction::NONE.action_type, ActionType::None);
        assert_eq!(Interaction::NONE.color, Color::None);
    }
}
