//! Movable actors: the player and timer-driven enemies.
//!
//! Entities here are pure state; movement, notification, and action
//! recording live on the world because tile reactions need the whole world
//! to run. Each entity carries at most one pending [`Action`] between the
//! moment it acts and the tick's `drain_changes` call.

use maze_rewind_core::{Action, Color, Direction, EntityId, Point};

use crate::DomainError;

/// State shared by every movable entity.
#[derive(Clone, Debug)]
pub struct EntityState {
    pub(crate) id: EntityId,
    pub(crate) position: Point,
    pub(crate) facing: Direction,
    pub(crate) pending: Option<Action>,
}

impl EntityState {
    pub(crate) const fn new(id: EntityId, position: Point, facing: Direction) -> Self {
        Self {
            id,
            position,
            facing,
            pending: None,
        }
    }

    /// The identifier assigned to this entity at construction.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// The grid position the entity currently occupies.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// The direction the entity currently faces.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.facing
    }

    /// Whether the entity holds an undrained action.
    #[must_use]
    pub const fn has_action(&self) -> bool {
        self.pending.is_some()
    }

    /// Atomically reads and clears the pending action slot.
    pub fn poll_action(&mut self) -> Option<Action> {
        self.pending.take()
    }
}

/// The entity driven by user input, with an inventory of collected keys.
#[derive(Clone, Debug)]
pub struct Player {
    pub(crate) state: EntityState,
    keys: Vec<Color>,
}

impl Player {
    pub(crate) const fn new(id: EntityId, position: Point, facing: Direction) -> Self {
        Self {
            state: EntityState::new(id, position, facing),
            keys: Vec::new(),
        }
    }

    /// Shared entity state (id, position, facing, pending action).
    #[must_use]
    pub const fn state(&self) -> &EntityState {
        &self.state
    }

    /// Whether the player holds at least one key of the provided color.
    #[must_use]
    pub fn has_key(&self, color: Color) -> bool {
        self.keys.contains(&color)
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Every held key color, in collection order. Duplicates are meaningful:
    /// the inventory is a multiset.
    #[must_use]
    pub fn keys(&self) -> &[Color] {
        &self.keys
    }

    pub(crate) fn add_key(&mut self, color: Color) -> Result<(), DomainError> {
        if color == Color::None {
            return Err(DomainError::InvalidArgument(
                "cannot add a key without a color".to_owned(),
            ));
        }
        self.keys.push(color);
        Ok(())
    }

    pub(crate) fn consume_key(&mut self, color: Color) -> Result<(), DomainError> {
        if color == Color::None {
            return Err(DomainError::InvalidArgument(
                "cannot consume a key without a color".to_owned(),
            ));
        }
        let index = self.keys.iter().position(|held| *held == color).ok_or_else(|| {
            DomainError::InvalidArgument(format!("player does not hold a {color:?} key"))
        })?;
        let _ = self.keys.remove(index);
        Ok(())
    }

    pub(crate) fn reset_items(&mut self) {
        self.keys.clear();
    }
}

/// Behavioral variant of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Walks straight ahead and turns around one step before an obstruction.
    Patrol,
}

/// An autonomous entity advanced by the tick scheduler.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub(crate) state: EntityState,
    kind: EnemyKind,
    speed: u32,
}

impl Enemy {
    pub(crate) const fn new(
        id: EntityId,
        position: Point,
        facing: Direction,
        kind: EnemyKind,
        speed: u32,
    ) -> Self {
        Self {
            state: EntityState::new(id, position, facing),
            kind,
            speed,
        }
    }

    /// Shared entity state (id, position, facing, pending action).
    #[must_use]
    pub const fn state(&self) -> &EntityState {
        &self.state
    }

    /// The enemy's behavioral variant.
    #[must_use]
    pub const fn kind(&self) -> EnemyKind {
        self.kind
    }

    /// Tick interval: how often the scheduler should ping this enemy,
    /// in milliseconds.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityState, Player};
    use maze_rewind_core::{
        Action, Color, Direction, EntityId, Interaction, Point,
    };

    #[test]
    fn poll_action_clears_the_slot() {
        let mut state = EntityState::new(EntityId::new(3), Point::ZERO, Direction::Down);
        assert!(!state.has_action());

        state.pending = Some(Action {
            entity: EntityId::new(3),
            move_vector: Point::new(1, 0),
            prev_direction: Direction::Down,
            new_direction: Direction::Right,
            interaction: Interaction::NONE,
        });
        assert!(state.has_action());

        let drained = state.poll_action();
        assert!(drained.is_some());
        assert!(!state.has_action());
        assert!(state.poll_action().is_none());
    }

    #[test]
    fn key_inventory_is_a_multiset() {
        let mut player = Player::new(EntityId::new(0), Point::ZERO, Direction::Down);
        player.add_key(Color::Blue).expect("add");
        player.add_key(Color::Blue).expect("add");
        player.add_key(Color::Red).expect("add");

        assert_eq!(player.key_count(), 3);
        assert!(player.has_key(Color::Blue));

        player.consume_key(Color::Blue).expect("consume");
        assert!(player.has_key(Color::Blue), "one blue key must remain");
        assert_eq!(player.key_count(), 2);
    }

    #[test]
    fn consuming_an_absent_key_fails() {
        let mut player = Player::new(EntityId::new(0), Point::ZERO, Direction::Down);
        assert!(player.consume_key(Color::Yellow).is_err());
    }

    #[test]
    fn the_empty_color_is_rejected() {
        let mut player = Player::new(EntityId::new(0), Point::ZERO, Direction::Down);
        assert!(player.add_key(Color::None).is_err());
        assert!(player.consume_key(Color::None).is_err());
    }

    #[test]
    fn reset_items_clears_the_inventory() {
        let mut player = Player::new(EntityId::new(0), Point::ZERO, Direction::Down);
        player.add_key(Color::Green).expect("add");
        player.reset_items();
        assert_eq!(player.key_count(), 0);
    }
}
