#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state for Maze Rewind.
//!
//! The world owns the tile grid, the global counters, and every entity, and
//! is the single writer for all of them. Mutation happens through the
//! operations here; tile side effects run inside the player notification
//! dispatch, and every acting entity buffers at most one [`Action`] that
//! `drain_changes` hands to the recorder. `apply` and `undo` feed recorded
//! actions back through the same machinery, which is what makes replay
//! bit-exact.

use std::collections::VecDeque;

use thiserror::Error;
use tracing::{debug, trace};

use maze_rewind_core::{Action, ActionType, Color, Direction, EntityId, Interaction, Point};

pub mod observer;
pub mod registry;
pub mod tiles;

mod entity;

pub use entity::{Enemy, EnemyKind, EntityState, Player};
pub use observer::{SubscriptionHandle, Subscriptions};
pub use tiles::{Tile, TileKind};

/// Errors produced by world operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input: bad dimensions, bad colors, misplaced tiles.
    /// Fatal to the calling operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A move onto an off-grid or obstructive cell. Recoverable: callers
    /// may fall back to turning in place.
    #[error("cannot move from {from:?} to {to:?}")]
    InvalidMove {
        /// Where the entity stood.
        from: Point,
        /// The rejected destination.
        to: Point,
    },
    /// An internal counter or invariant went wrong. Indicates a logic bug
    /// and must not be swallowed.
    #[error("illegal state: {0}")]
    IllegalState(String),
    /// An action referenced an entity this world does not contain. A
    /// foreign recording must not be allowed to desynchronize state.
    #[error("no entity with id {entity:?}")]
    NotFound {
        /// The unknown id.
        entity: EntityId,
    },
}

/// What a player-channel subscription watches.
#[derive(Clone, Copy, Debug)]
enum Watcher {
    /// The stateful tile installed at this grid position.
    Tile(Point),
    /// An enemy's collision check against the player.
    Enemy(EntityId),
}

/// Reaction data copied out of a tile before the grid is mutated.
#[derive(Clone, Copy)]
enum TileReaction {
    Key(Color),
    Door(Color),
    ExitGate,
    Treasure,
    Hazard,
    Bounce(Direction),
}

/// The tile map, counters, and entities of one level in play.
#[derive(Debug)]
pub struct World {
    columns: i32,
    rows: i32,
    tiles: Vec<Tile>,
    treasures_left: u32,
    next_level: i32,
    lost: bool,
    unclaimed_interactions: VecDeque<Interaction>,
    next_entity_id: u32,
    player: Player,
    enemies: Vec<Enemy>,
    player_watchers: Subscriptions<Watcher>,
}

impl World {
    /// Creates a fresh world: an all-ground grid of the requested
    /// dimensions, the player at (0,0) facing down with id 0, no enemies,
    /// and reset counters. The loader overlays specific tiles afterwards.
    ///
    /// Fails with [`DomainError::InvalidArgument`] on non-positive extents.
    pub fn generate(dimensions: Point, treasures: u32, next_level: i32) -> Result<Self, DomainError> {
        if dimensions.x() <= 0 || dimensions.y() <= 0 {
            return Err(DomainError::InvalidArgument(format!(
                "map dimensions must be positive, got {dimensions:?}"
            )));
        }
        let columns = dimensions.x();
        let rows = dimensions.y();
        let mut tiles = Vec::with_capacity((columns * rows) as usize);
        for y in 0..rows {
            for x in 0..columns {
                tiles.push(Tile::ground(Point::new(x, y)));
            }
        }
        debug!(columns, rows, treasures, next_level, "generated world");
        Ok(Self {
            columns,
            rows,
            tiles,
            treasures_left: treasures,
            next_level,
            lost: false,
            unclaimed_interactions: VecDeque::new(),
            next_entity_id: 1,
            player: Player::new(EntityId::new(0), Point::ZERO, Direction::Down),
            enemies: Vec::new(),
            player_watchers: Subscriptions::new(),
        })
    }

    /// Width and height of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> Point {
        Point::new(self.columns, self.rows)
    }

    /// Whether the point names a cell of this grid.
    #[must_use]
    pub const fn in_bounds(&self, position: Point) -> bool {
        position.x() >= 0 && position.x() < self.columns && position.y() >= 0 && position.y() < self.rows
    }

    fn index(&self, position: Point) -> usize {
        (position.y() * self.columns + position.x()) as usize
    }

    /// The tile occupying a cell.
    pub fn tile(&self, position: Point) -> Result<&Tile, DomainError> {
        if !self.in_bounds(position) {
            return Err(DomainError::InvalidArgument(format!(
                "{position:?} is outside the grid"
            )));
        }
        Ok(&self.tiles[self.index(position)])
    }

    /// Replaces the tile at a cell.
    ///
    /// The previous occupant's deletion hook runs first, releasing its
    /// player-channel subscription; the replacement is wired if its kind
    /// reacts to the player. After the call the old tile holds no live
    /// subscription.
    pub fn set_tile(&mut self, position: Point, tile: Tile) -> Result<(), DomainError> {
        if !self.in_bounds(position) {
            return Err(DomainError::InvalidArgument(format!(
                "{position:?} is outside the grid"
            )));
        }
        if tile.position() != position {
            return Err(DomainError::InvalidArgument(format!(
                "tile carries position {:?} but is being placed at {position:?}",
                tile.position()
            )));
        }
        let index = self.index(position);
        if let Some(handle) = self.tiles[index].unwire() {
            let _ = self.player_watchers.unsubscribe(handle);
        }
        self.tiles[index] = tile;
        if self.tiles[index].reacts_to_player() {
            let handle = self.player_watchers.subscribe(Watcher::Tile(position));
            self.tiles[index].wire(handle);
        }
        Ok(())
    }

    /// Replaces the tile at a cell with plain ground.
    pub fn reset_tile(&mut self, position: Point) -> Result<(), DomainError> {
        self.set_tile(position, Tile::ground(position))
    }

    /// Number of treasures still on the map.
    #[must_use]
    pub const fn treasures_left(&self) -> u32 {
        self.treasures_left
    }

    /// Decrements the treasure counter.
    ///
    /// Fails with [`DomainError::IllegalState`] on underflow: collecting a
    /// treasure that was never counted is a logic bug.
    pub fn collect_treasure(&mut self) -> Result<(), DomainError> {
        self.treasures_left = self.treasures_left.checked_sub(1).ok_or_else(|| {
            DomainError::IllegalState("treasure collected with none left to collect".to_owned())
        })?;
        Ok(())
    }

    /// Increments the treasure counter (the inverse of a pickup).
    pub fn add_treasure(&mut self) {
        self.treasures_left += 1;
    }

    /// Identifier of the level that follows this one; -1 marks the final
    /// level.
    #[must_use]
    pub const fn next_level(&self) -> i32 {
        self.next_level
    }

    /// The player entity.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Every enemy, in spawn order.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Spawns an enemy and wires its collision watcher onto the player
    /// channel. Part of the load-time contract.
    pub fn spawn_enemy(
        &mut self,
        position: Point,
        facing: Direction,
        kind: EnemyKind,
        speed: u32,
    ) -> Result<EntityId, DomainError> {
        if !self.in_bounds(position) {
            return Err(DomainError::InvalidArgument(format!(
                "cannot spawn an enemy at {position:?}, outside the grid"
            )));
        }
        let id = EntityId::new(self.next_entity_id);
        self.next_entity_id += 1;
        let _ = self.player_watchers.subscribe(Watcher::Enemy(id));
        self.enemies.push(Enemy::new(id, position, facing, kind, speed));
        debug!(?id, ?position, ?facing, "spawned enemy");
        Ok(id)
    }

    /// Places the player without movement validation. Load-time contract;
    /// notifies the player channel once settled.
    pub fn set_player_position(&mut self, position: Point) -> Result<(), DomainError> {
        if !self.in_bounds(position) {
            return Err(DomainError::InvalidArgument(format!(
                "cannot place the player at {position:?}, outside the grid"
            )));
        }
        self.player.state.position = position;
        self.notify_player_watchers()
    }

    /// Turns the player in place. The fallback when a move is rejected.
    pub fn set_player_direction(&mut self, direction: Direction) -> Result<(), DomainError> {
        self.player.state.facing = direction;
        self.notify_player_watchers()
    }

    /// Grants the player a key and notifies the channel, so locked doors
    /// recompute their obstruction.
    pub fn add_player_key(&mut self, color: Color) -> Result<(), DomainError> {
        self.player.add_key(color)?;
        self.notify_player_watchers()
    }

    /// Removes one key of the color from the player and notifies the
    /// channel.
    pub fn consume_player_key(&mut self, color: Color) -> Result<(), DomainError> {
        self.player.consume_key(color)?;
        self.notify_player_watchers()
    }

    /// Empties the player's inventory and notifies the channel.
    pub fn reset_player_items(&mut self) -> Result<(), DomainError> {
        self.player.reset_items();
        self.notify_player_watchers()
    }

    /// The player's primary input-driven operation: face the direction,
    /// step one cell that way, then record the resulting [`Action`] in the
    /// player's pending slot with at most one drained interaction.
    ///
    /// Fails with [`DomainError::InvalidMove`] when the step is blocked;
    /// nothing changes in that case, so callers may fall back to
    /// [`World::set_player_direction`].
    pub fn move_player_turning(&mut self, direction: Direction) -> Result<(), DomainError> {
        let from = self.player.state().position();
        let to = from.stepped(direction);
        self.ensure_walkable(from, to)?;
        let prev_direction = self.player.state().facing();
        // Position and facing settle together; tile callbacks never see a
        // half-updated player.
        self.player.state.position = to;
        self.player.state.facing = direction;
        self.notify_player_watchers()?;
        // Tile callbacks may have moved the player further, so the
        // recorded vector is read back from where the burst settled;
        // undoing it restores the starting cell in a single step.
        let settled = self.player.state().position();
        let new_direction = self.player.state().facing();
        let interaction = self
            .unclaimed_interactions
            .pop_front()
            .unwrap_or(Interaction::NONE);
        let action = Action {
            entity: self.player.state().id(),
            move_vector: settled.subtract(from),
            prev_direction,
            new_direction,
            interaction,
        };
        trace!(?action, "player moved");
        self.player.state.pending = Some(action);
        Ok(())
    }

    /// Sets an entity's facing without notifying. Replay and load-time
    /// primitive; live player turns go through
    /// [`World::set_player_direction`].
    pub fn set_entity_direction(
        &mut self,
        entity: EntityId,
        direction: Direction,
    ) -> Result<(), DomainError> {
        self.entity_state_mut(entity)?.facing = direction;
        Ok(())
    }

    /// Moves an entity by a vector, validating the destination, then
    /// notifies the player channel if the entity was the player.
    pub fn move_entity(&mut self, entity: EntityId, vector: Point) -> Result<(), DomainError> {
        let from = self.entity_position(entity)?;
        let to = from.add(vector);
        self.ensure_walkable(from, to)?;
        let player_position = self.player.state().position();
        let is_player = entity == self.player.state().id();
        self.entity_state_mut(entity)?.position = to;
        if is_player {
            self.notify_player_watchers()?;
        } else if to == player_position {
            self.lost = true;
        }
        Ok(())
    }

    /// Where an entity currently stands.
    pub fn entity_position(&self, entity: EntityId) -> Result<Point, DomainError> {
        if entity == self.player.state().id() {
            return Ok(self.player.state().position());
        }
        self.enemies
            .iter()
            .find(|enemy| enemy.state().id() == entity)
            .map(|enemy| enemy.state().position())
            .ok_or(DomainError::NotFound { entity })
    }

    /// Advances an enemy one deterministic step and records a `Pinged`
    /// action with the realized delta.
    ///
    /// A patrol steps in its facing direction, propagating
    /// [`DomainError::InvalidMove`] when blocked; if the cell beyond the
    /// landing cell is then obstructive it reverses facing, and stepping
    /// onto the player loses the game.
    pub fn ping(&mut self, entity: EntityId) -> Result<(), DomainError> {
        let index = self.enemy_index(entity)?;
        match self.enemies[index].kind() {
            EnemyKind::Patrol => self.ping_patrol(index),
        }
    }

    /// The structural inverse of [`World::ping`]: re-derives whether the
    /// facing was reversed from the obstruction behind the enemy, then
    /// steps back. Assumes the grid has not changed since the forward step.
    pub fn unping(&mut self, entity: EntityId) -> Result<(), DomainError> {
        let index = self.enemy_index(entity)?;
        match self.enemies[index].kind() {
            EnemyKind::Patrol => self.unping_patrol(index),
        }
    }

    fn enemy_index(&self, entity: EntityId) -> Result<usize, DomainError> {
        self.enemies
            .iter()
            .position(|enemy| enemy.state().id() == entity)
            .ok_or(DomainError::NotFound { entity })
    }

    fn ping_patrol(&mut self, index: usize) -> Result<(), DomainError> {
        let from = self.enemies[index].state().position();
        let facing = self.enemies[index].state().facing();
        let to = from.stepped(facing);
        self.ensure_walkable(from, to)?;
        let new_facing = if self.blocks_entry(to.stepped(facing)) {
            facing.opposite()
        } else {
            facing
        };
        let player_position = self.player.state().position();
        let entity = self.enemies[index].state().id();
        let state = &mut self.enemies[index].state;
        state.position = to;
        state.facing = new_facing;
        state.pending = Some(Action {
            entity,
            move_vector: to.subtract(from),
            prev_direction: facing,
            new_direction: new_facing,
            interaction: Interaction::new(ActionType::Pinged, Color::None),
        });
        if to == player_position {
            self.lost = true;
        }
        trace!(?entity, ?to, ?new_facing, "patrol pinged");
        Ok(())
    }

    fn unping_patrol(&mut self, index: usize) -> Result<(), DomainError> {
        let position = self.enemies[index].state().position();
        let facing = self.enemies[index].state().facing();
        // The forward step reversed facing exactly when the cell it now
        // faces away from was obstructive, so an obstruction behind the
        // current facing means the flip must be undone first.
        let restored_facing = if self.blocks_entry(position.subtract(facing.unit_vector())) {
            facing.opposite()
        } else {
            facing
        };
        let to = position.subtract(restored_facing.unit_vector());
        self.ensure_walkable(position, to)?;
        let player_position = self.player.state().position();
        let entity = self.enemies[index].state().id();
        let state = &mut self.enemies[index].state;
        state.position = to;
        state.facing = restored_facing;
        if to == player_position {
            self.lost = true;
        }
        trace!(?entity, ?to, ?restored_facing, "patrol unpinged");
        Ok(())
    }

    /// Collects every pending action, enemies in spawn order first and the
    /// player last, clearing each slot. The only way actions leave the
    /// world: an action drained here can never be drained again.
    pub fn drain_changes(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        for enemy in &mut self.enemies {
            if let Some(action) = enemy.state.poll_action() {
                actions.push(action);
            }
        }
        if let Some(action) = self.player.state.poll_action() {
            actions.push(action);
        }
        actions
    }

    /// Replays recorded actions in list order.
    ///
    /// A `Pinged` action re-invokes [`World::ping`] rather than replaying
    /// the stored vector, because enemy behavior branches on current
    /// obstruction; anything else sets the entity's direction and moves it
    /// by the recorded vector, letting tile reactions re-derive their side
    /// effects.
    pub fn apply(&mut self, actions: &[Action]) -> Result<(), DomainError> {
        debug!(count = actions.len(), "applying actions");
        for action in actions {
            trace!(?action, "apply");
            if action.interaction.action_type == ActionType::Pinged {
                self.ping(action.entity)?;
            } else {
                self.set_entity_direction(action.entity, action.new_direction)?;
                self.move_entity(action.entity, action.move_vector)?;
            }
        }
        Ok(())
    }

    /// Reverses recorded actions in the given list's order; callers pass
    /// them reverse-chronologically.
    ///
    /// Consuming tiles are destructive, so each interaction kind owns the
    /// exact inverse that reconstructs the tile it destroyed.
    pub fn undo(&mut self, actions: &[Action]) -> Result<(), DomainError> {
        debug!(count = actions.len(), "undoing actions");
        for action in actions {
            trace!(?action, "undo");
            if action.interaction.action_type == ActionType::Pinged {
                self.unping(action.entity)?;
                continue;
            }
            self.set_entity_direction(action.entity, action.prev_direction)?;
            self.move_entity(action.entity, -action.move_vector)?;
            // The consumed tile sat where the recorded vector landed;
            // re-create it after the entity has left it, so the restoration
            // does not immediately re-trigger the pickup.
            let tile_position = self
                .entity_position(action.entity)?
                .add(action.move_vector);
            let color = action.interaction.color;
            match action.interaction.action_type {
                ActionType::None | ActionType::Pinged => {}
                ActionType::PickupKey => {
                    self.set_tile(tile_position, Tile::key(tile_position, color)?)?;
                    self.consume_player_key(color)?;
                }
                ActionType::PickupTreasure => {
                    self.set_tile(tile_position, Tile::treasure(tile_position))?;
                    self.add_treasure();
                }
                ActionType::UnlockDoor => {
                    self.set_tile(tile_position, Tile::locked_door(tile_position, color)?)?;
                    self.add_player_key(color)?;
                }
                ActionType::UnlockExit => {
                    self.set_tile(tile_position, Tile::locked_exit(tile_position))?;
                }
            }
        }
        Ok(())
    }

    /// Whether the player stands on the level exit.
    #[must_use]
    pub fn game_won(&self) -> bool {
        let index = self.index(self.player.state().position());
        matches!(self.tiles[index].kind(), TileKind::Exit)
    }

    /// Whether this is the final level.
    #[must_use]
    pub const fn game_complete(&self) -> bool {
        self.next_level == -1
    }

    /// Whether a hazard or enemy contact has lost the game. Never cleared
    /// once set.
    #[must_use]
    pub const fn is_game_lost(&self) -> bool {
        self.lost
    }

    /// Row-major single-character serialization of the grid, each row
    /// terminated by a newline. The canonical state fingerprint.
    #[must_use]
    pub fn grid_string(&self) -> String {
        let mut out = String::with_capacity(((self.columns + 1) * self.rows) as usize);
        for y in 0..self.rows {
            for x in 0..self.columns {
                out.push(self.tiles[self.index(Point::new(x, y))].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn blocks_entry(&self, position: Point) -> bool {
        !self.in_bounds(position) || self.tiles[self.index(position)].is_obstructive()
    }

    fn ensure_walkable(&self, from: Point, to: Point) -> Result<(), DomainError> {
        if self.blocks_entry(to) {
            return Err(DomainError::InvalidMove { from, to });
        }
        Ok(())
    }

    fn entity_state_mut(&mut self, entity: EntityId) -> Result<&mut EntityState, DomainError> {
        if entity == self.player.state().id() {
            return Ok(&mut self.player.state);
        }
        self.enemies
            .iter_mut()
            .find(|enemy| enemy.state().id() == entity)
            .map(|enemy| &mut enemy.state)
            .ok_or(DomainError::NotFound { entity })
    }

    /// Dispatches one notification burst over a snapshot of the player
    /// channel, most recent subscriber first.
    fn notify_player_watchers(&mut self) -> Result<(), DomainError> {
        for (handle, watcher) in self.player_watchers.snapshot_rev() {
            match watcher {
                Watcher::Enemy(id) => {
                    let player_position = self.player.state().position();
                    if self
                        .enemies
                        .iter()
                        .any(|enemy| enemy.state().id() == id && enemy.state().position() == player_position)
                    {
                        self.lost = true;
                    }
                }
                Watcher::Tile(position) => self.react_tile(handle, position)?,
            }
        }
        Ok(())
    }

    fn react_tile(&mut self, handle: SubscriptionHandle, position: Point) -> Result<(), DomainError> {
        let index = self.index(position);
        // A burst can outlive the tile that subscribed: the snapshot was
        // taken before earlier reactions rewrote the grid. Only the tile
        // the handle was issued to may react.
        if self.tiles[index].subscription() != Some(handle) {
            return Ok(());
        }
        let stood_on = self.player.state().position() == position;
        let reaction = match self.tiles[index].kind() {
            TileKind::Key { color } => TileReaction::Key(*color),
            TileKind::LockedDoor { color } => TileReaction::Door(*color),
            TileKind::LockedExit => TileReaction::ExitGate,
            TileKind::Treasure => TileReaction::Treasure,
            TileKind::MilkPuddle => TileReaction::Hazard,
            TileKind::BouncyPad { direction } => TileReaction::Bounce(*direction),
            TileKind::Ground | TileKind::Wall | TileKind::Exit | TileKind::Info { .. } => {
                return Ok(())
            }
        };
        match reaction {
            TileReaction::Key(color) => {
                if stood_on {
                    self.reset_tile(position)?;
                    self.player.add_key(color)?;
                    self.notify_player_watchers()?;
                    self.unclaimed_interactions
                        .push_back(Interaction::new(ActionType::PickupKey, color));
                }
            }
            TileReaction::Door(color) => {
                let holds_key = self.player.has_key(color);
                self.tiles[index].set_obstructive(!holds_key);
                if stood_on {
                    self.reset_tile(position)?;
                    self.player.consume_key(color)?;
                    self.notify_player_watchers()?;
                    self.unclaimed_interactions
                        .push_back(Interaction::new(ActionType::UnlockDoor, color));
                }
            }
            TileReaction::ExitGate => {
                self.tiles[index].set_obstructive(self.treasures_left != 0);
                if stood_on {
                    self.reset_tile(position)?;
                    self.unclaimed_interactions
                        .push_back(Interaction::new(ActionType::UnlockExit, Color::None));
                }
            }
            TileReaction::Treasure => {
                if stood_on {
                    self.collect_treasure()?;
                    self.reset_tile(position)?;
                    self.unclaimed_interactions
                        .push_back(Interaction::new(ActionType::PickupTreasure, Color::None));
                }
            }
            TileReaction::Hazard => {
                if stood_on {
                    debug!(?position, "player stepped into a hazard");
                    self.lost = true;
                }
            }
            TileReaction::Bounce(direction) => {
                if stood_on {
                    let target = position
                        .stepped(direction)
                        .stepped(direction);
                    // A pad aimed at an obstruction leaves the player on it.
                    if !self.blocks_entry(target) {
                        self.player.state.position = target;
                        self.player.state.facing = direction;
                        self.notify_player_watchers()?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Read-only views over a world, for renderers and the save writer.
pub mod query {
    use maze_rewind_core::{Color, Direction, EntityId, Point};

    use crate::entity::EnemyKind;
    use crate::tiles::Tile;
    use crate::World;

    /// Snapshot of the player for consumers outside the world.
    #[derive(Clone, Debug)]
    pub struct PlayerView {
        /// Current grid position.
        pub position: Point,
        /// Current facing.
        pub facing: Direction,
        /// Held key colors in collection order.
        pub keys: Vec<Color>,
    }

    /// Snapshot of one enemy.
    #[derive(Clone, Debug)]
    pub struct EnemyView {
        /// The enemy's identifier.
        pub id: EntityId,
        /// Current grid position.
        pub position: Point,
        /// Current facing.
        pub facing: Direction,
        /// Behavioral variant.
        pub kind: EnemyKind,
        /// Tick interval in milliseconds.
        pub speed: u32,
    }

    /// Captures the player's pose and inventory.
    #[must_use]
    pub fn player_view(world: &World) -> PlayerView {
        PlayerView {
            position: world.player().state().position(),
            facing: world.player().state().facing(),
            keys: world.player().keys().to_vec(),
        }
    }

    /// Captures every enemy, ordered by id for deterministic output.
    #[must_use]
    pub fn enemy_views(world: &World) -> Vec<EnemyView> {
        let mut views: Vec<EnemyView> = world
            .enemies()
            .iter()
            .map(|enemy| EnemyView {
                id: enemy.state().id(),
                position: enemy.state().position(),
                facing: enemy.state().facing(),
                kind: enemy.kind(),
                speed: enemy.speed(),
            })
            .collect();
        views.sort_by_key(|view| view.id);
        views
    }

    /// Iterates every tile in row-major order.
    pub fn tiles(world: &World) -> impl Iterator<Item = &Tile> {
        world.tiles.iter()
    }

    /// Row-major grid serialization, as [`World::grid_string`].
    #[must_use]
    pub fn grid_string(world: &World) -> String {
        world.grid_string()
    }

    /// Width and height of the grid.
    #[must_use]
    pub fn dimensions(world: &World) -> Point {
        world.dimensions()
    }
}
