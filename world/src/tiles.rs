//! Tile variants that make up the grid.
//!
//! A tile is data plus a wiring slot: stateful kinds are subscribed to the
//! player channel when installed into the grid and unwired by the deletion
//! hook when replaced. The behavioral side effects live in the world's
//! dispatch, which is the only place holding the mutable borrow a reaction
//! needs.

use maze_rewind_core::{Color, Direction, Point};

use crate::observer::SubscriptionHandle;
use crate::DomainError;

/// A single cell of the tile map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    position: Point,
    obstructive: bool,
    kind: TileKind,
    subscription: Option<SubscriptionHandle>,
}

/// The behavioral variant a tile belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileKind {
    /// Plain walkable ground.
    Ground,
    /// Obstructs every entity.
    Wall,
    /// Ends the level when the player stands here.
    Exit,
    /// Displays a message while the player stands here.
    Info {
        /// Text shown to the player.
        text: String,
    },
    /// A collectible key of a specific color.
    Key {
        /// Color of the key; never [`Color::None`].
        color: Color,
    },
    /// Obstructs the player until they hold a key of the matching color.
    LockedDoor {
        /// Color of the matching key; never [`Color::None`].
        color: Color,
    },
    /// Obstructs the player until every treasure has been collected.
    LockedExit,
    /// A collectible treasure counted by the world.
    Treasure,
    /// A hazard that sets the lost flag when stood upon.
    MilkPuddle,
    /// Launches the player two cells further along its direction.
    BouncyPad {
        /// Direction the player is bounced in.
        direction: Direction,
    },
}

impl Tile {
    const fn with_kind(position: Point, obstructive: bool, kind: TileKind) -> Self {
        Self {
            position,
            obstructive,
            kind,
            subscription: None,
        }
    }

    /// Plain ground at the provided position.
    #[must_use]
    pub const fn ground(position: Point) -> Self {
        Self::with_kind(position, false, TileKind::Ground)
    }

    /// A wall at the provided position.
    #[must_use]
    pub const fn wall(position: Point) -> Self {
        Self::with_kind(position, true, TileKind::Wall)
    }

    /// The level exit at the provided position.
    #[must_use]
    pub const fn exit(position: Point) -> Self {
        Self::with_kind(position, false, TileKind::Exit)
    }

    /// An information marker carrying the provided text.
    #[must_use]
    pub const fn info(position: Point, text: String) -> Self {
        Self::with_kind(position, false, TileKind::Info { text })
    }

    /// A key of the provided color.
    ///
    /// Fails with [`DomainError::InvalidArgument`] for [`Color::None`].
    pub fn key(position: Point, color: Color) -> Result<Self, DomainError> {
        require_color(color)?;
        Ok(Self::with_kind(position, false, TileKind::Key { color }))
    }

    /// A locked door matching keys of the provided color.
    ///
    /// Fails with [`DomainError::InvalidArgument`] for [`Color::None`].
    pub fn locked_door(position: Point, color: Color) -> Result<Self, DomainError> {
        require_color(color)?;
        Ok(Self::with_kind(
            position,
            true,
            TileKind::LockedDoor { color },
        ))
    }

    /// The exit gate that opens once all treasures are collected.
    #[must_use]
    pub const fn locked_exit(position: Point) -> Self {
        Self::with_kind(position, true, TileKind::LockedExit)
    }

    /// A collectible treasure.
    #[must_use]
    pub const fn treasure(position: Point) -> Self {
        Self::with_kind(position, false, TileKind::Treasure)
    }

    /// A hazard that loses the game when stood upon.
    #[must_use]
    pub const fn milk_puddle(position: Point) -> Self {
        Self::with_kind(position, false, TileKind::MilkPuddle)
    }

    /// A bounce pad launching the player along the provided direction.
    #[must_use]
    pub const fn bouncy_pad(position: Point, direction: Direction) -> Self {
        Self::with_kind(position, false, TileKind::BouncyPad { direction })
    }

    /// The grid position this tile occupies.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Whether entities are currently barred from entering this tile.
    #[must_use]
    pub const fn is_obstructive(&self) -> bool {
        self.obstructive
    }

    /// The behavioral variant of this tile.
    #[must_use]
    pub const fn kind(&self) -> &TileKind {
        &self.kind
    }

    /// Single-character marker used by the grid string serialization.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self.kind {
            TileKind::Ground => 'G',
            TileKind::Wall => 'W',
            TileKind::Info { .. } => 'I',
            TileKind::Key { .. } => 'K',
            TileKind::LockedDoor { .. } => 'D',
            TileKind::LockedExit => 'L',
            TileKind::Treasure => 'T',
            TileKind::Exit => 'E',
            TileKind::MilkPuddle => 'M',
            TileKind::BouncyPad { .. } => 'B',
        }
    }

    /// Whether this tile kind reacts to player notifications.
    #[must_use]
    pub const fn reacts_to_player(&self) -> bool {
        matches!(
            self.kind,
            TileKind::Key { .. }
                | TileKind::LockedDoor { .. }
                | TileKind::LockedExit
                | TileKind::Treasure
                | TileKind::MilkPuddle
                | TileKind::BouncyPad { .. }
        )
    }

    pub(crate) fn set_obstructive(&mut self, obstructive: bool) {
        self.obstructive = obstructive;
    }

    pub(crate) const fn subscription(&self) -> Option<SubscriptionHandle> {
        self.subscription
    }

    pub(crate) fn wire(&mut self, handle: SubscriptionHandle) {
        self.subscription = Some(handle);
    }

    pub(crate) fn unwire(&mut self) -> Option<SubscriptionHandle> {
        self.subscription.take()
    }
}

fn require_color(color: Color) -> Result<(), DomainError> {
    if color == Color::None {
        return Err(DomainError::InvalidArgument(
            "colored tiles require a real color".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Tile;
    use maze_rewind_core::{Color, Direction, Point};

    #[test]
    fn symbols_match_the_grid_serialization() {
        let p = Point::ZERO;
        assert_eq!(Tile::ground(p).symbol(), 'G');
        assert_eq!(Tile::wall(p).symbol(), 'W');
        assert_eq!(Tile::info(p, "hint".to_owned()).symbol(), 'I');
        assert_eq!(Tile::key(p, Color::Blue).expect("key").symbol(), 'K');
        assert_eq!(
            Tile::locked_door(p, Color::Red).expect("door").symbol(),
            'D'
        );
        assert_eq!(Tile::locked_exit(p).symbol(), 'L');
        assert_eq!(Tile::treasure(p).symbol(), 'T');
        assert_eq!(Tile::exit(p).symbol(), 'E');
        assert_eq!(Tile::milk_puddle(p).symbol(), 'M');
        assert_eq!(Tile::bouncy_pad(p, Direction::Left).symbol(), 'B');
    }

    #[test]
    fn colored_tiles_reject_the_empty_color() {
        assert!(Tile::key(Point::ZERO, Color::None).is_err());
        assert!(Tile::locked_door(Point::ZERO, Color::None).is_err());
    }

    #[test]
    fn initial_obstructiveness_follows_the_kind() {
        assert!(Tile::wall(Point::ZERO).is_obstructive());
        assert!(Tile::locked_exit(Point::ZERO).is_obstructive());
        assert!(Tile::locked_door(Point::ZERO, Color::Yellow)
            .expect("door")
            .is_obstructive());
        assert!(!Tile::ground(Point::ZERO).is_obstructive());
        assert!(!Tile::treasure(Point::ZERO).is_obstructive());
    }

    #[test]
    fn only_stateful_kinds_react_to_the_player() {
        assert!(Tile::key(Point::ZERO, Color::Green)
            .expect("key")
            .reacts_to_player());
        assert!(Tile::milk_puddle(Point::ZERO).reacts_to_player());
        assert!(Tile::bouncy_pad(Point::ZERO, Direction::Up).reacts_to_player());
        assert!(!Tile::ground(Point::ZERO).reacts_to_player());
        assert!(!Tile::exit(Point::ZERO).reacts_to_player());
        assert!(!Tile::info(Point::ZERO, String::new()).reacts_to_player());
    }
}
