//! TOML level descriptions and the loader that overlays them onto a world.
//!
//! Every tile goes through the tile registry, so a level file can only name
//! tags the registry knows about and malformed parameters fail with the
//! offending tile's coordinates in the error chain.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use maze_rewind_core::{Color, Direction, Point};
use maze_rewind_world::registry::{TileParam, TileRegistry};
use maze_rewind_world::{EnemyKind, World};

/// A complete level description as persisted on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct LevelFile {
    /// Identifier of this level; recordings carry it for matching.
    pub level: i32,
    /// Identifier of the level that follows, -1 for the final level.
    pub next_level: i32,
    /// Grid width in cells.
    pub columns: i32,
    /// Grid height in cells.
    pub rows: i32,
    /// Number of treasures the exit gate waits for.
    #[serde(default)]
    pub treasures: u32,
    /// Starting pose and inventory of the player.
    pub player: PlayerSpec,
    /// Tiles overlaid onto the all-ground base grid.
    #[serde(default)]
    pub tiles: Vec<TileSpec>,
    /// Enemies patrolling the level.
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
}

/// Player starting state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlayerSpec {
    /// Starting column.
    pub x: i32,
    /// Starting row.
    pub y: i32,
    /// Starting facing.
    pub facing: Direction,
    /// Keys the player begins with.
    #[serde(default)]
    pub keys: Vec<Color>,
}

/// One tile placement, matched against a registry signature by its tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct TileSpec {
    /// Registry tag, e.g. `"key"` or `"bounce-pad"`.
    pub tag: String,
    /// Column of the cell.
    pub x: i32,
    /// Row of the cell.
    pub y: i32,
    /// Text parameter for tags that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Color parameter for tags that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Direction parameter for tags that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// One enemy spawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct EnemySpec {
    /// Starting column.
    pub x: i32,
    /// Starting row.
    pub y: i32,
    /// Starting facing.
    pub facing: Direction,
    /// Tick interval in milliseconds.
    pub speed: u32,
}

impl LevelFile {
    /// Reads and parses a level description from disk.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read level file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("could not parse level file {}", path.display()))
    }

    /// Parses a level description from TOML text.
    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builds a fresh world from this description through the load-time
    /// contract: generate, overlay tiles, place the player, spawn enemies.
    pub(crate) fn build_world(&self) -> anyhow::Result<World> {
        let registry = TileRegistry::builtin();
        let mut world = World::generate(
            Point::new(self.columns, self.rows),
            self.treasures,
            self.next_level,
        )?;
        for spec in &self.tiles {
            let position = Point::new(spec.x, spec.y);
            let mut params = Vec::new();
            if let Some(text) = &spec.text {
                params.push(TileParam::Text(text.clone()));
            }
            if let Some(color) = spec.color {
                params.push(TileParam::TileColor(color));
            }
            if let Some(direction) = spec.direction {
                params.push(TileParam::Facing(direction));
            }
            let tile = registry
                .create(&spec.tag, position, &params)
                .with_context(|| format!("tile {:?} at ({}, {})", spec.tag, spec.x, spec.y))?;
            world.set_tile(position, tile)?;
        }
        world.set_player_position(Point::new(self.player.x, self.player.y))?;
        world.set_player_direction(self.player.facing)?;
        for color in &self.player.keys {
            world.add_player_key(*color)?;
        }
        for enemy in &self.enemies {
            let _ = world.spawn_enemy(
                Point::new(enemy.x, enemy.y),
                enemy.facing,
                EnemyKind::Patrol,
                enemy.speed,
            )?;
        }
        debug!(level = self.level, tiles = self.tiles.len(), enemies = self.enemies.len(), "built world from level file");
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::LevelFile;
    use maze_rewind_core::{Color, Direction, Point};

    const CORRIDOR: &str = r#"
        level = 1
        next_level = -1
        columns = 6
        rows = 1
        treasures = 1

        [player]
        x = 0
        y = 0
        facing = "Down"

        [[tiles]]
        tag = "key"
        x = 1
        y = 0
        color = "Red"

        [[tiles]]
        tag = "treasure"
        x = 2
        y = 0

        [[tiles]]
        tag = "door"
        x = 3
        y = 0
        color = "Red"

        [[tiles]]
        tag = "exit-gate"
        x = 4
        y = 0

        [[tiles]]
        tag = "exit"
        x = 5
        y = 0
    "#;

    #[test]
    fn a_level_file_builds_the_described_world() {
        let file = LevelFile::parse(CORRIDOR).expect("parse");
        assert_eq!(file.level, 1);

        let world = file.build_world().expect("build");
        assert_eq!(world.grid_string(), "GKTDLE\n");
        assert_eq!(world.treasures_left(), 1);
        assert_eq!(world.player().state().position(), Point::ZERO);
        assert_eq!(world.player().state().facing(), Direction::Down);
    }

    #[test]
    fn enemies_and_keys_are_loaded() {
        let text = r#"
            level = 2
            next_level = 3
            columns = 4
            rows = 4

            [player]
            x = 1
            y = 1
            facing = "Right"
            keys = ["Blue"]

            [[enemies]]
            x = 3
            y = 3
            facing = "Up"
            speed = 400
        "#;
        let world = LevelFile::parse(text)
            .expect("parse")
            .build_world()
            .expect("build");
        assert!(world.player().has_key(Color::Blue));
        assert_eq!(world.enemies().len(), 1);
        assert_eq!(world.enemies()[0].speed(), 400);
        assert_eq!(world.next_level(), 3);
    }

    #[test]
    fn unknown_tags_fail_with_the_tile_position_in_context() {
        let text = r#"
            level = 1
            next_level = -1
            columns = 2
            rows = 2

            [player]
            x = 0
            y = 0
            facing = "Down"

            [[tiles]]
            tag = "teleporter"
            x = 1
            y = 1
        "#;
        let error = LevelFile::parse(text)
            .expect("parse")
            .build_world()
            .expect_err("unknown tag must fail");
        assert!(format!("{error:#}").contains("teleporter"));
    }
}
