//! Explicit tile factory keyed by stable string tags.
//!
//! The loader and save writer speak in tags (`"key"`, `"door"`, ...) rather
//! than concrete types. Each registration declares its parameter signature
//! up front and is smoke-built immediately, so arity and parameter-type
//! mistakes surface at registration rather than mid-load.

use maze_rewind_core::{Color, Direction, Point};

use crate::tiles::{Tile, TileKind};
use crate::DomainError;

/// Parameter value accepted by tile constructors.
#[derive(Clone, Debug, PartialEq)]
pub enum TileParam {
    /// Free-form text, e.g. the message of an info marker.
    Text(String),
    /// A tile color, e.g. for keys and doors.
    TileColor(Color),
    /// A direction, e.g. the launch direction of a bounce pad.
    Facing(Direction),
}

impl TileParam {
    const fn kind(&self) -> ParamKind {
        match self {
            TileParam::Text(_) => ParamKind::Text,
            TileParam::TileColor(_) => ParamKind::TileColor,
            TileParam::Facing(_) => ParamKind::Facing,
        }
    }
}

/// Parameter kind declared in a registration signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Expects [`TileParam::Text`].
    Text,
    /// Expects [`TileParam::TileColor`].
    TileColor,
    /// Expects [`TileParam::Facing`].
    Facing,
}

impl ParamKind {
    fn placeholder(self) -> TileParam {
        match self {
            ParamKind::Text => TileParam::Text(String::new()),
            ParamKind::TileColor => TileParam::TileColor(Color::Red),
            ParamKind::Facing => TileParam::Facing(Direction::Up),
        }
    }
}

type BuildFn = fn(Point, &[TileParam]) -> Result<Tile, DomainError>;

struct RegistryEntry {
    tag: &'static str,
    signature: &'static [ParamKind],
    build: BuildFn,
}

/// Registry mapping tile-kind tags to validated constructors.
pub struct TileRegistry {
    entries: Vec<RegistryEntry>,
}

impl TileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a registry preloaded with every built-in tile kind.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let builtins: [(&'static str, &'static [ParamKind], BuildFn); 10] = [
            ("ground", &[], |p, _| Ok(Tile::ground(p))),
            ("wall", &[], |p, _| Ok(Tile::wall(p))),
            ("info", &[ParamKind::Text], |p, params| match params {
                [TileParam::Text(text)] => Ok(Tile::info(p, text.clone())),
                _ => Err(signature_mismatch("info")),
            }),
            ("key", &[ParamKind::TileColor], |p, params| match params {
                [TileParam::TileColor(color)] => Tile::key(p, *color),
                _ => Err(signature_mismatch("key")),
            }),
            ("treasure", &[], |p, _| Ok(Tile::treasure(p))),
            ("door", &[ParamKind::TileColor], |p, params| match params {
                [TileParam::TileColor(color)] => Tile::locked_door(p, *color),
                _ => Err(signature_mismatch("door")),
            }),
            ("exit-gate", &[], |p, _| Ok(Tile::locked_exit(p))),
            ("exit", &[], |p, _| Ok(Tile::exit(p))),
            ("death", &[], |p, _| Ok(Tile::milk_puddle(p))),
            ("bounce-pad", &[ParamKind::Facing], |p, params| match params {
                [TileParam::Facing(direction)] => Ok(Tile::bouncy_pad(p, *direction)),
                _ => Err(signature_mismatch("bounce-pad")),
            }),
        ];
        for (tag, signature, build) in builtins {
            registry
                .register(tag, signature, build)
                .unwrap_or_else(|error| panic!("builtin tile {tag:?} failed to register: {error}"));
        }
        registry
    }

    /// Registers a constructor under a tag.
    ///
    /// The constructor is immediately smoke-built against placeholder
    /// parameters derived from the signature, so a constructor that
    /// disagrees with its declared arity or parameter kinds is rejected
    /// here instead of at load time.
    pub fn register(
        &mut self,
        tag: &'static str,
        signature: &'static [ParamKind],
        build: BuildFn,
    ) -> Result<(), DomainError> {
        if self.entries.iter().any(|entry| entry.tag == tag) {
            return Err(DomainError::InvalidArgument(format!(
                "tile tag {tag:?} is already registered"
            )));
        }
        let placeholders: Vec<TileParam> =
            signature.iter().map(|kind| kind.placeholder()).collect();
        let _ = build(Point::ZERO, &placeholders)?;
        self.entries.push(RegistryEntry {
            tag,
            signature,
            build,
        });
        Ok(())
    }

    /// Builds a tile from its tag, position, and parameters.
    ///
    /// Fails with [`DomainError::InvalidArgument`] for unknown tags, wrong
    /// arity, or mismatched parameter kinds.
    pub fn create(
        &self,
        tag: &str,
        position: Point,
        params: &[TileParam],
    ) -> Result<Tile, DomainError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.tag == tag)
            .ok_or_else(|| DomainError::InvalidArgument(format!("unknown tile tag {tag:?}")))?;
        if params.len() != entry.signature.len() {
            return Err(DomainError::InvalidArgument(format!(
                "tile tag {tag:?} expects {} parameter(s), got {}",
                entry.signature.len(),
                params.len()
            )));
        }
        for (param, expected) in params.iter().zip(entry.signature) {
            if param.kind() != *expected {
                return Err(DomainError::InvalidArgument(format!(
                    "tile tag {tag:?} expects {expected:?}, got {:?}",
                    param.kind()
                )));
            }
        }
        (entry.build)(position, params)
    }

    /// Every registered tag, in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.tag)
    }

    /// The tag a tile would be saved under.
    #[must_use]
    pub fn tag_of(tile: &Tile) -> &'static str {
        match tile.kind() {
            TileKind::Ground => "ground",
            TileKind::Wall => "wall",
            TileKind::Info { .. } => "info",
            TileKind::Key { .. } => "key",
            TileKind::Treasure => "treasure",
            TileKind::LockedDoor { .. } => "door",
            TileKind::LockedExit => "exit-gate",
            TileKind::Exit => "exit",
            TileKind::MilkPuddle => "death",
            TileKind::BouncyPad { .. } => "bounce-pad",
        }
    }
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn signature_mismatch(tag: &str) -> DomainError {
    DomainError::InvalidArgument(format!("parameters do not match the {tag:?} signature"))
}
