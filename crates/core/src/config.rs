//! Game configuration
//!
//! Defaults match the classic 10x20 field with a one-second gravity tick.
//! Everything can be overridden through environment variables for the
//! terminal runner.

use std::env;
use std::str::FromStr;

use crate::board::{grid_cells, Board, MAX_CELLS};
use crate::collision::is_valid;
use crate::piece::Piece;
use crate::rng::{RandomShapes, ScriptedShapes, ShapeSource};
use crate::types::{
    Cell, ConfigError, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_PIVOT, TICK_MS,
};

/// Narrowest board a straight piece fits across
pub const MIN_WIDTH: i32 = 4;

/// Fewest rows a spawned piece fits in
pub const MIN_HEIGHT: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub tick_ms: u32,
    pub spawn_pivot: Cell,
    /// Seed for random shape selection; `None` lets the runner pick one
    pub seed: Option<u32>,
    /// Fixed shape cycle replacing random selection (debugging)
    pub shapes: Option<Vec<ShapeKind>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_MS,
            spawn_pivot: SPAWN_PIVOT,
            seed: None,
            shapes: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCKFALL_WIDTH`, `BLOCKFALL_HEIGHT`: board size
    /// - `BLOCKFALL_TICK_MS`: gravity interval
    /// - `BLOCKFALL_SEED`: shape RNG seed
    /// - `BLOCKFALL_SHAPES`: comma-separated template keys played in a cycle
    ///
    /// Unset or blank variables keep their defaults; malformed values are an
    /// error. The result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables read from `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let shapes = match value("BLOCKFALL_SHAPES") {
            Some(keys) => Some(ScriptedShapes::parse(&keys)?.script().to_vec()),
            None => None,
        };

        let config = Self {
            width: parse_value("BLOCKFALL_WIDTH", value("BLOCKFALL_WIDTH"))?
                .unwrap_or(defaults.width),
            height: parse_value("BLOCKFALL_HEIGHT", value("BLOCKFALL_HEIGHT"))?
                .unwrap_or(defaults.height),
            tick_ms: parse_value("BLOCKFALL_TICK_MS", value("BLOCKFALL_TICK_MS"))?
                .unwrap_or(defaults.tick_ms),
            spawn_pivot: defaults.spawn_pivot,
            seed: parse_value("BLOCKFALL_SEED", value("BLOCKFALL_SEED"))?,
            shapes,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no game could be played on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        if grid_cells(self.width, self.height).is_none() {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max_cells: MAX_CELLS,
            });
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if matches!(self.shapes, Some(ref s) if s.is_empty()) {
            return Err(ConfigError::EmptyShapeScript);
        }

        // Every template must be able to spawn on an empty board
        let empty = Board::with_size(self.width, self.height);
        for kind in ShapeKind::ALL {
            if !is_valid(&Piece::from_template(kind, self.spawn_pivot), &empty) {
                return Err(ConfigError::SpawnOutOfBounds {
                    pivot: self.spawn_pivot,
                    kind,
                });
            }
        }

        Ok(())
    }

    /// Shape source described by this configuration: the scripted cycle when
    /// one is set, uniform random otherwise (`fallback_seed` when no seed is
    /// configured).
    pub fn shape_source(&self, fallback_seed: u32) -> Result<Box<dyn ShapeSource>, ConfigError> {
        match &self.shapes {
            Some(script) => Ok(Box::new(ScriptedShapes::new(script.clone())?)),
            None => Ok(Box::new(RandomShapes::new(
                self.seed.unwrap_or(fallback_seed),
            ))),
        }
    }
}

fn parse_value<T: FromStr>(key: &str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match raw {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        None => Ok(None),
    }
}
