//! Core types module - shared data structures and constants
//!
//! This module defines the value types used throughout the workspace. They are
//! plain data with no engine logic, usable by the core, the input mapping and
//! the terminal adapter alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn pivot**: (2, 1) for every shape
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Gravity interval: one row per tick |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse a template key (case-insensitive)
//! let kind: ShapeKind = "straight".parse().unwrap();
//! assert_eq!(kind, ShapeKind::Straight);
//! assert!("hexomino".parse::<ShapeKind>().is_err());
//!
//! // Cells are compared by coordinates
//! assert_eq!(Cell::new(3, 4), Cell::new(3, 4).offset(0, 0));
//!
//! // Commands have a stable text form
//! assert_eq!(Command::parse("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Gravity interval in milliseconds (one row per second)
pub const TICK_MS: u32 = 1000;

/// Pivot every new piece spawns at
pub const SPAWN_PIVOT: Cell = Cell { x: 2, y: 1 };

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

/// A grid coordinate.
///
/// `x` grows rightward from 0, `y` grows downward from 0. Cells are values:
/// two cells are equal when their coordinates are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This cell shifted by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The seven tetromino templates
///
/// - **Square**: 2x2 block
/// - **Straight**: 4-long bar
/// - **L** / **J**: mirrored hooks
/// - **S** / **Z**: mirrored zig-zags
/// - **T**: three in a row with a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Straight,
    L,
    J,
    S,
    Z,
    T,
}

impl ShapeKind {
    /// Every kind, in template-table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Straight,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
    ];

    /// Lowercase template key
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::Square.as_str(), "square");
    /// assert_eq!(ShapeKind::T.as_str(), "t");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Straight => "straight",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::T => "t",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    /// Parse a template key (case-insensitive).
    ///
    /// Accepts the full names plus the letter aliases `o` (square) and `i`
    /// (straight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" | "o" => Ok(ShapeKind::Square),
            "straight" | "i" => Ok(ShapeKind::Straight),
            "l" => Ok(ShapeKind::L),
            "j" => Ok(ShapeKind::J),
            "s" => Ok(ShapeKind::S),
            "z" => Ok(ShapeKind::Z),
            "t" => Ok(ShapeKind::T),
            _ => Err(ConfigError::UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intent commands issued to the engine by input or a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    MoveDown,
    /// Rotate piece 90° about its pivot
    Rotate,
    /// One gravity step (same rules as `MoveDown`)
    Tick,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::parse("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::parse("MOVEDOWN"), Some(Command::MoveDown));
    /// assert_eq!(Command::parse("hardDrop"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::Tick => "tick",
        }
    }
}

/// Controller lifecycle states
///
/// `Spawning` and `Locking` are transient: every command runs to completion,
/// so an observer between commands only ever sees `Spawning` (before start),
/// `Falling` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Spawning => "spawning",
            Phase::Falling => "falling",
            Phase::Locking => "locking",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Malformed construction input.
///
/// Normal play never produces these; they surface when a game is built from
/// bad configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown shape template `{0}`")]
    UnknownShape(String),
    #[error("shape script is empty")]
    EmptyShapeScript,
    #[error("board must be at least {min_width}x{min_height}, got {width}x{height}")]
    InvalidDimensions {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
    #[error("board {width}x{height} exceeds {max_cells} cells")]
    BoardTooLarge {
        width: i32,
        height: i32,
        max_cells: usize,
    },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("spawn pivot {pivot} does not fit `{kind}` on an empty board")]
    SpawnOutOfBounds { pivot: Cell, kind: ShapeKind },
    #[error("board is {actual_width}x{actual_height} but configuration expects {width}x{height}")]
    BoardMismatch {
        width: i32,
        height: i32,
        actual_width: i32,
        actual_height: i32,
    },
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: String, value: String },
}
