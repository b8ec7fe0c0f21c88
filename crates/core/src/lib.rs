//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block game. It has no
//! dependencies on rendering, input or I/O: a front end sends [`Command`]s and
//! receives cell lists through a [`GameListener`].
//!
//! # Module Structure
//!
//! - [`geometry`]: pivot-relative offsets and 90° rotation
//! - [`board`]: the grid of resting cells, bounds checks and line clearing
//! - [`piece`]: the seven templates and the falling piece
//! - [`collision`]: the validity oracle every move passes through
//! - [`controller`]: the Spawning/Falling/Locking/GameOver state machine
//! - [`rng`]: injectable shape sources (seeded uniform, scripted)
//! - [`gravity`]: fixed-interval tick clock
//! - [`events`]: listener trait and an event recorder
//! - [`config`]: board size, tick interval, spawn pivot
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Controller, EventLog, GameConfig, ScriptedShapes};
//! use blockfall_types::{Command, Phase, ShapeKind};
//!
//! let shapes = ScriptedShapes::new(vec![ShapeKind::Straight]).unwrap();
//! let mut game = Controller::new(GameConfig::default(), shapes, EventLog::new()).unwrap();
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! while game.can_move_down() {
//!     game.apply(Command::Tick);
//! }
//! game.apply(Command::Tick); // locks and spawns the next piece
//!
//! assert_eq!(game.board().len(), 4);
//! assert_eq!(game.phase(), Phase::Falling);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod gravity;
pub mod piece;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MAX_CELLS};
pub use collision::{cells_fit, is_valid, CellSet, Positioned};
pub use config::GameConfig;
pub use controller::Controller;
pub use events::{EventLog, GameEvent, GameListener};
pub use gravity::Gravity;
pub use piece::{shape_template, Piece};
pub use rng::{RandomShapes, ScriptedShapes, ShapeSource, SimpleRng};
pub use types::Command;
