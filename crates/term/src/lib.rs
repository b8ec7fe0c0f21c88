//! Terminal front end for the engine.
//!
//! A thin layer: [`BoardView`] listens to the controller and keeps
//! the latest cell lists, and [`TerminalRenderer`] writes the resulting text
//! frame to the terminal. Neither can mutate game state.

pub mod renderer;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use renderer::TerminalRenderer;
pub use view::BoardView;
