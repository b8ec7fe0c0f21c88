//! Terminal input module.
//!
//! Maps `crossterm` key events to engine [`Command`](crate::types::Command)s.
//! Gravity ticks are not produced here; the runner's clock issues those.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
