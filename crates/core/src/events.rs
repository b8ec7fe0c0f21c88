//! Change notifications for the rendering/input layer.
//!
//! The controller reports every observable change through a [`GameListener`].
//! Listeners only ever see cell lists; they cannot reach the board or piece.

use crate::types::Cell;

/// Receives cell snapshots as the game changes.
///
/// All methods default to doing nothing, so a listener implements only what
/// it draws.
pub trait GameListener {
    /// Resting cells changed (after a lock and its line clears)
    fn board_changed(&mut self, _cells: &[Cell]) {}

    /// The falling piece moved, rotated or spawned
    fn piece_changed(&mut self, _cells: &[Cell]) {}

    /// The game ended; emitted exactly once
    fn game_over(&mut self, _score: u32) {}
}

/// Silent listener
impl GameListener for () {}

impl<L: GameListener + ?Sized> GameListener for &mut L {
    fn board_changed(&mut self, cells: &[Cell]) {
        (**self).board_changed(cells)
    }

    fn piece_changed(&mut self, cells: &[Cell]) {
        (**self).piece_changed(cells)
    }

    fn game_over(&mut self, score: u32) {
        (**self).game_over(score)
    }
}

/// A recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    BoardChanged(Vec<Cell>),
    PieceChanged(Vec<Cell>),
    GameOver { score: u32 },
}

/// Listener that records every notification in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear the recorded events
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Most recent board snapshot, if any
    pub fn last_board(&self) -> Option<&[Cell]> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::BoardChanged(cells) => Some(cells.as_slice()),
            _ => None,
        })
    }

    /// Most recent piece snapshot, if any
    pub fn last_piece(&self) -> Option<&[Cell]> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::PieceChanged(cells) => Some(cells.as_slice()),
            _ => None,
        })
    }

    /// Final score, once the game has ended
    pub fn final_score(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            GameEvent::GameOver { score } => Some(*score),
            _ => None,
        })
    }
}

impl GameListener for EventLog {
    fn board_changed(&mut self, cells: &[Cell]) {
        self.events.push(GameEvent::BoardChanged(cells.to_vec()));
    }

    fn piece_changed(&mut self, cells: &[Cell]) {
        self.events.push(GameEvent::PieceChanged(cells.to_vec()));
    }

    fn game_over(&mut self, score: u32) {
        self.events.push(GameEvent::GameOver { score });
    }
}
