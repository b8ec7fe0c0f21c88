//! Controller - the game state machine
//!
//! Ties together the board, the falling piece, the shape source and the
//! listener. Every command runs to completion before returning:
//!
//! - **Spawning → Falling**: draw a shape, place it at the spawn pivot. An
//!   invalid spawn ends the game instead.
//! - **Falling**: left/right/rotate commit only valid candidates; a tick or
//!   move-down that cannot move the piece enters Locking.
//! - **Locking**: merge the piece into the board, clear full rows, add them to
//!   the score, then spawn again. Cells above the top row are not stored.
//! - **GameOver**: terminal. The final score is reported once and every later
//!   command is ignored.

use log::{debug, info, trace};

use crate::board::Board;
use crate::collision::{is_valid, Positioned};
use crate::config::GameConfig;
use crate::events::GameListener;
use crate::piece::Piece;
use crate::rng::ShapeSource;
use crate::types::{Command, ConfigError, Phase, ShapeKind};

/// Owns all mutable game state
#[derive(Debug)]
pub struct Controller<S, L> {
    config: GameConfig,
    board: Board,
    piece: Option<Piece>,
    phase: Phase,
    score: u32,
    source: S,
    listener: L,
}

impl<S: ShapeSource, L: GameListener> Controller<S, L> {
    /// Create a game on an empty board. Call [`start`](Self::start) to spawn
    /// the first piece.
    pub fn new(config: GameConfig, source: S, listener: L) -> Result<Self, ConfigError> {
        let board = Board::with_size(config.width, config.height);
        Self::with_board(config, board, source, listener)
    }

    /// Create a game on a pre-populated board
    pub fn with_board(
        config: GameConfig,
        board: Board,
        source: S,
        listener: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardMismatch {
                width: config.width,
                height: config.height,
                actual_width: board.width(),
                actual_height: board.height(),
            });
        }

        Ok(Self {
            config,
            board,
            piece: None,
            phase: Phase::Spawning,
            score: 0,
            source,
            listener,
        })
    }

    /// Spawn the first piece. Does nothing once the game has started.
    pub fn start(&mut self) {
        if self.phase == Phase::Spawning && self.piece.is_none() {
            self.spawn_piece();
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Cleared rows so far
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Apply a command. Returns true if the piece or board changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveDown => self.move_down(),
            Command::Rotate => self.rotate(),
            Command::Tick => {
                let before = (self.piece, self.score, self.phase);
                self.tick();
                before != (self.piece, self.score, self.phase)
            }
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_commit(|piece| piece.translated(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_commit(|piece| piece.translated(1, 0))
    }

    pub fn rotate(&mut self) -> bool {
        self.try_commit(Piece::rotated)
    }

    /// Move the piece down one row, locking it if it cannot move.
    /// Returns false only when no piece is falling.
    pub fn move_down(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        if !self.try_commit(|piece| piece.translated(0, 1)) {
            self.lock_piece();
        }
        true
    }

    /// One gravity step. Returns whether the gravity clock should keep
    /// running, i.e. false once the game is over.
    pub fn tick(&mut self) -> bool {
        self.move_down();
        !self.is_game_over()
    }

    /// Check if the falling piece could move down one row
    pub fn can_move_down(&self) -> bool {
        self.phase == Phase::Falling
            && self
                .piece
                .is_some_and(|piece| is_valid(&piece.translated(0, 1), &self.board))
    }

    /// Replace the falling piece with a fresh `kind` at the same pivot.
    /// Ignored if the new piece would not fit.
    pub fn swap_piece(&mut self, kind: ShapeKind) -> bool {
        self.try_commit(|piece| Piece::from_template(kind, piece.pivot()))
    }

    /// Commit `transform(piece)` if the result is valid
    fn try_commit(&mut self, transform: impl FnOnce(&Piece) -> Piece) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.piece else {
            return false;
        };

        let candidate = transform(&piece);
        if !is_valid(&candidate, &self.board) {
            trace!("rejected move to {:?}", candidate.cell_array());
            return false;
        }

        self.piece = Some(candidate);
        self.listener.piece_changed(&candidate.cell_array());
        true
    }

    /// Draw the next shape and place it at the spawn pivot
    fn spawn_piece(&mut self) {
        self.phase = Phase::Spawning;

        let kind = self.source.next_shape();
        let piece = Piece::from_template(kind, self.config.spawn_pivot);

        if !is_valid(&piece, &self.board) {
            debug!("spawn of `{kind}` blocked at {}", self.config.spawn_pivot);
            self.end_game();
            return;
        }

        debug!("spawned `{kind}`");
        self.piece = Some(piece);
        self.phase = Phase::Falling;
        self.listener.piece_changed(&piece.cell_array());
    }

    /// Merge the falling piece into the board, clear rows and spawn the next
    fn lock_piece(&mut self) {
        let Some(piece) = self.piece.take() else {
            return;
        };
        self.phase = Phase::Locking;

        // Cells above the top row are dropped; only a blocked spawn ends the game
        let dropped = self.board.add_cells(&piece.cell_array());
        if dropped > 0 {
            debug!("{dropped} cell(s) locked above the board were discarded");
        }
        let lines = self.board.clear_full_rows();
        self.score += lines;
        debug!(
            "locked `{}` at {}, cleared {lines} row(s)",
            piece.kind(),
            piece.pivot()
        );

        self.listener.board_changed(&self.board.resting_cells());
        self.spawn_piece();
    }

    fn end_game(&mut self) {
        self.piece = None;
        self.phase = Phase::GameOver;
        info!("game over, score {}", self.score);
        self.listener.game_over(self.score);
    }
}
