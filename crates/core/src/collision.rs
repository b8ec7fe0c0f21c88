//! Collision/validity oracle
//!
//! Every mutation of the falling piece passes through [`is_valid`]: a
//! candidate is committed only when all of its cells are in bounds and none
//! overlaps a resting cell.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Cell, PIECE_CELLS};

/// Cells of anything placed on the grid (at most one piece worth)
pub type CellSet = ArrayVec<Cell, PIECE_CELLS>;

/// Something that occupies grid cells and can be moved as a unit.
///
/// Implemented by [`Piece`](crate::piece::Piece) and by a single [`Cell`], so
/// the oracle can judge either the same way.
pub trait Positioned: Sized {
    /// Absolute cells currently occupied
    fn cells(&self) -> CellSet;

    /// Candidate shifted by `(dx, dy)`; `self` is left untouched
    fn translated(&self, dx: i32, dy: i32) -> Self;

    /// Whether these cells could legally sit on `board`
    fn can_occupy(&self, board: &Board) -> bool {
        is_valid(self, board)
    }
}

impl Positioned for Cell {
    fn cells(&self) -> CellSet {
        let mut cells = CellSet::new();
        cells.push(*self);
        cells
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        self.offset(dx, dy)
    }
}

/// Check that every cell of `candidate` is in bounds and unoccupied
pub fn is_valid<P: Positioned>(candidate: &P, board: &Board) -> bool {
    cells_fit(&candidate.cells(), board)
}

/// Check a raw cell list against the board
pub fn cells_fit(cells: &[Cell], board: &Board) -> bool {
    cells
        .iter()
        .all(|&cell| board.is_in_bounds(cell) && !board.is_occupied(cell))
}
