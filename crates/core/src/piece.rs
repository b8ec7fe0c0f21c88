//! Pieces module - tetromino templates and the falling piece
//!
//! A piece is a pivot plus four pivot-relative offsets. Moves never mutate a
//! piece in place: [`Piece::translated`] and [`Piece::rotated`] return
//! candidates that the controller commits only after the collision oracle
//! accepts them.

use crate::collision::{CellSet, Positioned};
use crate::geometry::{rotate_offsets, translate_offsets, Offsets};
use crate::types::{Cell, ShapeKind, PIECE_CELLS};

/// Template offsets for a shape kind, relative to the pivot
pub fn shape_template(kind: ShapeKind) -> Offsets {
    match kind {
        ShapeKind::Square => [(0, -1), (0, 0), (1, -1), (1, 0)],
        ShapeKind::Straight => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        ShapeKind::L => [(-1, 0), (-1, -1), (0, -1), (1, -1)],
        ShapeKind::J => [(-1, -1), (0, -1), (1, -1), (1, 0)],
        ShapeKind::S => [(0, 0), (0, -1), (-1, 0), (1, -1)],
        ShapeKind::Z => [(0, 0), (-1, -1), (0, -1), (1, 0)],
        ShapeKind::T => [(0, 0), (-1, 0), (1, 0), (0, -1)],
    }
}

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    pivot: Cell,
    offsets: Offsets,
}

impl Piece {
    /// Create a piece of `kind` with its pivot at `pivot`
    pub fn from_template(kind: ShapeKind, pivot: Cell) -> Self {
        Self {
            kind,
            pivot,
            offsets: shape_template(kind),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn pivot(&self) -> Cell {
        self.pivot
    }

    /// Current pivot-relative offsets (rotated from the template)
    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// Candidate rotated 90° about the pivot
    pub fn rotated(&self) -> Self {
        Self {
            offsets: rotate_offsets(self.offsets),
            ..*self
        }
    }

    /// Absolute cells as a fixed-size array
    pub fn cell_array(&self) -> [Cell; PIECE_CELLS] {
        self.offsets.map(|(dx, dy)| self.pivot.offset(dx, dy))
    }
}

impl Positioned for Piece {
    fn cells(&self) -> CellSet {
        CellSet::from(self.cell_array())
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            pivot: self.pivot.offset(dx, dy),
            offsets: translate_offsets(self.offsets, dx, dy),
            ..*self
        }
    }
}
