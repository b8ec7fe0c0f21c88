//! Coordinate math for piece offsets.
//!
//! Offsets are pivot-relative. Translating a piece moves only its pivot, so
//! offsets pass through translation untouched; rotation turns every offset 90°
//! about the local origin in one step.

use crate::types::PIECE_CELLS;

/// Offset of a single cell relative to the piece pivot
pub type Offset = (i32, i32);

/// Offsets of a whole piece
pub type Offsets = [Offset; PIECE_CELLS];

/// Offsets after a pivot translation. Offsets are pivot-relative, so this is
/// the identity; it exists so translation and rotation read the same way at
/// call sites.
#[inline]
pub fn translate_offsets(offsets: Offsets, _dx: i32, _dy: i32) -> Offsets {
    offsets
}

/// Rotate one offset 90° about the origin: `(lx, ly) -> (ly, -lx)`
#[inline]
pub fn rotate_offset((lx, ly): Offset) -> Offset {
    (ly, -lx)
}

/// Rotate every offset of a piece
pub fn rotate_offsets(offsets: Offsets) -> Offsets {
    offsets.map(rotate_offset)
}

/// Absolute-cell shift produced by rotating `offset`: `rotate(l) - l`
#[inline]
pub fn rotation_delta((lx, ly): Offset) -> (i32, i32) {
    (ly - lx, -lx - ly)
}
