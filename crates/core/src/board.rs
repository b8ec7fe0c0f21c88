//! Board module - the playfield and its resting cells
//!
//! The board is a `width x height` grid (10x20 by default) that owns every cell
//! at rest. Occupancy lives in a flat row-major array for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use log::debug;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest grid a board will allocate
pub const MAX_CELLS: usize = 1 << 20;

/// Cell count of a `width x height` grid, or `None` if either side is not
/// positive or the grid exceeds [`MAX_CELLS`]
pub fn grid_cells(width: i32, height: i32) -> Option<usize> {
    if width <= 0 || height <= 0 {
        return None;
    }
    let width = usize::try_from(width).ok()?;
    let height = usize::try_from(height).ok()?;
    width.checked_mul(height).filter(|&len| len <= MAX_CELLS)
}

/// The game board with flat occupancy storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major occupancy (y * width + x)
    filled: Vec<bool>,
}

impl Board {
    /// Create an empty board of the default 10x20 size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given size.
    ///
    /// Non-positive dimensions, or a grid of more than [`MAX_CELLS`] cells,
    /// produce a 0x0 board with no storable cells. `GameConfig::validate`
    /// rejects both before a game is built.
    pub fn with_size(width: i32, height: i32) -> Self {
        match grid_cells(width, height) {
            Some(len) => Self {
                width,
                height,
                filled: vec![false; len],
            },
            None => Self {
                width: 0,
                height: 0,
                filled: Vec::new(),
            },
        }
    }

    /// Flat index of a storable cell
    #[inline(always)]
    fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some((cell.y as usize) * (self.width as usize) + (cell.x as usize))
        } else {
            None
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if the cell may be occupied by a falling piece.
    ///
    /// Only the side and bottom edges are enforced; a cell above the top row
    /// (`y < 0`) is in bounds so pieces can spawn and rotate near the top.
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Check if the cell lies inside the stored grid (all four edges)
    pub fn contains(&self, cell: Cell) -> bool {
        self.is_in_bounds(cell) && cell.y >= 0
    }

    /// Check if a resting cell sits at this coordinate
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|idx| self.filled[idx])
    }

    /// Set or clear a single resting cell.
    /// Returns false if the cell is outside the stored grid.
    pub fn set(&mut self, cell: Cell, filled: bool) -> bool {
        match self.index(cell) {
            Some(idx) => {
                self.filled[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Merge cells into the resting set.
    ///
    /// Already resting cells are left as they are. Returns the number of cells
    /// that could not be stored because they lie outside the grid.
    pub fn add_cells(&mut self, cells: &[Cell]) -> usize {
        let mut rejected = 0;
        for &cell in cells {
            if !self.set(cell, true) {
                rejected += 1;
            }
        }
        rejected
    }

    /// Row slice for an in-range row index
    fn row(&self, y: i32) -> Option<&[bool]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        Some(&self.filled[start..start + width])
    }

    /// Number of resting cells in row `y`
    pub fn row_count(&self, y: i32) -> usize {
        self.row(y)
            .map_or(0, |row| row.iter().filter(|&&f| f).count())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&f| f))
    }

    /// Remove row `y` and move every row above it down by one.
    /// Returns false if `y` is not a row of this board.
    pub fn clear_row(&mut self, y: i32) -> bool {
        if y < 0 || y >= self.height {
            return false;
        }

        let width = self.width as usize;
        let y = y as usize;

        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.filled
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in &mut self.filled[..width] {
            *cell = false;
        }

        true
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Rows are scanned top to bottom and fullness is re-evaluated against the
    /// live board after each removal. Removing row `y` only moves rows that
    /// were already scanned (and found not full) down by one, so a single pass
    /// catches every full row regardless of how they are arranged.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..self.height {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
                debug!("cleared row {y}");
            }
        }
        cleared
    }

    /// Resting cells in row-major order (top row first)
    pub fn resting_cells(&self) -> Vec<Cell> {
        self.iter_resting().collect()
    }

    /// Iterate resting cells in row-major order
    pub fn iter_resting(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width.max(1) as usize;
        self.filled
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(move |(idx, _)| Cell::new((idx % width) as i32, (idx / width) as i32))
    }

    /// Number of resting cells
    pub fn len(&self) -> usize {
        self.filled.iter().filter(|&&f| f).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.filled.iter().any(|&f| f)
    }

    /// Remove every resting cell
    pub fn clear(&mut self) {
        for cell in &mut self.filled {
            *cell = false;
        }
    }

    /// Build a board from text rows for tests: `#` is a resting cell, anything
    /// else is empty. Rows are given top to bottom and must all be `width` long.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        let mut board = Self::with_size(width, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len() as i32, width);
            for (x, ch) in row.chars().enumerate() {
                board.set(Cell::new(x as i32, y as i32), ch == '#');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(Cell::new(0, 0)), Some(0));
        assert_eq!(board.index(Cell::new(9, 0)), Some(9));
        assert_eq!(board.index(Cell::new(0, 1)), Some(10));
        assert_eq!(board.index(Cell::new(9, 19)), Some(199));
        assert_eq!(board.index(Cell::new(-1, 0)), None);
        assert_eq!(board.index(Cell::new(10, 0)), None);
        assert_eq!(board.index(Cell::new(0, 20)), None);
        assert_eq!(board.index(Cell::new(0, -1)), None);
    }

    #[test]
    fn test_grid_cells_limits() {
        assert_eq!(grid_cells(10, 20), Some(200));
        assert_eq!(grid_cells(0, 20), None);
        assert_eq!(grid_cells(10, -1), None);
        assert_eq!(grid_cells(i32::MAX, i32::MAX), None);
        assert_eq!(grid_cells(1024, 1024), Some(MAX_CELLS));
        assert_eq!(grid_cells(1025, 1024), None);
    }

    #[test]
    fn test_unusable_size_gives_empty_grid() {
        for (w, h) in [(i32::MAX, i32::MAX), (-3, 5), (0, 0)] {
            let mut board = Board::with_size(w, h);
            assert_eq!((board.width(), board.height()), (0, 0));
            assert!(!board.set(Cell::new(0, 0), true));
            assert!(!board.is_row_full(0));
            assert_eq!(board.clear_full_rows(), 0);
        }
    }

    #[test]
    fn test_bounds_ignore_top_edge() {
        let board = Board::new();
        assert!(board.is_in_bounds(Cell::new(0, -3)));
        assert!(!board.contains(Cell::new(0, -3)));
        assert!(!board.is_in_bounds(Cell::new(-1, 5)));
        assert!(!board.is_in_bounds(Cell::new(10, 5)));
        assert!(!board.is_in_bounds(Cell::new(4, 20)));
    }

    #[test]
    fn test_add_cells_reports_unstorable() {
        let mut board = Board::new();
        let rejected = board.add_cells(&[Cell::new(1, 1), Cell::new(1, -1), Cell::new(1, 1)]);
        assert_eq!(rejected, 1);
        assert_eq!(board.len(), 1);
        assert!(board.is_occupied(Cell::new(1, 1)));
    }

    #[test]
    fn test_clear_full_rows_split_stack() {
        let mut board = Board::from_rows(&[
            "....",
            "#...",
            "####",
            ".#..",
            "####",
        ]);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(
            board,
            Board::from_rows(&[
                "....",
                "....",
                "....",
                "#...",
                ".#..",
            ])
        );
    }

    #[test]
    fn test_clear_full_rows_adjacent() {
        let mut board = Board::from_rows(&["..#.", "####", "####", "#..#"]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board, Board::from_rows(&["....", "....", "..#.", "#..#"]));
    }

    #[test]
    fn test_resting_cells_row_major() {
        let board = Board::from_rows(&["..#", "#..", "..."]);
        assert_eq!(
            board.resting_cells(),
            vec![Cell::new(2, 0), Cell::new(0, 1)]
        );
    }
}
