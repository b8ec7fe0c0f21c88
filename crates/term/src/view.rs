//! BoardView: turns listener notifications into a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameListener;
use crate::types::Cell;

const EMPTY: &str = " .";
const RESTING: &str = "[]";
const FALLING: &str = "##";

/// Latest cells reported by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    width: i32,
    height: i32,
    resting: Vec<Cell>,
    falling: Vec<Cell>,
    final_score: Option<u32>,
    dirty: bool,
}

impl BoardView {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            resting: Vec::new(),
            falling: Vec::new(),
            final_score: None,
            dirty: true,
        }
    }

    /// Score reported at game over
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Whether anything changed since the last [`take_dirty`](Self::take_dirty)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and reset the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Render the playfield as text rows, two columns per cell, framed.
    /// Falling cells above the top row are not drawn.
    pub fn render_lines(&self, score: u32) -> Vec<String> {
        let w = self.width.max(0) as usize;
        let h = self.height.max(0) as usize;
        let mut grid = vec![vec![EMPTY; w]; h];

        let mut paint = |cells: &[Cell], glyph: &'static str| {
            for cell in cells {
                if cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < w && (cell.y as usize) < h {
                    grid[cell.y as usize][cell.x as usize] = glyph;
                }
            }
        };
        paint(&self.resting, RESTING);
        paint(&self.falling, FALLING);

        let mut lines = Vec::with_capacity(h + 3);
        for row in &grid {
            lines.push(format!("|{}|", row.concat()));
        }
        lines.push(format!("+{}+", "-".repeat(w * 2)));
        lines.push(format!("lines: {score}"));
        if let Some(final_score) = self.final_score {
            lines.push(format!("game over - {final_score} line(s), any key to exit"));
        }
        lines
    }
}

impl GameListener for BoardView {
    fn board_changed(&mut self, cells: &[Cell]) {
        self.resting.clear();
        self.resting.extend_from_slice(cells);
        self.dirty = true;
    }

    fn piece_changed(&mut self, cells: &[Cell]) {
        self.falling.clear();
        self.falling.extend_from_slice(cells);
        self.dirty = true;
    }

    fn game_over(&mut self, score: u32) {
        self.falling.clear();
        self.final_score = Some(score);
        self.dirty = true;
    }
}
