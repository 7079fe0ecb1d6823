//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece merged there (its color index is derived from the kind).
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one line-clear pass, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is inside the board and filled (any kind)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Does `shape` placed with its top-left corner at (x, y) overlap a wall,
    /// the floor, the space above the board, or any filled cell?
    ///
    /// This is the only collision test in the crate; movement, rotation,
    /// gravity and spawning all go through it.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .minos()
            .iter()
            .any(|&(dx, dy)| !self.is_valid(x + dx, y + dy))
    }

    /// Write every occupied cell of `shape` at (x, y) as `kind`.
    ///
    /// Callers only merge at a position that passed [`Board::collides`]; an
    /// off-board cell trips a debug assertion and is otherwise skipped.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in shape.minos().iter() {
            let placed = self.set(x + dx, y + dy, Some(kind));
            debug_assert!(placed, "merged cell ({}, {}) is off the board", x + dx, y + dy);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top.
    /// Returns the number of rows removed (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }

        1
    }

    /// Clear all full rows, scanning bottom to top.
    ///
    /// After a row is removed the rows above slide into the same index, so the
    /// scan re-checks that index before moving up. Two stacked full rows are
    /// therefore both removed in one pass.
    ///
    /// Returns the indices the removed rows had before the pass started,
    /// bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                // Every earlier removal pulled this row down by one.
                cleared.push(row - cleared.len());
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Export as color indices (0 = empty, 1..7 = piece color), row by row.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map_or(0, |k| k.color_index());
            }
        }
    }

    /// Count of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from row strings, bottom-aligned.
    ///
    /// Each string is one row; `.` is empty and a piece letter (`i j l o s t z`,
    /// any case) fills the cell with that kind. Rows shorter than the board are
    /// padded with empty cells. Unknown characters count as empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Board;
    ///
    /// let board = Board::from_rows(&["IIIIIIIII."]);
    /// assert!(board.is_occupied(0, 19));
    /// assert!(!board.is_occupied(9, 19));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        for (i, line) in rows.iter().rev().take(BOARD_HEIGHT as usize).enumerate() {
            let y = (BOARD_HEIGHT as usize - 1 - i) as i8;
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                board.set(x as i8, y, PieceKind::from_char(ch));
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
