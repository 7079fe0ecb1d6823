//! Pieces module - tetromino shapes and clockwise rotation
//!
//! A shape is a small rectangular grid of occupied/free cells (at most 4x4).
//! Rotation is a plain transpose followed by reversing each row, with no
//! kick table: the caller decides whether the rotated grid fits.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_SIZE};

/// Offset of a single mino relative to the shape origin, as (column, row)
pub type MinoOffset = (i8, i8);

/// Occupied-cell grid of a piece.
///
/// Cells outside `rows x cols` are always false, so two shapes compare equal
/// exactly when their visible grids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from row strings where `#` marks an occupied cell.
    ///
    /// Rows must be non-empty, equally long and at most 4x4; this is only used
    /// with the fixed literals below.
    const fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < rows.len() {
            let mut c = 0;
            while c < rows[r].len() {
                cells[r][c] = rows[r][c] == b'#';
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            cells,
        }
    }

    /// Number of rows (bounding box height)
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Number of columns (bounding box width)
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is occupied. Out-of-range is false.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as (column, row) offsets, row-major order.
    pub fn minos(&self) -> ArrayVec<MinoOffset, 16> {
        let mut out = ArrayVec::new();
        for row in 0..self.rows as usize {
            for col in 0..self.cols as usize {
                if self.cells[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// The result has `width` rows and `height` columns; cell (r, c) of the
    /// rotated grid is cell (height - 1 - c, r) of the original.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let h = self.rows as usize;
        for (r, row) in cells.iter_mut().enumerate().take(self.cols as usize) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Render as `#`/`.` rows joined by `/`, handy in assertions.
    pub fn to_pattern(&self) -> String {
        let mut out = String::with_capacity(20);
        for row in 0..self.rows as usize {
            if row > 0 {
                out.push('/');
            }
            for col in 0..self.cols as usize {
                out.push(if self.cells[row][col] { '#' } else { '.' });
            }
        }
        out
    }
}

const I_SHAPE: Shape = Shape::from_rows(&[b"####"]);
const J_SHAPE: Shape = Shape::from_rows(&[b"..#", b"###"]);
const L_SHAPE: Shape = Shape::from_rows(&[b"#..", b"###"]);
const O_SHAPE: Shape = Shape::from_rows(&[b"##", b"##"]);
const S_SHAPE: Shape = Shape::from_rows(&[b".##", b"##."]);
const T_SHAPE: Shape = Shape::from_rows(&[b".#.", b"###"]);
const Z_SHAPE: Shape = Shape::from_rows(&[b"##.", b".##"]);

/// Canonical spawn shape for a piece kind
pub fn create_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Spawn column for a shape: horizontally centered, rounded toward the left.
pub fn spawn_x(shape: &Shape, board_width: u8) -> i8 {
    ((board_width as i8) - (shape.width() as i8)) / 2
}
