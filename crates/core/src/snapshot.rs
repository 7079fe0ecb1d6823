//! Read-only view of the game for renderers.
//!
//! `GameSnapshot` is `Copy` and fixed-size, so a renderer can keep one around
//! and refill it every frame with [`GameState::snapshot_into`].
//!
//! [`GameState::snapshot_into`]: crate::GameState::snapshot_into

use crate::game_state::ActivePiece;
use crate::pieces::Shape;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color index per cell: 0 = empty, 1..7 = merged piece color
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub paused: bool,
    pub game_over: bool,
    pub piece_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            paused: false,
            game_over: false,
            piece_id: 0,
        }
    }
}

impl GameSnapshot {
    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.paused, self.game_over)
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Color index at (x, y), or 0 when out of range
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }
}
