//! Game state module - the falling-block state machine
//!
//! Owns the board, the active piece and the status flags. Every mutating call
//! runs to completion; there is no internal timer. Gravity arrives through
//! [`GameState::tick`], which an external scheduler calls once per period.

use arrayvec::ArrayVec;

use crate::pieces::{create_shape, spawn_x, MinoOffset, Shape};
use crate::rng::PieceSource;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// How many undrained events the state keeps before dropping the oldest
pub const EVENT_CAPACITY: usize = 16;

/// Pending core events
pub type EventQueue = ArrayVec<CoreEvent, EVENT_CAPACITY>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Canonical shape of `kind`, horizontally centered on the top row
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = create_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape, BOARD_WIDTH),
            y: 0,
        }
    }

    /// Absolute board positions of the occupied cells, as (x, y)
    pub fn cells(&self) -> ArrayVec<MinoOffset, 16> {
        self.shape
            .minos()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

/// Result of a gravity step (tick or soft drop)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing happened: paused, game over, or no game started
    Ignored,
    /// The active piece moved down one row
    Moved,
    /// The active piece landed and was merged
    Locked { lines_cleared: u8, game_over: bool },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    source: PieceSource,
    /// Monotonic id of the current piece (increments on every successful spawn)
    piece_id: u32,
    paused: bool,
    game_over: bool,
    started: bool,
    events: EventQueue,
}

impl GameState {
    /// Create an idle game with a uniform randomizer seeded by `seed`.
    ///
    /// Nothing is spawned until [`GameState::reset`].
    pub fn new(seed: u32) -> Self {
        Self::with_source(PieceSource::uniform(seed))
    }

    /// Create an idle game drawing kinds from `source`
    pub fn with_source(source: PieceSource) -> Self {
        Self {
            board: Board::new(),
            active: None,
            source,
            piece_id: 0,
            paused: false,
            game_over: false,
            started: false,
            events: EventQueue::new(),
        }
    }

    /// Start a game on a prepared board and spawn the first piece.
    ///
    /// The spawn may immediately end the game if the board blocks it.
    pub fn with_board(board: Board, source: PieceSource) -> Self {
        let mut state = Self::with_source(source);
        state.board = board;
        state.started = true;
        state.spawn();
        state
    }

    /// Empty the board, clear game-over and spawn a fresh piece.
    ///
    /// The paused flag is left as it is.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.game_over = false;
        self.started = true;
        self.push_event(CoreEvent::Reset);
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.paused, self.game_over)
    }

    /// Whether gravity ticks and movement commands currently apply
    pub fn is_playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pick a kind from the source and place it at the spawn position.
    ///
    /// Returns false and enters game-over when the spawn position is blocked;
    /// the active piece is cleared in that case.
    pub fn spawn(&mut self) -> bool {
        let kind = self.source.next_kind();
        let piece = ActivePiece::spawn(kind);

        if self.board.collides(&piece.shape, piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            self.push_event(CoreEvent::GameOver { kind });
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.push_event(CoreEvent::Spawned { kind, x: piece.x });
        true
    }

    /// Would the active piece collide if shifted by (dx, dy)?
    ///
    /// With no active piece there is nothing that could fit, so this is true.
    pub fn collides(&self, dx: i8, dy: i8) -> bool {
        match self.active {
            Some(active) => self.collides_with(dx, dy, &active.shape),
            None => true,
        }
    }

    /// Would `shape` collide at the active origin shifted by (dx, dy)?
    pub fn collides_with(&self, dx: i8, dy: i8, shape: &Shape) -> bool {
        match self.active {
            Some(active) => self.board.collides(shape, active.x + dx, active.y + dy),
            None => true,
        }
    }

    /// Shift the active piece one column (`direction` is -1 or +1).
    ///
    /// A blocked move is a no-op. Returns whether the piece moved.
    pub fn move_piece(&mut self, direction: i8) -> bool {
        debug_assert!(direction == -1 || direction == 1);
        if !self.is_playable() || self.collides(direction, 0) {
            return false;
        }
        if let Some(active) = self.active.as_mut() {
            active.x += direction;
            return true;
        }
        false
    }

    /// Rotate the active piece clockwise in place.
    ///
    /// The rotated shape is kept only if it fits at the current origin; there
    /// are no wall kicks. Returns whether the shape changed.
    pub fn rotate(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if self.collides_with(0, 0, &rotated) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Player-driven one-row drop. Lands the piece when blocked, same as a tick.
    pub fn soft_drop(&mut self) -> StepOutcome {
        self.step_down()
    }

    /// Gravity step: move down one row, or merge + clear lines + spawn.
    pub fn tick(&mut self) -> StepOutcome {
        self.step_down()
    }

    fn step_down(&mut self) -> StepOutcome {
        if !self.is_playable() {
            return StepOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return StepOutcome::Ignored;
        };

        if !self.collides(0, 1) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            return StepOutcome::Moved;
        }

        let lines_cleared = self.lock_piece(active);
        StepOutcome::Locked {
            lines_cleared,
            game_over: self.game_over,
        }
    }

    /// Merge `piece` into the board, clear full rows and spawn the next piece.
    ///
    /// Returns the number of rows cleared.
    fn lock_piece(&mut self, piece: ActivePiece) -> u8 {
        self.board.merge(&piece.shape, piece.x, piece.y, piece.kind);
        self.active = None;

        let lines_cleared = self.board.clear_full_rows().len() as u8;
        self.push_event(CoreEvent::Locked {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            lines_cleared,
        });

        self.spawn();
        lines_cleared
    }

    /// Flip the paused flag. Ignored once the game is over or before it
    /// started. Returns the resulting paused flag.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over || !self.started {
            return self.paused;
        }
        self.paused = !self.paused;
        self.push_event(if self.paused {
            CoreEvent::Paused
        } else {
            CoreEvent::Resumed
        });
        self.paused
    }

    /// Apply a player command. Returns whether any state changed.
    ///
    /// Movement, rotation and drops are ignored while paused or after
    /// game-over; only `TogglePause` and `Restart` act then.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_piece(-1),
            GameCommand::MoveRight => self.move_piece(1),
            GameCommand::Rotate => self.rotate(),
            GameCommand::SoftDrop => self.soft_drop() != StepOutcome::Ignored,
            GameCommand::TogglePause => {
                let before = self.paused;
                self.toggle_pause() != before
            }
            GameCommand::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Take and clear the pending events, oldest first.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: CoreEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
