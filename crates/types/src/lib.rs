//! Shared types - piece kinds, commands, status flags and constants
//!
//! Everything here is plain data with no dependencies, so it can be used from
//! the core rules, the input mapping and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing
//!
//! Gravity is a single fixed period, [`TICK_MS`] (1000 ms). There is no level
//! progression, so the period never changes during a game.
//!
//! # Colors
//!
//! Each piece kind owns a fixed 1-based color index, which is also the value
//! written into the board when a piece is merged:
//!
//! | Kind | Index | Color |
//! |------|-------|-------|
//! | I | 1 | cyan |
//! | J | 2 | blue |
//! | L | 3 | orange |
//! | O | 4 | yellow |
//! | S | 5 | green |
//! | T | 6 | purple |
//! | Z | 7 | red |

/// Board width in columns
pub const BOARD_WIDTH: u8 = 10;

/// Board height in rows
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity period in milliseconds
pub const TICK_MS: u64 = 1000;

/// Largest bounding box any shape can occupy (rows or columns)
pub const MAX_SHAPE_SIZE: usize = 4;

/// The seven tetromino kinds.
///
/// Declaration order matches the color index order, so `kind as u8 + 1` is the
/// color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in color index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// 1-based color index written into the board on merge.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_index(), 1);
    /// assert_eq!(PieceKind::Z.color_index(), 7);
    /// ```
    pub fn color_index(&self) -> u8 {
        *self as u8 + 1
    }

    /// Inverse of [`PieceKind::color_index`]. Returns `None` for 0 (empty) and
    /// anything above 7.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color_index(4), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_color_index(0), None);
    /// assert_eq!(PieceKind::from_color_index(8), None);
    /// ```
    pub fn from_color_index(index: u8) -> Option<Self> {
        match index {
            1..=7 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    /// Parse from a letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(PieceKind::I),
            'j' => Some(PieceKind::J),
            'l' => Some(PieceKind::L),
            'o' => Some(PieceKind::O),
            's' => Some(PieceKind::S),
            't' => Some(PieceKind::T),
            'z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse from a one-letter string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("tt"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Lowercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Discrete player commands delivered by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece one row; lands it if blocked
    SoftDrop,
    /// Flip the paused flag
    TogglePause,
    /// Reinitialize the board and spawn a fresh piece
    Restart,
}

impl GameCommand {
    /// camelCase name, as written to the event log's `input` records
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::TogglePause.as_str(), "togglePause");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::Rotate => "rotate",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Restart => "restart",
        }
    }
}

/// Coarse game status derived from the paused and game-over flags.
///
/// Game-over wins over paused: a finished game reports `GameOver` even if the
/// pause flag happens to be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn from_flags(paused: bool, game_over: bool) -> Self {
        if game_over {
            GameStatus::GameOver
        } else if paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    /// Whether the gravity scheduler should be ticking
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Core-side event recorded by a mutating call.
///
/// Observers (the event log, tests) drain these after each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A new active piece was placed at its spawn column
    Spawned { kind: PieceKind, x: i8 },
    /// The active piece was merged into the board at (x, y)
    Locked {
        kind: PieceKind,
        x: i8,
        y: i8,
        lines_cleared: u8,
    },
    /// A spawn of `kind` collided immediately; the game is over
    GameOver { kind: PieceKind },
    Paused,
    Resumed,
    /// Board emptied and game-over cleared
    Reset,
}

impl CoreEvent {
    /// Short camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreEvent::Spawned { .. } => "spawned",
            CoreEvent::Locked { .. } => "locked",
            CoreEvent::GameOver { .. } => "gameOver",
            CoreEvent::Paused => "paused",
            CoreEvent::Resumed => "resumed",
            CoreEvent::Reset => "reset",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a merged piece of that kind
pub type Cell = Option<PieceKind>;
