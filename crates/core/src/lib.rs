//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game and nothing else. It
//! has no dependencies on terminals, clocks or I/O:
//!
//! - **Deterministic**: the same seed (or piece sequence) replays the same game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Zero-allocation**: boards, shapes and event queues are fixed-size
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, the single collision test, merging and line clears
//! - [`pieces`]: the seven canonical shapes and clockwise rotation
//! - [`rng`]: uniform piece selection (seeded LCG) and fixed sequences
//! - [`game_state`]: the active piece, status flags and the step functions
//! - [`snapshot`]: read-only, copyable view for renderers
//!
//! # Rules
//!
//! - A new piece spawns on row 0, horizontally centered. If it overlaps
//!   anything the game is over until [`GameState::reset`].
//! - Moving and rotating are no-ops when the result would collide. Rotation
//!   is clockwise with no wall kicks.
//! - A gravity step moves the piece down one row; when it cannot, the piece is
//!   merged, full rows are cleared bottom to top and the next piece spawns.
//! - Pausing stops gravity and ignores movement until resumed.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, StepOutcome};
//! use blockfall_types::GameCommand;
//!
//! let mut game = GameState::new(12345);
//! game.reset();
//!
//! game.apply_command(GameCommand::MoveRight);
//! game.apply_command(GameCommand::Rotate);
//! assert_eq!(game.tick(), StepOutcome::Moved);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The core never looks at a clock. Call [`GameState::tick`] once per gravity
//! period (see `blockfall-engine` for a scheduler that does this).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{ActivePiece, EventQueue, GameState, StepOutcome};
pub use pieces::{create_shape, Shape};
pub use rng::{PieceSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
