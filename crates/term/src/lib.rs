//! Terminal front end.
//!
//! Rendering happens in two steps: [`GameView`] paints a
//! [`crate::core::GameSnapshot`] into a [`FrameBuffer`] (pure, unit-testable),
//! then [`TerminalRenderer`] flushes only the cells that changed since the
//! previous frame.
//!
//! Board cells are drawn two columns wide to make them roughly square in
//! common terminal fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_for_index, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
