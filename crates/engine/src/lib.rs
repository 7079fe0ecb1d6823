//! Engine crate - runs the core state machine against a clock.
//!
//! The core ([`blockfall_core`]) never sees time. This crate adds the pieces a
//! real game loop needs around it:
//!
//! - [`clock`]: the [`Clock`] trait with a real and a manual (test) clock
//! - [`scheduler`]: [`GravityScheduler`], one tick per fixed period while running
//! - [`game`]: [`Game`], the driver that owns state, scheduler, clock and log
//! - [`config`]: [`EngineConfig`] read from `BLOCKFALL_*` environment variables
//! - [`event_log`]: optional JSON-lines log of core events
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{EngineConfig, Game, ManualClock};
//! use blockfall_types::GameCommand;
//!
//! let config = EngineConfig { seed: 7, ..EngineConfig::default() };
//! let mut game = Game::new(&config, ManualClock::new(0)).unwrap();
//!
//! game.on_input(GameCommand::MoveLeft);
//! game.clock().advance(1000);
//! assert!(game.pump().is_some());
//! ```

pub mod clock;
pub mod config;
pub mod event_log;
pub mod game;
pub mod scheduler;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use event_log::{EventLog, EventRecord};
pub use game::Game;
pub use scheduler::GravityScheduler;
