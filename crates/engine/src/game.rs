//! Driver that connects a [`GameState`] to a clock.
//!
//! The core stays a pure state machine; this type owns the scheduler and the
//! clock, forwards input, fires gravity ticks when they are due and hands core
//! events to the event log.

use anyhow::Result;

use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState, PieceSource, StepOutcome};
use crate::event_log::EventLog;
use crate::scheduler::GravityScheduler;
use crate::types::{GameCommand, GameStatus};

#[derive(Debug)]
pub struct Game<C: Clock> {
    state: GameState,
    scheduler: GravityScheduler,
    clock: C,
    log: Option<EventLog>,
}

impl<C: Clock> Game<C> {
    /// Start a new game from `config`: seeds the randomizer, opens the event
    /// log if one is configured, resets the board and arms gravity.
    pub fn new(config: &EngineConfig, clock: C) -> Result<Self> {
        let log = match config.log_path.as_deref() {
            Some(path) => Some(EventLog::open(path)?),
            None => None,
        };

        let mut game = Self {
            state: GameState::with_source(PieceSource::uniform(config.seed)),
            scheduler: GravityScheduler::new(config.tick_ms),
            clock,
            log,
        };
        game.reset();
        Ok(game)
    }

    /// Drive an existing state (already reset or built on a prepared board).
    pub fn from_state(state: GameState, period_ms: u64, clock: C) -> Self {
        let mut game = Self {
            state,
            scheduler: GravityScheduler::new(period_ms),
            clock,
            log: None,
        };
        game.sync_scheduler();
        game
    }

    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self.flush_events();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &GravityScheduler {
        &self.scheduler
    }

    pub fn event_log(&self) -> Option<&EventLog> {
        self.log.as_ref()
    }

    /// Reinitialize the board and spawn a fresh piece.
    pub fn reset(&mut self) {
        self.state.reset();
        self.after_mutation();
    }

    /// Apply one player command. Returns whether anything changed.
    pub fn on_input(&mut self, command: GameCommand) -> bool {
        let changed = self.state.apply_command(command);
        if let Some(log) = self.log.as_mut() {
            log.record_input(self.clock.now_ms(), command, changed);
        }
        self.after_mutation();
        changed
    }

    /// One gravity step, regardless of the schedule.
    ///
    /// Still a no-op while paused or after game-over.
    pub fn on_tick(&mut self) -> StepOutcome {
        let outcome = self.state.tick();
        self.after_mutation();
        outcome
    }

    /// Fire a gravity tick if one is due. Call this from the main loop.
    pub fn pump(&mut self) -> Option<StepOutcome> {
        let now = self.clock.now_ms();
        if self.scheduler.poll(now, self.state.status().is_running()) {
            Some(self.on_tick())
        } else {
            None
        }
    }

    /// Milliseconds until the next scheduled tick, or `None` while gravity is
    /// stopped (paused or game over).
    pub fn time_until_next_tick_ms(&self) -> Option<u64> {
        self.scheduler.time_until_due(self.clock.now_ms())
    }

    fn after_mutation(&mut self) {
        self.sync_scheduler();
        self.flush_events();
    }

    fn sync_scheduler(&mut self) {
        let now = self.clock.now_ms();
        self.scheduler.sync(now, self.state.status().is_running());
    }

    fn flush_events(&mut self) {
        let events = self.state.take_events();
        if let Some(log) = self.log.as_mut() {
            let now = self.clock.now_ms();
            for event in events.iter() {
                log.record(now, event);
            }
        }
    }
}
