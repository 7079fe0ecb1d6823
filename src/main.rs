//! Terminal runner (default binary).
//!
//! Reads `BLOCKFALL_*` settings from the environment, then loops: render,
//! wait for input until the next gravity tick is due, apply input, fire the
//! tick.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::core::GameSnapshot;
use blockfall::engine::{EngineConfig, Game, SystemClock};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Upper bound on one input wait, so a stopped game (paused or over) still
/// redraws after a resize.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let game = Game::new(&config, SystemClock::new())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: Game<SystemClock>) -> Result<()> {
    // Two columns per cell keeps blocks roughly square in most fonts.
    let view = GameView::new(2, 1);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let wait_ms = game
            .time_until_next_tick_ms()
            .map_or(IDLE_POLL_MS, |ms| ms.min(IDLE_POLL_MS));

        if event::poll(Duration::from_millis(wait_ms))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.on_input(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        game.pump();
    }
}
