//! Engine tests - gravity scheduling against a manual clock and the event log

use std::fs;
use std::path::PathBuf;

use blockfall::core::{Board, GameState, PieceSource, StepOutcome};
use blockfall::engine::{EngineConfig, EventLog, Game, GravityScheduler, ManualClock};
use blockfall::types::{GameCommand, GameStatus, PieceKind};

fn temp_log_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "blockfall-{}-{}.jsonl",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_scheduler_skips_missed_ticks() {
    let mut s = GravityScheduler::new(100);
    assert!(!s.poll(0, true));
    assert!(s.poll(350, true));
    // Only one tick for the late poll; the next is a full period away.
    assert!(!s.poll(360, true));
    assert_eq!(s.time_until_due(360), Some(90));
}

#[test]
fn test_piece_reaches_floor_after_period_times_rows() {
    let state = GameState::with_board(Board::new(), PieceSource::sequence(&[PieceKind::I]));
    let mut game = Game::from_state(state, 1000, ManualClock::new(0));

    // Horizontal I is one row tall: 19 moves to reach row 19.
    let mut moved = 0;
    for _ in 0..19 {
        game.clock().advance(1000);
        if game.pump() == Some(StepOutcome::Moved) {
            moved += 1;
        }
    }
    assert_eq!(moved, 19);
    assert_eq!(game.state().active().unwrap().y, 19);

    game.clock().advance(1000);
    assert!(matches!(game.pump(), Some(StepOutcome::Locked { .. })));
    assert_eq!(game.state().board().filled_count(), 4);
}

#[test]
fn test_pump_between_deadlines_does_nothing() {
    let state = GameState::with_board(Board::new(), PieceSource::sequence(&[PieceKind::T]));
    let mut game = Game::from_state(state, 500, ManualClock::new(10));
    for _ in 0..10 {
        game.clock().advance(40);
        assert_eq!(game.pump(), None);
    }
    game.clock().advance(100);
    assert_eq!(game.pump(), Some(StepOutcome::Moved));
}

#[test]
fn test_restart_after_game_over_resumes_gravity() {
    let mut board = Board::new();
    board.set(3, 0, Some(PieceKind::S));
    let state = GameState::with_board(board, PieceSource::sequence(&[PieceKind::I]));
    let mut game = Game::from_state(state, 1000, ManualClock::new(0));

    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.time_until_next_tick_ms(), None);
    assert!(!game.on_input(GameCommand::TogglePause));

    game.clock().advance(3000);
    assert!(game.on_input(GameCommand::Restart));
    assert_eq!(game.time_until_next_tick_ms(), Some(1000));
    game.clock().advance(1000);
    assert_eq!(game.pump(), Some(StepOutcome::Moved));
}

#[test]
fn test_config_from_lookup_drives_game() {
    let config = EngineConfig::from_lookup(|key| match key {
        "BLOCKFALL_SEED" => Some("5".to_string()),
        "BLOCKFALL_TICK_MS" => Some("40".to_string()),
        _ => None,
    });
    assert_eq!(config.seed, 5);
    assert_eq!(config.log_path, None);

    let game = Game::new(&config, ManualClock::new(0)).unwrap();
    assert_eq!(game.scheduler().period_ms(), 40);

    let mut replay = GameState::new(5);
    replay.reset();
    assert_eq!(game.state().active(), replay.active());
}

#[test]
fn test_event_log_writes_json_lines() {
    let path = temp_log_path("events");
    let config = EngineConfig {
        seed: 3,
        tick_ms: 1000,
        log_path: Some(path.to_string_lossy().into_owned()),
    };

    let mut game = Game::new(&config, ManualClock::new(0)).unwrap();
    game.clock().advance(250);
    game.on_input(GameCommand::TogglePause);
    game.on_input(GameCommand::TogglePause);
    assert_eq!(game.event_log().unwrap().records_written(), 6);
    drop(game);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 6);

    assert_eq!(lines[0]["event"], "reset");
    assert_eq!(lines[0]["t_ms"], 0);
    assert_eq!(lines[1]["event"], "spawned");
    assert!(lines[1]["kind"].is_string());
    assert!(lines[1]["x"].is_number());

    // Each command is logged ahead of the events it caused.
    assert_eq!(lines[2]["event"], "input");
    assert_eq!(lines[2]["command"], "togglePause");
    assert_eq!(lines[2]["applied"], true);
    assert_eq!(lines[2]["t_ms"], 250);
    assert_eq!(lines[3]["event"], "paused");
    assert!(lines[3].get("kind").is_none());
    assert!(lines[3].get("command").is_none());
    assert_eq!(lines[4]["command"], "togglePause");
    assert_eq!(lines[5]["event"], "resumed");

    let _ = fs::remove_file(&path);
}

#[test]
fn test_event_log_marks_gated_input_as_not_applied() {
    let path = temp_log_path("gated");
    let mut board = Board::new();
    board.set(4, 0, Some(PieceKind::L));
    let state = GameState::with_board(board, PieceSource::sequence(&[PieceKind::T]));
    let mut game = Game::from_state(state, 1000, ManualClock::new(0))
        .with_event_log(EventLog::open(&path).unwrap());

    assert!(!game.on_input(GameCommand::MoveLeft));
    assert!(game.on_input(GameCommand::Restart));
    drop(game);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let events: Vec<&str> = lines.iter().map(|v| v["event"].as_str().unwrap()).collect();
    assert_eq!(
        events,
        vec!["gameOver", "input", "input", "reset", "spawned"]
    );
    assert_eq!(lines[1]["command"], "moveLeft");
    assert_eq!(lines[1]["applied"], false);
    assert_eq!(lines[2]["command"], "restart");
    assert_eq!(lines[2]["applied"], true);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_event_log_attached_later_sees_later_events() {
    let path = temp_log_path("attach");
    let state = GameState::with_board(Board::new(), PieceSource::sequence(&[PieceKind::Z]));
    let mut game = Game::from_state(state, 1000, ManualClock::new(0))
        .with_event_log(EventLog::open(&path).unwrap());

    // Spawn event was already pending when the log was attached.
    assert_eq!(game.event_log().unwrap().records_written(), 1);

    while !matches!(game.on_tick(), StepOutcome::Locked { .. }) {}
    let text = fs::read_to_string(&path).unwrap();
    let last_two: Vec<&str> = text.lines().rev().take(2).collect();
    assert!(last_two[1].contains("\"event\":\"locked\""));
    assert!(last_two[1].contains("\"lines_cleared\":0"));
    assert!(last_two[0].contains("\"event\":\"spawned\""));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_unopenable_log_path_is_an_error() {
    let config = EngineConfig {
        seed: 1,
        tick_ms: 1000,
        log_path: Some("/nonexistent-dir/blockfall/events.jsonl".to_string()),
    };
    let err = Game::new(&config, ManualClock::new(0)).unwrap_err();
    assert!(err.to_string().contains("event log"));
}
