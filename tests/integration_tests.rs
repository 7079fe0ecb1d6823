//! Integration tests for the game rules (core state machine)

use blockfall::core::{Board, GameState, PieceSource, StepOutcome};
use blockfall::types::{CoreEvent, GameCommand, GameStatus, PieceKind};

fn start_with(kinds: &[PieceKind]) -> GameState {
    GameState::with_board(Board::new(), PieceSource::sequence(kinds))
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.started());
    assert!(state.active().is_none());
    assert_eq!(state.tick(), StepOutcome::Ignored);

    state.reset();
    assert!(state.started());
    assert!(state.active().is_some());
    assert_eq!(state.piece_id(), 1);
    assert_eq!(state.status(), GameStatus::Running);
}

#[test]
fn test_spawn_on_empty_board_never_collides() {
    for kind in PieceKind::ALL {
        let state = start_with(&[kind]);
        let active = state.active().expect("spawned");
        assert!(!state.game_over(), "{:?}", kind);
        assert_eq!(active.kind, kind);
        assert_eq!(active.y, 0);
        assert_eq!(active.x, if kind == PieceKind::O { 4 } else { 3 });
        assert!(!state.collides(0, 0));
    }
}

#[test]
fn test_drop_until_blocked_then_lock() {
    let mut state = start_with(&[PieceKind::T, PieceKind::I]);

    // T is two rows tall: 18 moves reach the floor.
    for _ in 0..18 {
        assert_eq!(state.tick(), StepOutcome::Moved);
    }
    assert_eq!(state.active().unwrap().y, 18);
    assert!(state.collides(0, 1));

    assert_eq!(
        state.tick(),
        StepOutcome::Locked {
            lines_cleared: 0,
            game_over: false
        }
    );
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.board().get(3, 19), Some(Some(PieceKind::T)));
    assert_eq!(state.board().get(4, 18), Some(Some(PieceKind::T)));

    let next = state.active().unwrap();
    assert_eq!(next.kind, PieceKind::I);
    assert_eq!(state.piece_id(), 2);
}

#[test]
fn test_soft_drop_matches_tick() {
    let mut a = start_with(&[PieceKind::S]);
    let mut b = start_with(&[PieceKind::S]);
    for _ in 0..25 {
        assert_eq!(a.tick(), b.soft_drop());
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_locking_clears_filled_rows() {
    let board = Board::from_rows(&["T.........", "OOOO..OOOO", "OOOO..OOOO"]);
    let mut state = GameState::with_board(board, PieceSource::sequence(&[PieceKind::O]));

    for _ in 0..18 {
        assert_eq!(state.tick(), StepOutcome::Moved);
    }
    assert_eq!(
        state.tick(),
        StepOutcome::Locked {
            lines_cleared: 2,
            game_over: false
        }
    );

    // Only the T block survives, shifted down to the floor.
    assert_eq!(state.board().filled_count(), 1);
    assert_eq!(state.board().get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(state.board().height(), 20);
}

#[test]
fn test_move_blocked_by_walls() {
    let mut state = start_with(&[PieceKind::O]);

    // O spawns at x = 4 and is 2 wide.
    for _ in 0..4 {
        assert!(state.apply_command(GameCommand::MoveLeft));
    }
    assert!(!state.apply_command(GameCommand::MoveLeft));
    assert_eq!(state.active().unwrap().x, 0);

    for _ in 0..8 {
        assert!(state.apply_command(GameCommand::MoveRight));
    }
    assert!(!state.apply_command(GameCommand::MoveRight));
    assert_eq!(state.active().unwrap().x, 8);
}

#[test]
fn test_move_blocked_by_stack() {
    let mut board = Board::new();
    board.set(2, 1, Some(PieceKind::J));
    let mut state = GameState::with_board(board, PieceSource::sequence(&[PieceKind::T]));

    // T bottom row spans x..x+2 on row 1; x = 3 touches the J at column 2.
    assert!(!state.apply_command(GameCommand::MoveLeft));
    assert_eq!(state.active().unwrap().x, 3);
    assert!(state.apply_command(GameCommand::MoveRight));
}

#[test]
fn test_rotate_against_right_wall_is_noop() {
    let mut state = start_with(&[PieceKind::I]);

    assert!(state.apply_command(GameCommand::Rotate));
    assert_eq!(state.active().unwrap().shape.to_pattern(), "#/#/#/#");

    // Vertical I is one column wide: from x = 3 it can reach column 9.
    for _ in 0..6 {
        assert!(state.apply_command(GameCommand::MoveRight));
    }
    assert!(!state.apply_command(GameCommand::MoveRight));
    assert_eq!(state.active().unwrap().x, 9);

    let before = state.active();
    assert!(!state.apply_command(GameCommand::Rotate));
    assert_eq!(state.active(), before);
}

#[test]
fn test_rotate_blocked_by_stack_is_noop() {
    let mut board = Board::new();
    board.set(3, 2, Some(PieceKind::L));
    let mut state = GameState::with_board(board, PieceSource::sequence(&[PieceKind::T]));

    // Rotated T is "#./##/#." at x = 3, which needs (3, 2).
    assert!(!state.apply_command(GameCommand::Rotate));
    assert_eq!(state.active().unwrap().shape.to_pattern(), ".#./###");
}

#[test]
fn test_pause_gates_commands_and_gravity() {
    let mut state = start_with(&[PieceKind::T]);

    assert!(state.apply_command(GameCommand::TogglePause));
    assert_eq!(state.status(), GameStatus::Paused);

    let before = state.active();
    assert!(!state.apply_command(GameCommand::MoveLeft));
    assert!(!state.apply_command(GameCommand::MoveRight));
    assert!(!state.apply_command(GameCommand::Rotate));
    assert!(!state.apply_command(GameCommand::SoftDrop));
    assert_eq!(state.tick(), StepOutcome::Ignored);
    assert_eq!(state.active(), before);

    assert!(state.apply_command(GameCommand::TogglePause));
    assert_eq!(state.tick(), StepOutcome::Moved);
}

#[test]
fn test_restart_while_paused_keeps_pause() {
    let mut state = start_with(&[PieceKind::T]);
    state.tick();
    state.apply_command(GameCommand::TogglePause);

    assert!(state.apply_command(GameCommand::Restart));
    assert!(state.paused());
    assert_eq!(state.active().unwrap().y, 0);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut board = Board::new();
    board.set(4, 0, Some(PieceKind::Z));
    let mut state = GameState::with_board(board.clone(), PieceSource::sequence(&[PieceKind::T]));

    assert!(state.game_over());
    assert!(state.active().is_none());
    assert_eq!(state.status(), GameStatus::GameOver);

    // Nothing mutates the board until restart.
    for _ in 0..5 {
        assert_eq!(state.tick(), StepOutcome::Ignored);
    }
    assert!(!state.apply_command(GameCommand::MoveLeft));
    assert!(!state.apply_command(GameCommand::SoftDrop));
    assert!(!state.apply_command(GameCommand::TogglePause));
    assert!(!state.paused());
    assert_eq!(state.board(), &board);

    assert!(state.apply_command(GameCommand::Restart));
    assert!(!state.game_over());
    assert!(state.active().is_some());
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_stacking_to_the_top_ends_game() {
    let mut state = start_with(&[PieceKind::O]);
    let mut ticks = 0;
    while !state.game_over() && ticks < 1_000 {
        state.tick();
        ticks += 1;
    }
    assert!(state.game_over());

    // Ten O pieces fill columns 4-5 from floor to ceiling.
    assert_eq!(state.board().filled_count(), 40);
    let events = state.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, CoreEvent::GameOver { kind: PieceKind::O })));
}

#[test]
fn test_events_describe_a_lock() {
    let mut state = start_with(&[PieceKind::O]);
    let events = state.take_events();
    assert_eq!(
        events.as_slice(),
        &[CoreEvent::Spawned {
            kind: PieceKind::O,
            x: 4
        }]
    );

    while !matches!(state.tick(), StepOutcome::Locked { .. }) {}
    let events = state.take_events();
    assert_eq!(
        events.as_slice(),
        &[
            CoreEvent::Locked {
                kind: PieceKind::O,
                x: 4,
                y: 18,
                lines_cleared: 0
            },
            CoreEvent::Spawned {
                kind: PieceKind::O,
                x: 4
            },
        ]
    );
    assert!(state.take_events().is_empty());
}

#[test]
fn test_same_seed_replays_same_pieces() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    a.reset();
    b.reset();
    for _ in 0..200 {
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.active(), b.active());
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_snapshot_reflects_state() {
    let mut state = start_with(&[PieceKind::L]);
    for _ in 0..19 {
        state.tick();
    }
    let snap = state.snapshot();
    assert_eq!(snap.cell(3, 19), PieceKind::L.color_index());
    assert_eq!(snap.cell(3, 18), PieceKind::L.color_index());
    assert_eq!(snap.cell(4, 18), 0);
    assert_eq!(snap.piece_id, 2);
    assert_eq!(snap.active.unwrap().kind, PieceKind::L);
    assert!(snap.playable());
}
