//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game command.
///
/// Letters match case-insensitively. Release events (reported by terminals
/// with the kitty protocol) map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameCommand::MoveLeft),
        KeyCode::Right => Some(GameCommand::MoveRight),
        KeyCode::Down => Some(GameCommand::SoftDrop),
        KeyCode::Up => Some(GameCommand::Rotate),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(GameCommand::MoveLeft),
            'd' => Some(GameCommand::MoveRight),
            's' => Some(GameCommand::SoftDrop),
            'w' => Some(GameCommand::Rotate),
            'p' => Some(GameCommand::TogglePause),
            'r' => Some(GameCommand::Restart),
            _ => None,
        },
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
