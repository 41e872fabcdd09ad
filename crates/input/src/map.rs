//! Key mapping from terminal events to game actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::Direction;
use crate::types::GameAction;

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Map arrow keys (and WASD) to sprite demo directions.
pub fn direction_for_key(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

/// Whether a key event should be acted on.
///
/// Presses and the terminal's own auto-repeat count; releases never do.
pub fn accepts_key(key: KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Cell position of a left mouse button press, if this event is one.
pub fn mouse_press(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}
