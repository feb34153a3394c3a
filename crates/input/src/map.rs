//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') => Some(GameAction::Start),

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
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::HardDrop),

        // Rotation
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCw),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::RotateCcw),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn action(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(action(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Down), Some(GameAction::SoftDrop));

        assert_eq!(action(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Char('a')), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Char('L')), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Char('J')), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(action(KeyCode::Char('z')), Some(GameAction::RotateCw));
        assert_eq!(action(KeyCode::Char('Z')), Some(GameAction::RotateCw));
        assert_eq!(action(KeyCode::Char('x')), Some(GameAction::RotateCcw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(action(KeyCode::Char(' ')), Some(GameAction::Start));
        assert_eq!(action(KeyCode::Up), Some(GameAction::HardDrop));
        assert_eq!(action(KeyCode::Char('w')), Some(GameAction::HardDrop));
        assert_eq!(action(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(action(KeyCode::Char('c')), None);
        assert_eq!(action(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
