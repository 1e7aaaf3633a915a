//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command.
///
/// WASD (either case) and the arrow keys move; Esc and Ctrl+C quit.
/// Every other key maps to `None` and is ignored by the game loop.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    let dir = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
        _ => return None,
    };
    Some(Command::Move(dir))
}

/// Check if key should quit the game.
///
/// Raw mode swallows SIGINT, so Ctrl+C has to be handled as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys_either_case() {
        for (lower, upper, dir) in [
            ('w', 'W', Direction::Up),
            ('a', 'A', Direction::Left),
            ('s', 'S', Direction::Down),
            ('d', 'D', Direction::Right),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(lower))),
                Some(Command::Move(dir))
            );
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(upper))),
                Some(Command::Move(dir))
            );
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        for code in [
            KeyCode::Char('q'),
            KeyCode::Char('c'),
            KeyCode::Char(' '),
            KeyCode::Enter,
            KeyCode::Tab,
        ] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(Command::Quit)
        );
    }
}
