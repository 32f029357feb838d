//! Key mapping from terminal events to player actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for; each screen interprets it on its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Reveal on the board, pick in the menu.
    Confirm,
    Flag,
    Restart,
    /// Back to the menu from a game, quit from the menu.
    Back,
}

/// Map a key event to an action. Releases and auto-repeats are ignored.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Action::MoveRight),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Char('f' | 'F') => Some(Action::Flag),
        KeyCode::Char('r' | 'R') => Some(Action::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Back),

        _ => None,
    }
}

/// Ctrl-C leaves the program from any screen.
pub fn is_force_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_move() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Action::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Action::MoveRight));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('K'))), Some(Action::MoveUp));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s'))), Some(Action::MoveDown));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('a'))), Some(Action::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('L'))), Some(Action::MoveRight));
    }

    #[test]
    fn game_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Action::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('F'))), Some(Action::Flag));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('Q'))), Some(Action::Back));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = KeyEvent::from(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;

        assert_eq!(map_key(key), None);
    }

    #[test]
    fn ctrl_c_force_quits() {
        assert!(is_force_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_force_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_force_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
