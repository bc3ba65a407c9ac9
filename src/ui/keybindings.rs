// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent};

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    Open,
    CloseModal,
    Reload,
    Quit,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Down => NavigationAction::Down,
        KeyCode::Up => NavigationAction::Up,
        KeyCode::Enter | KeyCode::Right => NavigationAction::Open,
        KeyCode::Esc | KeyCode::Left => NavigationAction::CloseModal,
        KeyCode::Char('r') => NavigationAction::Reload,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_letters_map_to_actions() {
        assert_eq!(key_to_action(&key(KeyCode::Down)), NavigationAction::Down);
        assert_eq!(key_to_action(&key(KeyCode::Enter)), NavigationAction::Open);
        assert_eq!(
            key_to_action(&key(KeyCode::Esc)),
            NavigationAction::CloseModal
        );
        assert_eq!(
            key_to_action(&key(KeyCode::Char('r'))),
            NavigationAction::Reload
        );
        assert_eq!(
            key_to_action(&key(KeyCode::Char('q'))),
            NavigationAction::Quit
        );
        assert_eq!(
            key_to_action(&key(KeyCode::Char('x'))),
            NavigationAction::None
        );
    }
}
