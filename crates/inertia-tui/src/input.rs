use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NotchDown,       // j/Down: same as one wheel notch down
    NotchUp,         // k/Up: same as one wheel notch up
    PageDown,        // Ctrl+D / PageDown: several notches at once
    PageUp,          // Ctrl+U / PageUp
    JumpToTop,
    JumpToBottom,
    ToggleMomentum,  // Space: start/stop the engine
    None,
}

/// Notches injected by a page action
pub const PAGE_NOTCHES: i32 = 5;

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::NotchDown,
        (KeyCode::Down, KeyModifiers::NONE) => Action::NotchDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::NotchUp,
        (KeyCode::Up, KeyModifiers::NONE) => Action::NotchUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::PageDown,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::PageUp,
        (KeyCode::PageUp, _) => Action::PageUp,

        // Jumps
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Char('G'), KeyModifiers::NONE) => Action::JumpToBottom,
        (KeyCode::End, _) => Action::JumpToBottom,

        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleMomentum,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_scroll_keys() {
        let cases = [
            (KeyCode::Char('j'), KeyModifiers::NONE, Action::NotchDown),
            (KeyCode::Up, KeyModifiers::NONE, Action::NotchUp),
            (KeyCode::Char('d'), KeyModifiers::CONTROL, Action::PageDown),
            (KeyCode::Char('G'), KeyModifiers::SHIFT, Action::JumpToBottom),
            (KeyCode::Char(' '), KeyModifiers::NONE, Action::ToggleMomentum),
        ];
        for (code, modifiers, expected) in cases {
            assert_eq!(handle_key_event(key(code, modifiers)), expected, "{:?}", code);
        }
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }
}
