use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};

/// Keys the slip screen reacts to
///
/// Handlers and tests speak this type; crossterm only appears at the edge in
/// [`KeyEvent::from_terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    F(u8),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::F(n) => Key::F(n),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };
        Some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers { ctrl: true },
        }
    }

    /// Translate a terminal key press; keys with no binding (media keys,
    /// bare modifiers, Insert and the like) yield `None`.
    pub fn from_terminal(event: CrosstermKeyEvent) -> Option<Self> {
        let key = Key::from_code(event.code)?;
        Some(Self {
            key,
            modifiers: Modifiers {
                ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_letter_keeps_modifier() {
        let event = CrosstermKeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(
            KeyEvent::from_terminal(event),
            Some(KeyEvent::with_ctrl(Key::Char('q')))
        );
    }

    #[test]
    fn function_keys_pass_through() {
        let event = CrosstermKeyEvent::new(KeyCode::F(10), KeyModifiers::NONE);
        assert_eq!(
            KeyEvent::from_terminal(event).map(|e| e.key),
            Some(Key::F(10))
        );
    }

    #[test]
    fn unbound_keys_are_dropped() {
        let event = CrosstermKeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(KeyEvent::from_terminal(event), None);
    }
}
