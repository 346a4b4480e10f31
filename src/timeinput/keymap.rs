//! Key bindings for the time field.

use crate::key::{Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Editing keys understood by a time field. Digits and colons are inserted
/// directly and need no binding.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Clear everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Move to start of the field.
    pub line_start: Binding,
    /// Move to end of the field.
    pub line_end: Binding,
}

/// The default editing keys.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: Binding::new(vec![
            KeyPress::from(KeyCode::Right),
            KeyPress::from((KeyCode::Char('f'), KeyModifiers::CONTROL)),
        ]),
        character_backward: Binding::new(vec![
            KeyPress::from(KeyCode::Left),
            KeyPress::from((KeyCode::Char('b'), KeyModifiers::CONTROL)),
        ]),
        delete_character_backward: Binding::new(vec![
            KeyPress::from(KeyCode::Backspace),
            KeyPress::from((KeyCode::Char('h'), KeyModifiers::CONTROL)),
        ]),
        delete_character_forward: Binding::new(vec![
            KeyPress::from(KeyCode::Delete),
            KeyPress::from((KeyCode::Char('d'), KeyModifiers::CONTROL)),
        ]),
        delete_before_cursor: Binding::new(vec![KeyPress::from((
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        ))]),
        line_start: Binding::new(vec![
            KeyPress::from(KeyCode::Home),
            KeyPress::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
        ]),
        line_end: Binding::new(vec![
            KeyPress::from(KeyCode::End),
            KeyPress::from((KeyCode::Char('e'), KeyModifiers::CONTROL)),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}
