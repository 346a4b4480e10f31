//! Core model for the time field.

use super::keymap::{default_key_map, KeyMap};
use super::mask::{backspace_over_colon, is_allowed, mask, MAX_LEN};
use crate::clock::ClockValue;
use crate::error::CountdownError;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use tracing::trace;

/// Placeholder shown while a field is empty.
pub const PLACEHOLDER: &str = "hh:mm:ss";

/// A single-line `hh:mm:ss` input with masking.
///
/// Only digits and colons can be typed. Colons are filled in as groups
/// complete (see [`super::mask`]). The value is parsed on demand with
/// [`Model::parse`]; partial values are fine while typing.
///
/// ```rust
/// use countdown_timer::timeinput;
/// use countdown_timer::Component;
///
/// let mut field = timeinput::new();
/// field.focus();
/// for ch in "123456".chars() {
///     field.insert_char(ch);
/// }
/// assert_eq!(field.value(), "12:34:56");
/// assert!(field.parse().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Label shown before the field, e.g. `Start time: `.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style of the cursor block.
    pub cursor_style: Style,
    /// Editing keys.
    pub key_map: KeyMap,
    /// Maximum number of characters accepted.
    pub char_limit: usize,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,
}

/// Creates an empty, unfocused field with the `hh:mm:ss` placeholder.
pub fn new() -> Model {
    Model {
        prompt: String::new(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: PLACEHOLDER.to_string(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new(),
        key_map: default_key_map(),
        char_limit: MAX_LEN,
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Sets the prompt shown before the field.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Current contents.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the contents, dropping characters that cannot be typed and
    /// anything past the character limit. No masking is applied.
    pub fn set_value(&mut self, s: &str) {
        self.value = s
            .chars()
            .filter(|c| is_allowed(*c))
            .take(self.char_limit)
            .collect();
        self.pos = self.value.len();
    }

    /// Cursor position, in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Clears the field.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Parses the contents as a clock value.
    pub fn parse(&self) -> Result<ClockValue, CountdownError> {
        self.value().parse()
    }

    /// Types one character at the cursor.
    ///
    /// Characters other than digits and `:` are suppressed, as is anything
    /// beyond the character limit. When masking rewrites the value the cursor
    /// moves to its end.
    pub fn insert_char(&mut self, ch: char) {
        if !is_allowed(ch) {
            trace!(?ch, "suppressed keystroke");
            return;
        }
        if self.value.len() >= self.char_limit {
            return;
        }

        let mut candidate = self.value.clone();
        candidate.insert(self.pos, ch);
        let typed: String = candidate.iter().collect();
        let masked = mask(&typed);

        if masked == typed {
            self.value = candidate;
            self.pos += 1;
        } else {
            self.value = masked.chars().take(self.char_limit).collect();
            self.pos = self.value.len();
        }
    }

    /// Deletes the character before the cursor. At the end of the value an
    /// auto-inserted colon is removed together with the digit before it.
    pub fn delete_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        if self.pos == self.value.len() {
            if let Some(shorter) = backspace_over_colon(&self.value()) {
                self.value = shorter.chars().collect();
                self.pos = self.value.len();
                return;
            }
        }
        self.value.remove(self.pos - 1);
        self.pos -= 1;
    }

    /// Deletes the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.pos < self.value.len() {
            self.value.remove(self.pos);
        }
    }

    /// Deletes everything before the cursor.
    pub fn delete_before_cursor(&mut self) {
        self.value.drain(..self.pos);
        self.pos = 0;
    }

    /// Handles key messages while focused. Other messages are ignored.
    pub fn update(&mut self, msg: &Msg) {
        if !self.focus {
            return;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return;
        };

        if self.handle_editing_keys(key_msg) {
            return;
        }
        self.handle_character_input(key_msg);
    }

    fn handle_editing_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let keys = &self.key_map;
        if keys.delete_character_backward.matches(key_msg) {
            self.delete_backward();
        } else if keys.delete_character_forward.matches(key_msg) {
            self.delete_forward();
        } else if keys.delete_before_cursor.matches(key_msg) {
            self.delete_before_cursor();
        } else if keys.character_backward.matches(key_msg) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if keys.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if keys.line_start.matches(key_msg) {
            self.cursor_start();
        } else if keys.line_end.matches(key_msg) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        // Shift is allowed: some terminals report ':' with it.
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_char(ch);
            }
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new();
        model.focus = true;
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, &msg);
        None
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
