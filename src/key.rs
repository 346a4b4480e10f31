//! Key bindings and the one-line help built from them.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// A key code together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is written in the help line, e.g. `tab`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// A binding triggered by any of `keys`.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Disabled bindings never match and are left out of the help line.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }
}

/// Implemented by anything that can describe its bindings in a help line.
pub trait KeyMap {
    /// Bindings shown in the short help line, in order.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Renders `key desc • key desc` for the enabled bindings of `keymap`.
pub fn short_help_view<K: KeyMap>(keymap: &K) -> String {
    let key_style = Style::new().foreground(Color::from("245"));
    let desc_style = Style::new().foreground(Color::from("240"));
    let separator = Style::new()
        .foreground(Color::from("238"))
        .inline(true)
        .render(" • ");

    keymap
        .short_help()
        .into_iter()
        .filter(|b| b.enabled())
        .map(|b| {
            format!(
                "{} {}",
                key_style.clone().inline(true).render(&b.help().key),
                desc_style.clone().inline(true).render(&b.help().desc)
            )
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    struct Keys {
        start: Binding,
        quit: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.start, &self.quit]
        }
    }

    #[test]
    fn test_binding_matches_code_and_modifiers() {
        let quit = Binding::new(vec![
            KeyPress::from(KeyCode::Esc),
            KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ]);
        assert!(quit.matches(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(quit.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quit.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!quit.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut start = Binding::new(vec![KeyCode::Enter]);
        start.set_enabled(false);
        assert!(!start.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let mut keys = Keys {
            start: Binding::new(vec![KeyCode::Enter]).with_help("enter", "start"),
            quit: Binding::new(vec![KeyCode::Esc]).with_help("esc", "quit"),
        };
        let view = short_help_view(&keys);
        let plain = String::from_utf8_lossy(&strip_ansi_escapes::strip(view.as_bytes())).into_owned();
        assert_eq!(plain, "enter start • esc quit");

        keys.start.set_enabled(false);
        let view = short_help_view(&keys);
        let plain = String::from_utf8_lossy(&strip_ansi_escapes::strip(view.as_bytes())).into_owned();
        assert_eq!(plain, "esc quit");
    }
}
