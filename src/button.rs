//! A focusable push button.

use crate::Component;
use bubbletea_rs::Cmd;
use lipgloss_extras::prelude::*;

/// Label of the button that submits the countdown form.
pub const START_LABEL: &str = "Start Countdown";

/// A single-line button rendered as `[ label ]`.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text inside the brackets.
    pub label: String,
    /// Style while blurred.
    pub style: Style,
    /// Style while focused.
    pub focused_style: Style,
    focus: bool,
}

/// An unfocused button with the given label.
pub fn new(label: impl Into<String>) -> Model {
    Model {
        label: label.into(),
        style: Style::new().foreground(Color::from("245")),
        focused_style: Style::new().bold(true).reverse(true),
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new(START_LABEL)
    }
}

impl Model {
    /// Renders the button.
    pub fn view(&self) -> String {
        let style = if self.focus {
            &self.focused_style
        } else {
            &self.style
        };
        style
            .clone()
            .inline(true)
            .render(&format!("[ {} ]", self.label))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let mut button = Model::default();
        assert!(!button.focused());
        assert!(button.focus().is_none());
        assert!(button.focused());
        button.blur();
        assert!(!button.focused());
    }

    #[test]
    fn test_view_contains_label() {
        let button = new("Go");
        let plain =
            String::from_utf8_lossy(&strip_ansi_escapes::strip(button.view().as_bytes())).into_owned();
        assert_eq!(plain, "[ Go ]");
    }
}
