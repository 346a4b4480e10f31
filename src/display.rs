//! Remaining-time display.

use crate::clock::RemainingTime;
use lipgloss_extras::prelude::*;

/// Rendered in place of a time when the bounds are reversed.
pub const FALLBACK: &str = "Nope!";

/// Label in front of the remaining time.
pub const LABEL: &str = "Remaining time: ";

/// Formats the remaining time as `hh:mm:ss`, or [`FALLBACK`] for a reversed range.
pub fn format_remaining(remaining: &RemainingTime) -> String {
    match remaining {
        Ok(left) => left.to_string(),
        Err(_) => FALLBACK.to_string(),
    }
}

/// Styled `Remaining time: hh:mm:ss` line.
#[derive(Debug, Clone)]
pub struct Model {
    /// Style of the label.
    pub label_style: Style,
    /// Style of the time while counting down.
    pub time_style: Style,
    /// Style of the fallback text.
    pub fallback_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            label_style: Style::new(),
            time_style: Style::new().bold(true),
            fallback_style: Style::new().foreground(Color::from("9")),
        }
    }
}

impl Model {
    /// A display with the default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the line for `remaining`.
    pub fn view(&self, remaining: &RemainingTime) -> String {
        let text = format_remaining(remaining);
        let style = if remaining.is_ok() {
            &self.time_style
        } else {
            &self.fallback_style
        };
        format!(
            "{}{}",
            self.label_style.clone().inline(true).render(LABEL),
            style.clone().inline(true).render(&text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{compute_initial_remaining, ClockValue, Remaining};
    use crate::error::CountdownError;

    fn strip(s: &str) -> String {
        String::from_utf8_lossy(&strip_ansi_escapes::strip(s.as_bytes())).into_owned()
    }

    #[test]
    fn test_format_zero_padded() {
        let start: ClockValue = "1:2:3".parse().unwrap();
        let stop: ClockValue = "11:22:33".parse().unwrap();
        let left = compute_initial_remaining(start, stop);
        assert_eq!(format_remaining(&left), "10:20:30");
        assert_eq!(format_remaining(&Ok(Remaining::ZERO)), "00:00:00");
    }

    #[test]
    fn test_format_reversed_range_uses_fallback() {
        assert_eq!(
            format_remaining(&Err(CountdownError::EndNotAfterStart)),
            FALLBACK
        );
    }

    #[test]
    fn test_view_has_label() {
        let display = Model::new();
        assert_eq!(
            strip(&display.view(&Ok(Remaining::ZERO))),
            "Remaining time: 00:00:00"
        );
        assert_eq!(
            strip(&display.view(&Err(CountdownError::EndNotAfterStart))),
            "Remaining time: Nope!"
        );
    }
}
