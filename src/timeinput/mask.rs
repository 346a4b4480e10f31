//! Input masking for `hh:mm:ss` fields.
//!
//! The user only has to type digits: colons are appended once an hour or
//! minute group is complete, and a third digit typed straight after a
//! complete group is moved behind a colon. Backspacing over an auto-inserted
//! colon takes the digit before it along, so one keystroke undoes one digit.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest accepted value, `hh:mm:ss`.
pub const MAX_LEN: usize = 8;

/// Rewrites applied after every inserted character, first match wins.
static MASK_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // hours complete
        (r"^(\d{2})$", "${1}:"),
        (r"^(\d{2})(\d)$", "${1}:${2}"),
        // minutes complete after a one-digit hour
        (r"^(\d):(\d{2})$", "${1}:${2}:"),
        (r"^(\d):(\d{2})(\d)$", "${1}:${2}:${3}"),
        // minutes complete after a two-digit hour
        (r"^(\d{2}):(\d{2})$", "${1}:${2}:"),
        (r"^(\d{2}):(\d{2})(\d)$", "${1}:${2}:${3}"),
        // at most two second digits
        (r"^(\d):(\d):(\d{2})\d+$", "${1}:${2}:${3}"),
        (r"^(\d):(\d{2}):(\d{2})\d+$", "${1}:${2}:${3}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("mask rule is a valid regex"),
            replacement,
        )
    })
    .collect()
});

/// Values ending in a colon the mask inserted.
static TRAILING_COLON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:|\d{2}:\d{2}:|\d:\d{2}:)$").expect("trailing colon is a valid regex")
});

/// Only digits and colons may be typed into a time field.
pub fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit() || ch == ':'
}

/// Applies the first matching rewrite to `value`, or returns it unchanged.
pub fn mask(value: &str) -> String {
    for (pattern, replacement) in MASK_RULES.iter() {
        if pattern.is_match(value) {
            return pattern.replace(value, *replacement).into_owned();
        }
    }
    value.to_string()
}

/// Result of a backspace at the end of `value` when it ends in an
/// auto-inserted colon: the colon and the digit before it are removed.
///
/// Returns `None` when an ordinary one-character delete applies.
pub fn backspace_over_colon(value: &str) -> Option<String> {
    if !TRAILING_COLON.is_match(value) {
        return None;
    }
    let mut chars: Vec<char> = value.chars().collect();
    chars.truncate(chars.len() - 2);
    Some(chars.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_characters() {
        assert!("0123456789:".chars().all(is_allowed));
        assert!(!"a-/ .;".chars().any(is_allowed));
    }

    #[test]
    fn test_mask_table() {
        let cases = [
            ("1", "1"),
            ("12", "12:"),
            ("123", "12:3"),
            ("1:", "1:"),
            ("1:2", "1:2"),
            ("1:23", "1:23:"),
            ("1:234", "1:23:4"),
            ("12:3", "12:3"),
            ("12:34", "12:34:"),
            ("12:345", "12:34:5"),
            ("1:2:345", "1:2:34"),
            ("1:23:456", "1:23:45"),
            ("12:34:56", "12:34:56"),
            ("1:2:3", "1:2:3"),
            ("::", "::"),
        ];
        for (input, expected) in cases {
            assert_eq!(mask(input), expected, "mask({:?})", input);
        }
    }

    #[test]
    fn test_backspace_over_colon() {
        assert_eq!(backspace_over_colon("12:").as_deref(), Some("1"));
        assert_eq!(backspace_over_colon("12:34:").as_deref(), Some("12:3"));
        assert_eq!(backspace_over_colon("1:23:").as_deref(), Some("1:2"));
        assert_eq!(backspace_over_colon("12:3"), None);
        assert_eq!(backspace_over_colon("1:"), None);
        assert_eq!(backspace_over_colon(""), None);
    }
}
