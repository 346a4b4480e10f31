//! Tests for the time field.

use super::*;
use crate::error::CountdownError;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn type_str(field: &mut Model, s: &str) {
    for ch in s.chars() {
        field.update(&key(KeyCode::Char(ch)));
    }
}

fn focused() -> Model {
    let mut field = new();
    let _ = field.focus();
    field
}

fn plain(s: &str) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes::strip(s.as_bytes())).into_owned()
}

#[test]
fn test_new_default_values() {
    let field = new();
    assert_eq!(field.value(), "");
    assert_eq!(field.position(), 0);
    assert_eq!(field.placeholder, "hh:mm:ss");
    assert_eq!(field.char_limit, 8);
    assert!(!field.focused());
}

#[test]
fn test_unfocused_field_ignores_keys() {
    let mut field = new();
    type_str(&mut field, "12");
    assert_eq!(field.value(), "");
}

#[test]
fn test_digits_only_get_colons() {
    let mut field = focused();
    type_str(&mut field, "1");
    assert_eq!(field.value(), "1");
    type_str(&mut field, "2");
    assert_eq!(field.value(), "12:");
    type_str(&mut field, "34");
    assert_eq!(field.value(), "12:34:");
    type_str(&mut field, "56");
    assert_eq!(field.value(), "12:34:56");
    assert_eq!(field.position(), 8);
    assert!(field.parse().is_ok());
}

#[test]
fn test_single_digit_hour() {
    let mut field = focused();
    type_str(&mut field, "7:05");
    assert_eq!(field.value(), "7:05:");
    type_str(&mut field, "09");
    assert_eq!(field.value(), "7:05:09");
    assert_eq!(field.parse().unwrap().to_string(), "07:05:09");
}

#[test]
fn test_seconds_limited_to_two_digits() {
    let mut field = focused();
    type_str(&mut field, "1:2:345");
    assert_eq!(field.value(), "1:2:34");
}

#[test]
fn test_char_limit_stops_input() {
    let mut field = focused();
    type_str(&mut field, "1234567890");
    assert_eq!(field.value(), "12:34:56");
}

#[test]
fn test_other_keystrokes_suppressed() {
    let mut field = focused();
    type_str(&mut field, "a1-b. 0");
    assert_eq!(field.value(), "10:");

    // Control combinations are not text.
    field.update(&ctrl('5'));
    assert_eq!(field.value(), "10:");
}

#[test]
fn test_shifted_colon_is_accepted() {
    let mut field = focused();
    type_str(&mut field, "1");
    let colon: Msg = Box::new(KeyMsg {
        key: KeyCode::Char(':'),
        modifiers: KeyModifiers::SHIFT,
    });
    field.update(&colon);
    assert_eq!(field.value(), "1:");
}

#[test]
fn test_backspace_removes_auto_colon_with_digit() {
    let mut field = focused();
    type_str(&mut field, "12");
    assert_eq!(field.value(), "12:");
    field.update(&key(KeyCode::Backspace));
    assert_eq!(field.value(), "1");

    type_str(&mut field, "2345");
    assert_eq!(field.value(), "12:34:5");
    field.update(&key(KeyCode::Backspace));
    assert_eq!(field.value(), "12:34:");
    field.update(&key(KeyCode::Backspace));
    assert_eq!(field.value(), "12:3");
}

#[test]
fn test_backspace_in_the_middle_is_plain() {
    let mut field = focused();
    field.set_value("12:34:56");
    field.set_cursor(3);
    field.update(&key(KeyCode::Backspace));
    assert_eq!(field.value(), "1234:56");
    assert_eq!(field.position(), 2);
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut field = focused();
    field.set_value("1:2:3");
    field.cursor_start();
    field.update(&key(KeyCode::Backspace));
    assert_eq!(field.value(), "1:2:3");
}

#[test]
fn test_cursor_movement_and_delete() {
    let mut field = focused();
    field.set_value("10:00:00");
    field.update(&key(KeyCode::Home));
    assert_eq!(field.position(), 0);
    field.update(&key(KeyCode::Right));
    assert_eq!(field.position(), 1);
    field.update(&key(KeyCode::Delete));
    assert_eq!(field.value(), "1:00:00");
    field.update(&key(KeyCode::End));
    assert_eq!(field.position(), 7);
    field.update(&key(KeyCode::Right));
    assert_eq!(field.position(), 7);
    field.update(&key(KeyCode::Left));
    assert_eq!(field.position(), 6);
}

#[test]
fn test_ctrl_u_clears_before_cursor() {
    let mut field = focused();
    field.set_value("10:20:30");
    field.set_cursor(3);
    field.update(&ctrl('u'));
    assert_eq!(field.value(), "20:30");
    assert_eq!(field.position(), 0);
}

#[test]
fn test_set_value_filters_and_truncates() {
    let mut field = new();
    field.set_value("1a2:3b4:56789");
    assert_eq!(field.value(), "12:34:56");
    assert_eq!(field.position(), 8);
}

#[test]
fn test_reset() {
    let mut field = focused();
    type_str(&mut field, "123");
    field.reset();
    assert_eq!(field.value(), "");
    assert_eq!(field.position(), 0);
}

#[test]
fn test_parse_errors() {
    let mut field = focused();
    type_str(&mut field, "99");
    assert_eq!(
        field.parse(),
        Err(CountdownError::InvalidFormat {
            input: "99:".to_string()
        })
    );

    field.set_value("24:00:00");
    assert!(field.parse().is_err());

    field.set_value("23:59:59");
    assert!(field.parse().is_ok());
}

#[test]
fn test_placeholder_view() {
    let field = new().with_prompt("Start time: ");
    assert_eq!(plain(&field.view()), "Start time: hh:mm:ss");
}

#[test]
fn test_value_view() {
    let mut field = focused().with_prompt("> ");
    field.set_value("1:2:3");
    assert_eq!(plain(&field.view()), "> 1:2:3 ");

    field.blur();
    assert_eq!(plain(&field.view()), "> 1:2:3");
}
