//! Masked `hh:mm:ss` text field.
//!
//! The field accepts digits and colons only, inserts colons as hour and
//! minute groups complete, and parses to a [`crate::clock::ClockValue`] on
//! demand. It follows the same shape as the other components: a `Model`
//! with `update()` and `view()`, focus handled through [`crate::Component`].

pub mod keymap;
pub mod mask;
pub mod model;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model, PLACEHOLDER};
