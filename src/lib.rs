#![warn(missing_docs)]

//! # countdown-timer
//!
//! A terminal countdown widget for [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//! Enter a start time and an end time as `hh:mm:ss`, press enter, and the
//! remaining duration counts down once per second until it reaches zero.
//!
//! ## Overview
//!
//! The widget is split the same way as any Elm Architecture component:
//!
//! - [`clock`] holds the time arithmetic: the duration between two wall-clock
//!   times and the one-second decrement.
//! - [`store`] is the state container: an immutable [`store::CountdownState`]
//!   changed only by [`store::reduce`].
//! - [`driver`] owns the tick stream and turns ticks into events.
//! - [`timeinput`], [`button`] and [`display`] are the view components.
//! - [`app`] composes them into a `bubbletea_rs::Model`.
//!
//! Times are on a single calendar day. A stop time earlier than the start
//! time is rejected, never read as "tomorrow".
//!
//! ## Embedding
//!
//! ```rust
//! use countdown_timer::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct Screen {
//!     countdown: CountdownWidget,
//! }
//!
//! impl Model for Screen {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let countdown = CountdownWidget::new(&Settings::default());
//!         (Self { countdown }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```
//!
//! ## Just the arithmetic
//!
//! ```rust
//! use countdown_timer::clock::{compute_initial_remaining, ClockValue};
//! use countdown_timer::CountdownError;
//!
//! let start: ClockValue = "23:59:59".parse().unwrap();
//! let stop: ClockValue = "00:00:01".parse().unwrap();
//! assert_eq!(
//!     compute_initial_remaining(start, stop),
//!     Err(CountdownError::EndNotAfterStart)
//! );
//! ```

pub mod app;
pub mod button;
pub mod clock;
pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod key;
pub mod logging;
pub mod store;
pub mod timeinput;

use bubbletea_rs::Cmd;

/// Focus handling shared by the widget's controls.
///
/// - **Focused**: the control receives keystrokes and draws its cursor or
///   highlight.
/// - **Blurred**: the control ignores keystrokes and renders plainly.
///
/// ```rust
/// use countdown_timer::prelude::*;
///
/// let mut field = timeinput_new();
/// assert!(!field.focused());
///
/// field.focus();
/// assert!(field.focused());
///
/// field.blur();
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use app::Model as CountdownWidget;
pub use button::Model as Button;
pub use clock::{ClockValue, Remaining, RemainingTime};
pub use config::Settings;
pub use driver::{Driver, TickMsg, Ticker};
pub use error::CountdownError;
pub use store::{CountdownConfig, CountdownState, Event, Store};
pub use timeinput::{new as timeinput_new, Model as TimeInput};

/// Prelude module for convenient imports.
///
/// ```rust
/// use countdown_timer::prelude::*;
///
/// let config = CountdownConfig::new(
///     "08:00:00".parse::<ClockValue>().unwrap(),
///     "08:00:30".parse::<ClockValue>().unwrap(),
/// );
/// assert_eq!(config.remaining().unwrap().total_seconds(), 30);
/// ```
pub mod prelude {
    pub use crate::app::Model as CountdownWidget;
    pub use crate::button::Model as Button;
    pub use crate::clock::{
        compute_initial_remaining, decrement_one_second, ClockValue, Remaining, RemainingTime,
    };
    pub use crate::config::Settings;
    pub use crate::display::format_remaining;
    pub use crate::driver::{Driver, TickMsg, Ticker};
    pub use crate::error::CountdownError;
    pub use crate::store::{reduce, CountdownConfig, CountdownState, Event, Store};
    pub use crate::timeinput::{new as timeinput_new, Model as TimeInput};
    pub use crate::Component;
}
