//! Countdown state container.
//!
//! State is an immutable [`CountdownState`] value. Every change goes through
//! [`reduce`], a pure function of the current state and one [`Event`]. The
//! [`Store`] holds the current value and logs each transition, much like an
//! action logger sitting in front of a reducer.
//!
//! ```rust
//! use countdown_timer::clock::ClockValue;
//! use countdown_timer::store::{CountdownConfig, Event, Store};
//!
//! let mut store = Store::new();
//! let config = CountdownConfig::new(
//!     "10:00:00".parse::<ClockValue>().unwrap(),
//!     "10:00:02".parse::<ClockValue>().unwrap(),
//! );
//!
//! store.dispatch(Event::Initialize(config));
//! store.dispatch(Event::Start);
//! store.dispatch(Event::Decrement);
//!
//! assert!(store.state().started());
//! assert_eq!(store.state().countdown().remaining().clone().unwrap().to_string(), "00:00:01");
//! ```

use crate::clock::{
    compute_initial_remaining, decrement_one_second, ClockValue, Remaining, RemainingTime,
};
use tracing::debug;

/// User supplied bounds of one countdown session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownConfig {
    /// Wall-clock start of the countdown.
    pub start_time: ClockValue,
    /// Wall-clock end of the countdown.
    pub stop_time: ClockValue,
}

impl CountdownConfig {
    /// Pairs a start and a stop time.
    pub fn new(start_time: ClockValue, stop_time: ClockValue) -> Self {
        Self {
            start_time,
            stop_time,
        }
    }

    /// The duration between the two bounds, or an error when they are reversed.
    pub fn remaining(&self) -> RemainingTime {
        compute_initial_remaining(self.start_time, self.stop_time)
    }
}

/// The configured bounds together with the time still left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    start_time: ClockValue,
    stop_time: ClockValue,
    remaining: RemainingTime,
}

impl Countdown {
    fn zeroed() -> Self {
        Self {
            start_time: ClockValue::MIDNIGHT,
            stop_time: ClockValue::MIDNIGHT,
            remaining: Ok(Remaining::ZERO),
        }
    }

    /// Start time of the current session.
    pub fn start_time(&self) -> ClockValue {
        self.start_time
    }

    /// Stop time of the current session.
    pub fn stop_time(&self) -> ClockValue {
        self.stop_time
    }

    /// Time left, or the reason the bounds do not form a countdown.
    pub fn remaining(&self) -> &RemainingTime {
        &self.remaining
    }
}

/// Single source of truth for the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    started: bool,
    stopped: bool,
    countdown: Countdown,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CountdownState {
    /// The zeroed state every process starts from and every reset returns to.
    pub fn initial() -> Self {
        Self {
            started: false,
            stopped: true,
            countdown: Countdown::zeroed(),
        }
    }

    /// Whether a countdown has been started since the last reset.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether the countdown is stopped.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Bounds and remaining time.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }
}

/// Everything that can happen to the countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Replace the bounds and derive a fresh remaining time.
    Initialize(CountdownConfig),
    /// Mark the countdown as running.
    Start,
    /// One second elapsed.
    Decrement,
    /// Mark the countdown as stopped.
    Stop,
    /// Return to the zeroed initial state.
    Reset,
}

/// Applies one event. Never rejects: validation happens before events are issued.
pub fn reduce(state: &CountdownState, event: &Event) -> CountdownState {
    match event {
        Event::Initialize(config) => CountdownState {
            countdown: Countdown {
                start_time: config.start_time,
                stop_time: config.stop_time,
                remaining: config.remaining(),
            },
            ..state.clone()
        },
        Event::Start => CountdownState {
            started: true,
            stopped: false,
            ..state.clone()
        },
        Event::Decrement => CountdownState {
            countdown: Countdown {
                remaining: state
                    .countdown
                    .remaining
                    .clone()
                    .map(decrement_one_second),
                ..state.countdown.clone()
            },
            ..state.clone()
        },
        Event::Stop => CountdownState {
            stopped: true,
            ..state.clone()
        },
        Event::Reset => CountdownState::initial(),
    }
}

/// Holds the current [`CountdownState`] and applies events to it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: CountdownState,
    dispatched: u64,
}

impl Store {
    /// A store holding the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    /// How many events have been applied so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Reduces `event` into the held state and returns the new state.
    pub fn dispatch(&mut self, event: Event) -> &CountdownState {
        let next = reduce(&self.state, &event);
        self.dispatched += 1;
        debug!(
            seq = self.dispatched,
            ?event,
            prev = ?self.state,
            next = ?next,
            "dispatch"
        );
        self.state = next;
        &self.state
    }
}
