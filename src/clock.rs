//! Clock arithmetic for the countdown.
//!
//! A [`ClockValue`] is a point on a 24-hour wall clock, a [`Remaining`] is a
//! duration shaped like one. Both stay on a single calendar day: there is no
//! rollover, so a stop time earlier than the start time is an error rather
//! than "tomorrow".
//!
//! ```rust
//! use countdown_timer::clock::{compute_initial_remaining, decrement_one_second, ClockValue};
//!
//! let start: ClockValue = "10:30:45".parse().unwrap();
//! let stop: ClockValue = "11:00:00".parse().unwrap();
//!
//! let remaining = compute_initial_remaining(start, stop).unwrap();
//! assert_eq!(remaining.to_string(), "00:29:15");
//! assert_eq!(decrement_one_second(remaining).to_string(), "00:29:14");
//! ```

use crate::error::CountdownError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// `hh:mm:ss` with one or two digits per group, capped at `23:59:59`.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(2[0-3]|[01]?[0-9]):([0-5]?[0-9]):([0-5]?[0-9])$")
        .expect("time pattern is a valid regex")
});

const SECONDS_PER_MINUTE: i32 = 60;
const MINUTES_PER_HOUR: i32 = 60;

/// A point on a 24-hour wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockValue {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockValue {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: ClockValue = ClockValue {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Builds a clock value, rejecting fields outside `23:59:59`.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, CountdownError> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(CountdownError::InvalidTime {
                hours,
                minutes,
                seconds,
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// The hours field.
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// The minutes field.
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The seconds field.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Seconds elapsed since `00:00:00` on the same day.
    pub fn seconds_since_midnight(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

impl FromStr for ClockValue {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CountdownError::InvalidFormat {
            input: s.to_string(),
        };
        let caps = TIME_PATTERN.captures(s).ok_or_else(invalid)?;

        // The pattern bounds every group, so parsing only fails on a regex bug.
        let field = |i: usize| -> Result<u8, CountdownError> {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<u8>().ok())
                .ok_or_else(invalid)
        };
        ClockValue::new(field(1)?, field(2)?, field(3)?)
    }
}

impl fmt::Display for ClockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Time left in a countdown.
///
/// Unlike [`ClockValue`] this is a duration: it can be zero and it only ever
/// shrinks, one second per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Remaining {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Remaining {
    /// No time left.
    pub const ZERO: Remaining = Remaining {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// The hours field.
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// The minutes field.
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The seconds field.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Whether the countdown has run out.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Number of ticks needed to reach zero.
    pub fn total_seconds(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// The outcome of subtracting a start time from a stop time.
///
/// `Err(CountdownError::EndNotAfterStart)` marks a reversed range.
pub type RemainingTime = Result<Remaining, CountdownError>;

/// Computes `stop - start`, borrowing seconds from minutes and minutes from
/// hours as in ordinary base-60 subtraction.
///
/// The hours difference is not wrapped: a stop time before the start time
/// yields [`CountdownError::EndNotAfterStart`]. Equal times give
/// [`Remaining::ZERO`].
pub fn compute_initial_remaining(start: ClockValue, stop: ClockValue) -> RemainingTime {
    let mut stop_hours = i32::from(stop.hours);
    let mut stop_minutes = i32::from(stop.minutes);
    let stop_seconds = i32::from(stop.seconds);

    let seconds = if stop_seconds >= i32::from(start.seconds) {
        stop_seconds - i32::from(start.seconds)
    } else {
        stop_minutes -= 1;
        SECONDS_PER_MINUTE + stop_seconds - i32::from(start.seconds)
    };

    let minutes = if stop_minutes >= i32::from(start.minutes) {
        stop_minutes - i32::from(start.minutes)
    } else {
        stop_hours -= 1;
        MINUTES_PER_HOUR + stop_minutes - i32::from(start.minutes)
    };

    let hours = stop_hours - i32::from(start.hours);
    if hours < 0 {
        return Err(CountdownError::EndNotAfterStart);
    }

    // Each field is now in range: hours <= 23, minutes and seconds in 0..=59.
    Ok(Remaining {
        hours: hours as u8,
        minutes: minutes as u8,
        seconds: seconds as u8,
    })
}

/// Removes one second from `remaining`, flooring at zero.
pub fn decrement_one_second(remaining: Remaining) -> Remaining {
    let Remaining {
        mut hours,
        mut minutes,
        mut seconds,
    } = remaining;

    if seconds > 0 {
        seconds -= 1;
    } else if minutes > 0 {
        seconds = 59;
        minutes -= 1;
    } else if hours > 0 {
        seconds = 59;
        minutes = 59;
        hours -= 1;
    }

    Remaining {
        hours,
        minutes,
        seconds,
    }
}
