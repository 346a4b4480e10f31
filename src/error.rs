//! Errors surfaced to the user when a countdown cannot be started.

use thiserror::Error;

/// Message shown when a field does not hold a valid `hh:mm:ss` time.
pub const INVALID_FORMAT_MESSAGE: &str =
    "Invalid input. Time must be in the format hh:mm:ss and no larger than 23:59:59!";

/// Message shown when the end time is not after the start time.
pub const END_NOT_AFTER_START_MESSAGE: &str = "End time must be greater than start time!";

/// Every way a countdown submission can be rejected.
///
/// All variants are recoverable: the widget shows the message and leaves
/// its state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// A text field did not match `hh:mm:ss` (at most `23:59:59`).
    #[error("Invalid input. Time must be in the format hh:mm:ss and no larger than 23:59:59!")]
    InvalidFormat {
        /// The rejected field contents.
        input: String,
    },

    /// Hours, minutes or seconds were out of range when building a clock value directly.
    #[error("Invalid input. Time must be in the format hh:mm:ss and no larger than 23:59:59!")]
    InvalidTime {
        /// Requested hours.
        hours: u8,
        /// Requested minutes.
        minutes: u8,
        /// Requested seconds.
        seconds: u8,
    },

    /// The stop time is earlier than the start time on the same day.
    #[error("End time must be greater than start time!")]
    EndNotAfterStart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_constants() {
        let invalid = CountdownError::InvalidFormat {
            input: "99:00:00".to_string(),
        };
        assert_eq!(invalid.to_string(), INVALID_FORMAT_MESSAGE);

        let out_of_range = CountdownError::InvalidTime {
            hours: 24,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(out_of_range.to_string(), INVALID_FORMAT_MESSAGE);

        assert_eq!(
            CountdownError::EndNotAfterStart.to_string(),
            END_NOT_AFTER_START_MESSAGE
        );
    }
}
