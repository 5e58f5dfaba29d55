use chrono::NaiveDateTime;

use crate::{consts::DATEINT_DIGITS, prelude::*};

/// Broad category of a [`TimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// A numeric precondition did not hold.
    Validation,
    /// A name did not match any known weekday, timezone or format token.
    Lookup,
    /// Calendar components did not form a real date, time or instant.
    Construction,
}

/// Error type for every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Seconds since midnight was negative.
    #[error("Seconds in day must be non-negative, got {0}")]
    NegativeSecondsInDay(i64),

    /// Dateint did not have the expected number of decimal digits.
    #[error(
        "Dateints must have exactly {digits} digits (YYYYMMDD), got {0}",
        digits = DATEINT_DIGITS
    )]
    InvalidDateintLength(i64),

    /// Interval start is after its end.
    #[error("Invalid time interval: start ({start}) is after end ({end})")]
    InvalidInterval { start: NaiveDateTime, end: NaiveDateTime },

    /// First dateint of a range is after the last one.
    #[error("Invalid dateint range: first ({first}) is after last ({last})")]
    ReversedDateintRange { first: i64, last: i64 },

    /// Name is not one of the seven weekday names.
    #[error("Unknown weekday name: {0}")]
    UnknownWeekday(String),

    /// Name is not a known IANA timezone.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Format pattern contains a token with no formatting rule.
    #[error("Unsupported format token: {0}")]
    UnsupportedFormatToken(String),

    /// Components do not form a real calendar date.
    #[error("Invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// Components do not form a valid time of day.
    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: i64, minute: i64, second: i64 },

    /// Timestamp is outside the representable calendar range.
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    /// Date arithmetic left the representable calendar range.
    #[error("Date arithmetic overflowed the supported calendar range")]
    DateOutOfRange,

    /// Local time could not be mapped to an instant in its zone.
    #[error("Local time {0} does not exist in the requested timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

impl TimeError {
    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeSecondsInDay(_)
            | Self::InvalidDateintLength(_)
            | Self::InvalidInterval { .. }
            | Self::ReversedDateintRange { .. } => ErrorKind::Validation,
            Self::UnknownWeekday(_)
            | Self::UnknownTimezone(_)
            | Self::UnsupportedFormatToken(_) => ErrorKind::Lookup,
            Self::InvalidDate { .. }
            | Self::InvalidTime { .. }
            | Self::TimestampOutOfRange(_)
            | Self::DateOutOfRange
            | Self::NonexistentLocalTime(_) => ErrorKind::Construction,
        }
    }
}

pub type Result<T, E = TimeError> = std::result::Result<T, E>;
