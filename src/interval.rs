use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TimeError},
    prelude::*,
};

/// A closed interval between two points in time (inclusive).
/// The start must be less than or equal to the end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{start} -> {end}")]
#[serde(try_from = "RawTimeInterval")]
pub struct TimeInterval {
    start: NaiveDateTime,
    end:   NaiveDateTime,
}

/// Unchecked shape used to validate deserialized intervals
#[derive(Deserialize)]
struct RawTimeInterval {
    start: NaiveDateTime,
    end:   NaiveDateTime,
}

impl TryFrom<RawTimeInterval> for TimeInterval {
    type Error = TimeError;

    fn try_from(raw: RawTimeInterval) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeInterval {
    /// Creates a new interval with validation.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidInterval` if start > end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(TimeError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from a point and a signed duration.
    ///
    /// A positive duration makes `point` the start; a negative or zero
    /// duration makes it the end.
    ///
    /// # Errors
    /// Returns `TimeError::DateOutOfRange` if `point + duration` overflows.
    pub fn from_point_and_duration(point: NaiveDateTime, duration: TimeDelta) -> Result<Self> {
        let other = point
            .checked_add_signed(duration)
            .ok_or(TimeError::DateOutOfRange)?;
        if duration > TimeDelta::zero() {
            Self::new(point, other)
        } else {
            Self::new(other, point)
        }
    }

    /// Returns the start of the interval
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end of the interval
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the length of the interval
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Checks if the point lies within the interval, both ends included
    pub fn contains(&self, point: &NaiveDateTime) -> bool {
        self.start <= *point && *point <= self.end
    }

    /// Checks if this interval shares at least one point with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this interval lies entirely within another
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, 2, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_interval_cases() {
        struct TestCase {
            start:          NaiveDateTime,
            end:            NaiveDateTime,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          at(1, 0),
                end:            at(2, 0),
                should_succeed: true,
                description:    "valid interval (start < end)",
            },
            TestCase {
                start:          at(2, 0),
                end:            at(1, 0),
                should_succeed: false,
                description:    "invalid interval (start > end)",
            },
            TestCase {
                start:          at(1, 0),
                end:            at(1, 0),
                should_succeed: true,
                description:    "empty interval (start == end)",
            },
        ];

        for case in &cases {
            let interval = TimeInterval::new(case.start, case.end);
            assert_eq!(interval.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_invalid_interval_error() {
        let result = TimeInterval::new(at(2, 0), at(1, 0));
        assert_eq!(
            result,
            Err(TimeError::InvalidInterval {
                start: at(2, 0),
                end:   at(1, 0),
            })
        );
    }

    #[test]
    fn test_from_point_and_positive_duration() {
        let interval =
            TimeInterval::from_point_and_duration(at(1, 0), TimeDelta::hours(5)).unwrap();
        assert_eq!(interval.start(), at(1, 0));
        assert_eq!(interval.end(), at(1, 5));
        assert_eq!(interval.duration(), TimeDelta::hours(5));
    }

    #[test]
    fn test_from_point_and_negative_duration() {
        let interval =
            TimeInterval::from_point_and_duration(at(2, 0), TimeDelta::hours(-5)).unwrap();
        assert_eq!(interval.start(), at(1, 19));
        assert_eq!(interval.end(), at(2, 0));
    }

    #[test]
    fn test_from_point_and_zero_duration() {
        let interval = TimeInterval::from_point_and_duration(at(2, 0), TimeDelta::zero()).unwrap();
        assert_eq!(interval.start(), interval.end());
        assert!(interval.contains(&at(2, 0)));
    }

    #[test]
    fn test_from_point_and_duration_overflow() {
        let result = TimeInterval::from_point_and_duration(NaiveDateTime::MAX, TimeDelta::days(1));
        assert_eq!(result, Err(TimeError::DateOutOfRange));
    }

    #[test]
    fn test_contains() {
        let interval = TimeInterval::new(at(1, 0), at(3, 0)).unwrap();
        let second = TimeDelta::seconds(1);

        assert!(interval.contains(&at(1, 0)));
        assert!(interval.contains(&at(3, 0)));
        assert!(interval.contains(&at(2, 12)));
        assert!(!interval.contains(&(at(1, 0) - second)));
        assert!(!interval.contains(&(at(3, 0) + second)));
    }

    #[test]
    fn test_overlaps_and_is_within() {
        let outer = TimeInterval::new(at(1, 0), at(10, 0)).unwrap();
        let inner = TimeInterval::new(at(3, 0), at(4, 0)).unwrap();
        let touching = TimeInterval::new(at(10, 0), at(12, 0)).unwrap();
        let apart = TimeInterval::new(at(11, 0), at(12, 0)).unwrap();

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(outer.overlaps(&touching));
        assert!(!outer.overlaps(&apart));
        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
    }

    #[test]
    fn test_ordering() {
        let early = TimeInterval::new(at(1, 0), at(5, 0)).unwrap();
        let early_longer = TimeInterval::new(at(1, 0), at(6, 0)).unwrap();
        let late = TimeInterval::new(at(2, 0), at(3, 0)).unwrap();
        assert!(early < early_longer);
        assert!(early_longer < late);
    }

    #[test]
    fn test_display_and_debug() {
        let interval = TimeInterval::new(at(1, 0), at(1, 6)).unwrap();
        assert_eq!(interval.to_string(), "2017-02-01 00:00:00 -> 2017-02-01 06:00:00");

        let debug = format!("{interval:?}");
        assert!(debug.starts_with("TimeInterval {"));
        assert!(debug.contains("2017-02-01T00:00:00"));
        assert!(debug.contains("2017-02-01T06:00:00"));
    }

    #[test]
    fn test_serde() {
        let interval = TimeInterval::new(at(1, 0), at(1, 6)).unwrap();
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, r#"{"start":"2017-02-01T00:00:00","end":"2017-02-01T06:00:00"}"#);

        let parsed: TimeInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, interval);

        let reversed = r#"{"start":"2017-02-01T06:00:00","end":"2017-02-01T00:00:00"}"#;
        assert!(serde_json::from_str::<TimeInterval>(reversed).is_err());
    }
}
