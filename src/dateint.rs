use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    consts::{
        DATEINT_DIGITS, DATEINT_MONTH_FACTOR, DATEINT_YEAR_FACTOR, DAYS_IN_A_WEEK,
        DEFAULT_FIRST_DAY, UTC_TIMEZONE,
    },
    datetime::{
        date_from_components, datetime_to_dateint, local_datetime_to_timestamp, parse_timezone,
        utc_time,
    },
    error::{Result, TimeError},
    timestamp::zoned_timestamp,
    weekday::Weekday,
};

/// A calendar day encoded as `YEAR * 10000 + MONTH * 100 + DAY`, e.g. `20170223`.
pub type Dateint = i64;

/// Splits a dateint into `(year, month, day)` without validating the date.
///
/// ```
/// assert_eq!(utilitime::decompose_dateint(20161225), (2016, 12, 25));
/// ```
pub const fn decompose_dateint(dateint: Dateint) -> (i64, i64, i64) {
    let year = dateint / DATEINT_YEAR_FACTOR;
    let leftover = dateint - year * DATEINT_YEAR_FACTOR;
    let month = leftover / DATEINT_MONTH_FACTOR;
    let day = leftover - month * DATEINT_MONTH_FACTOR;
    (year, month, day)
}

/// Converts a dateint to a calendar date.
///
/// # Errors
/// Returns `TimeError::InvalidDate` if the components do not form a real date.
pub fn dateint_to_date(dateint: Dateint) -> Result<NaiveDate> {
    let (year, month, day) = decompose_dateint(dateint);
    date_from_components(year, month, day)
}

/// Converts a dateint to a naive datetime at midnight.
///
/// Unlike [`dateint_to_date`], this requires exactly eight decimal digits.
///
/// # Errors
/// Returns `TimeError::InvalidDateintLength` if the dateint is not eight
/// characters long and `TimeError::InvalidDate` if it is not a real date.
pub fn dateint_to_datetime(dateint: Dateint) -> Result<NaiveDateTime> {
    if dateint.to_string().len() != DATEINT_DIGITS {
        return Err(TimeError::InvalidDateintLength(dateint));
    }
    Ok(dateint_to_date(dateint)?.and_time(NaiveTime::MIN))
}

/// Returns the epoch timestamp of midnight of `dateint` in the named timezone.
///
/// # Errors
/// Returns `TimeError::UnknownTimezone` for an unknown zone and
/// `TimeError::InvalidDate` if the dateint is not a real date.
pub fn tz_aware_dateint_to_timestamp(dateint: Dateint, timezone_name: &str) -> Result<i64> {
    let tz = parse_timezone(timezone_name)?;
    let midnight = dateint_to_date(dateint)?.and_time(NaiveTime::MIN);
    zoned_timestamp(&tz, midnight)
}

/// Returns the epoch timestamp of midnight of `dateint` in the local timezone.
///
/// # Errors
/// Same as [`dateint_to_datetime`].
pub fn dateint_to_timestamp(dateint: Dateint) -> Result<i64> {
    local_datetime_to_timestamp(dateint_to_datetime(dateint)?)
}

/// Returns the epoch timestamp of midnight UTC of `dateint`.
///
/// # Errors
/// Returns `TimeError::InvalidDate` if the dateint is not a real date.
pub fn dateint_to_utc_timestamp(dateint: Dateint) -> Result<i64> {
    tz_aware_dateint_to_timestamp(dateint, UTC_TIMEZONE)
}

/// Returns the position (0..=6) of `dateint`'s weekday in a week starting on
/// `first_day` (Monday when `None`). `first_day` is matched
/// case-insensitively, so `"sunday"` and `"SUNDAY"` both work.
///
/// # Errors
/// Same as [`dateint_to_datetime`], plus `TimeError::UnknownWeekday` for an
/// unknown `first_day`.
pub fn dateint_to_weekday(dateint: Dateint, first_day: Option<&str>) -> Result<usize> {
    let weekday_ix = Weekday::from(dateint_to_datetime(dateint)?.weekday()).index();
    let first_ix = Weekday::from_name(first_day.unwrap_or(DEFAULT_FIRST_DAY))?.index();
    Ok((weekday_ix + DAYS_IN_A_WEEK - first_ix) % DAYS_IN_A_WEEK)
}

/// Returns the English name of `dateint`'s weekday.
///
/// # Errors
/// Same as [`dateint_to_datetime`].
pub fn dateint_to_weekday_name(dateint: Dateint) -> Result<&'static str> {
    Ok(Weekday::from(dateint_to_datetime(dateint)?.weekday()).name())
}

/// Shifts `dateint` by `day_shift` days; negative values shift backwards.
///
/// # Errors
/// Same as [`dateint_to_datetime`], plus `TimeError::DateOutOfRange` if the
/// result leaves the supported calendar.
pub fn shift_dateint(dateint: Dateint, day_shift: i64) -> Result<Dateint> {
    let datetime = dateint_to_datetime(dateint)?;
    let delta = Days::new(day_shift.unsigned_abs());
    let shifted = if day_shift > 0 {
        datetime.checked_add_days(delta)
    } else {
        datetime.checked_sub_days(delta)
    };
    shifted
        .map(|datetime| datetime_to_dateint(&datetime))
        .ok_or(TimeError::DateOutOfRange)
}

/// Returns every dateint from `first` to `last`, both inclusive, ascending.
///
/// # Errors
/// Same as [`dateint_to_datetime`] for either bound, plus
/// `TimeError::ReversedDateintRange` if `first` is after `last`.
pub fn dateint_range(first: Dateint, last: Dateint) -> Result<Vec<Dateint>> {
    let first_day = dateint_to_datetime(first)?.date();
    let last_day = dateint_to_datetime(last)?.date();
    if first_day > last_day {
        return Err(TimeError::ReversedDateintRange { first, last });
    }
    Ok(first_day
        .iter_days()
        .take_while(|day| *day <= last_day)
        .map(|day| datetime_to_dateint(&day))
        .collect())
}

/// Returns the dateint of the current UTC day.
pub fn today_int() -> Dateint {
    datetime_to_dateint(&utc_time())
}

/// Returns the seven dateints of the week containing `dateint`, for a week
/// starting on `first_day` (Monday when `None`).
///
/// # Errors
/// Same as [`dateint_to_weekday`].
pub fn dateint_week_by_dateint(dateint: Dateint, first_day: Option<&str>) -> Result<Vec<Dateint>> {
    let weekday_ix = dateint_to_weekday(dateint, first_day)?;
    // weekday_ix < 7
    #[allow(clippy::cast_possible_wrap)]
    let first_day_dateint = shift_dateint(dateint, -(weekday_ix as i64))?;
    let last_day_dateint = shift_dateint(first_day_dateint, 6)?;
    dateint_range(first_day_dateint, last_day_dateint)
}

/// Returns the absolute number of days between two dateints.
///
/// # Errors
/// Same as [`dateint_to_datetime`] for either argument.
pub fn dateint_difference(dateint1: Dateint, dateint2: Dateint) -> Result<i64> {
    let delta = dateint_to_datetime(dateint1)? - dateint_to_datetime(dateint2)?;
    Ok(delta.num_days().abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_decompose_dateint() {
        assert_eq!(decompose_dateint(20161225), (2016, 12, 25));
        assert_eq!(decompose_dateint(20170101), (2017, 1, 1));
        // no calendar validation at this level
        assert_eq!(decompose_dateint(20171332), (2017, 13, 32));
    }

    #[test]
    fn test_dateint_to_date() {
        assert_eq!(
            dateint_to_date(20170223).unwrap(),
            NaiveDate::from_ymd_opt(2017, 2, 23).unwrap()
        );
        // the digit-count check is specific to dateint_to_datetime
        assert_eq!(
            dateint_to_date(9991231).unwrap(),
            NaiveDate::from_ymd_opt(999, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_invalid_calendar_dates() {
        for dateint in [20171301, 20170132, 20170230, 20170229, 20170400, 20170001] {
            let result = dateint_to_date(dateint);
            assert!(
                matches!(result, Err(TimeError::InvalidDate { .. })),
                "{dateint} should not be a valid date"
            );
            assert_eq!(dateint_to_datetime(dateint).unwrap_err().kind(), ErrorKind::Construction);
        }
        assert!(dateint_to_date(20160229).is_ok());
    }

    #[test]
    fn test_dateint_to_datetime() {
        let datetime = dateint_to_datetime(20170223).unwrap();
        assert_eq!(
            datetime,
            NaiveDate::from_ymd_opt(2017, 2, 23)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_dateint_to_datetime_requires_eight_digits() {
        for dateint in [9991231, 100000101, -20170223] {
            assert!(
                matches!(
                    dateint_to_datetime(dateint),
                    Err(TimeError::InvalidDateintLength(d)) if d == dateint
                ),
                "{dateint} should fail the length check"
            );
        }
    }

    #[test]
    fn test_dateint_datetime_round_trip() {
        for dateint in [20000229, 20161225, 20170101, 20171231, 19700101, 99991231] {
            assert_eq!(datetime_to_dateint(&dateint_to_datetime(dateint).unwrap()), dateint);
        }
    }

    #[test]
    fn test_tz_aware_dateint_to_timestamp() {
        assert_eq!(tz_aware_dateint_to_timestamp(20170223, "UTC").unwrap(), 1487808000);
        assert_eq!(
            tz_aware_dateint_to_timestamp(20170223, "America/New_York").unwrap(),
            1487826000
        );
        assert_eq!(
            tz_aware_dateint_to_timestamp(20170223, "Asia/Jerusalem").unwrap(),
            1487800800
        );
        assert_eq!(
            tz_aware_dateint_to_timestamp(20161225, "Asia/Kolkata").unwrap(),
            1482604200
        );
        assert!(matches!(
            tz_aware_dateint_to_timestamp(20170223, "Atlantis/Capital"),
            Err(TimeError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_dateint_to_utc_timestamp() {
        assert_eq!(dateint_to_utc_timestamp(19700101).unwrap(), 0);
        assert_eq!(dateint_to_utc_timestamp(20170223).unwrap(), 1487808000);
        assert_eq!(dateint_to_utc_timestamp(20170224).unwrap(), 1487808000 + 86400);
    }

    #[test]
    fn test_dateint_to_timestamp_uses_local_zone() {
        let midnight = NaiveDate::from_ymd_opt(2017, 2, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let expected = Local.from_local_datetime(&midnight).earliest().unwrap().timestamp();
        assert_eq!(dateint_to_timestamp(20170223).unwrap(), expected);
    }

    #[test]
    fn test_dateint_to_weekday() {
        assert_eq!(dateint_to_weekday(20170213, None).unwrap(), 0);
        assert_eq!(dateint_to_weekday(20170212, None).unwrap(), 6);
        assert_eq!(dateint_to_weekday(20170214, None).unwrap(), 1);
        assert_eq!(dateint_to_weekday(20170212, Some("Sunday")).unwrap(), 0);
        assert_eq!(dateint_to_weekday(20170214, Some("Sunday")).unwrap(), 2);
        assert_eq!(dateint_to_weekday(20170214, Some("sunday")).unwrap(), 2);
        assert_eq!(dateint_to_weekday(20170214, Some("SUNDAY")).unwrap(), 2);
        assert!(matches!(
            dateint_to_weekday(20170214, Some("Caturday")),
            Err(TimeError::UnknownWeekday(_))
        ));
    }

    #[test]
    fn test_dateint_to_weekday_name() {
        assert_eq!(dateint_to_weekday_name(20170213).unwrap(), "Monday");
        assert_eq!(dateint_to_weekday_name(20170212).unwrap(), "Sunday");
        assert_eq!(dateint_to_weekday_name(20170214).unwrap(), "Tuesday");
        assert_eq!(dateint_to_weekday_name(20160229).unwrap(), "Monday");
    }

    #[test]
    fn test_shift_dateint_cases() {
        struct TestCase {
            dateint:  Dateint,
            shift:    i64,
            expected: Dateint,
        }

        let cases = [
            TestCase {
                dateint:  20170228,
                shift:    1,
                expected: 20170301,
            },
            TestCase {
                dateint:  20170301,
                shift:    -1,
                expected: 20170228,
            },
            TestCase {
                dateint:  20170220,
                shift:    5,
                expected: 20170225,
            },
            TestCase {
                dateint:  20160228,
                shift:    1,
                expected: 20160229,
            },
            TestCase {
                dateint:  20161231,
                shift:    1,
                expected: 20170101,
            },
            TestCase {
                dateint:  20170101,
                shift:    -1,
                expected: 20161231,
            },
            TestCase {
                dateint:  20170223,
                shift:    0,
                expected: 20170223,
            },
            TestCase {
                dateint:  20170101,
                shift:    365,
                expected: 20180101,
            },
        ];

        for case in &cases {
            assert_eq!(
                shift_dateint(case.dateint, case.shift).unwrap(),
                case.expected,
                "{} shifted by {}",
                case.dateint,
                case.shift
            );
        }
    }

    #[test]
    fn test_shift_dateint_out_of_range() {
        assert!(matches!(shift_dateint(20170101, i64::MAX), Err(TimeError::DateOutOfRange)));
        assert!(matches!(shift_dateint(20170101, i64::MIN), Err(TimeError::DateOutOfRange)));
    }

    #[test]
    fn test_dateint_range() {
        assert_eq!(dateint_range(20170228, 20170301).unwrap(), [20170228, 20170301]);
        assert_eq!(
            dateint_range(20170225, 20170301).unwrap(),
            [20170225, 20170226, 20170227, 20170228, 20170301]
        );
        assert_eq!(dateint_range(20170223, 20170223).unwrap(), [20170223]);
        assert_eq!(
            dateint_range(20161230, 20170102).unwrap(),
            [20161230, 20161231, 20170101, 20170102]
        );
        assert_eq!(dateint_range(20170101, 20171231).unwrap().len(), 365);
    }

    #[test]
    fn test_dateint_range_reversed() {
        let result = dateint_range(20170302, 20170301);
        assert!(matches!(
            result,
            Err(TimeError::ReversedDateintRange {
                first: 20170302,
                last:  20170301,
            })
        ));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_today_int() {
        let today = today_int();
        let (year, month, day) = decompose_dateint(today);
        assert!(year >= 2017);
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
        assert!(dateint_to_datetime(today).is_ok());
    }

    #[test]
    fn test_dateint_week_by_dateint() {
        let monday_week = [20170213, 20170214, 20170215, 20170216, 20170217, 20170218, 20170219];
        assert_eq!(dateint_week_by_dateint(20170215, None).unwrap(), monday_week);
        assert_eq!(dateint_week_by_dateint(20170213, None).unwrap(), monday_week);
        assert_eq!(dateint_week_by_dateint(20170219, None).unwrap(), monday_week);

        let sunday_week = [20170212, 20170213, 20170214, 20170215, 20170216, 20170217, 20170218];
        assert_eq!(dateint_week_by_dateint(20170215, Some("Sunday")).unwrap(), sunday_week);
        assert_eq!(dateint_week_by_dateint(20170212, Some("Sunday")).unwrap(), sunday_week);

        let year_end = dateint_week_by_dateint(20170101, None).unwrap();
        assert_eq!(year_end.first(), Some(&20161226));
        assert_eq!(year_end.last(), Some(&20170101));
    }

    #[test]
    fn test_dateint_difference() {
        assert_eq!(dateint_difference(20170101, 20170110).unwrap(), 9);
        assert_eq!(dateint_difference(20170110, 20170101).unwrap(), 9);
        assert_eq!(dateint_difference(20170223, 20170223).unwrap(), 0);
        assert_eq!(dateint_difference(20160101, 20170101).unwrap(), 366);
        assert!(dateint_difference(2017011, 20170101).is_err());
    }
}
