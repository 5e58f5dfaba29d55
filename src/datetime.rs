use std::sync::LazyLock;

use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
    Utc,
};
use chrono_tz::Tz;
use log::debug;

use crate::{
    consts::{DATEINT_MONTH_FACTOR, DATEINT_YEAR_FACTOR, SECONDS_IN_HOUR},
    error::{Result, TimeError},
};

#[allow(clippy::cast_possible_truncation)]
const OFFSET_SECONDS_IN_HOUR: i32 = SECONDS_IN_HOUR as i32;

/// 1970-01-01T00:00:00, UTC-aligned
static EPOCH: LazyLock<NaiveDateTime> = LazyLock::new(NaiveDateTime::default);

/// Returns the Unix epoch as a naive UTC-aligned datetime.
pub fn epoch_datetime() -> NaiveDateTime {
    *EPOCH
}

/// Returns the current instant as a naive UTC-aligned datetime.
pub fn utc_time() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Looks up a timezone by its IANA name, e.g. `"America/New_York"`.
///
/// # Errors
/// Returns `TimeError::UnknownTimezone` if the name is not in the database.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| {
        debug!("timezone lookup failed for {name:?}");
        TimeError::UnknownTimezone(name.to_owned())
    })
}

/// Returns the UTC offset, in whole hours, of the named timezone right now.
///
/// The offset follows daylight-saving rules, so the result may change over
/// the year. Fractional offsets truncate toward zero.
///
/// # Errors
/// Returns `TimeError::UnknownTimezone` if the name is not in the database.
pub fn utc_offset_by_timezone(timezone_name: &str) -> Result<i32> {
    utc_offset_by_timezone_at(timezone_name, utc_time())
}

/// Returns the UTC offset, in whole hours, of the named timezone at the given
/// UTC-aligned instant.
///
/// # Errors
/// Returns `TimeError::UnknownTimezone` if the name is not in the database.
pub fn utc_offset_by_timezone_at(timezone_name: &str, utc: NaiveDateTime) -> Result<i32> {
    let tz = parse_timezone(timezone_name)?;
    let offset_seconds = tz.offset_from_utc_datetime(&utc).fix().local_minus_utc();
    Ok(offset_seconds / OFFSET_SECONDS_IN_HOUR)
}

/// Converts a UTC-aligned naive datetime to the local time of the named zone.
///
/// # Errors
/// Returns `TimeError::UnknownTimezone` if the name is not in the database.
pub fn localize_datetime(datetime: NaiveDateTime, timezone_name: &str) -> Result<DateTime<Tz>> {
    let tz = parse_timezone(timezone_name)?;
    Ok(tz.from_utc_datetime(&datetime))
}

/// Converts any calendar value to its dateint, e.g. 2015-12-03 to `20151203`.
pub fn datetime_to_dateint<D: Datelike>(datetime: &D) -> i64 {
    i64::from(datetime.year()) * DATEINT_YEAR_FACTOR
        + i64::from(datetime.month()) * DATEINT_MONTH_FACTOR
        + i64::from(datetime.day())
}

/// Interprets `datetime` as local time of the process and returns its epoch timestamp.
///
/// A local time that occurs twice takes the earlier instant.
///
/// # Errors
/// Returns `TimeError::NonexistentLocalTime` if the local zone cannot place
/// the value at all.
pub fn local_datetime_to_timestamp(datetime: NaiveDateTime) -> Result<i64> {
    Ok(whole_seconds(&resolve_local(&Local, datetime, Ambiguity::Earlier)?))
}

/// Interprets `datetime` as UTC and returns its epoch timestamp.
pub fn utc_datetime_to_timestamp(datetime: NaiveDateTime) -> i64 {
    whole_seconds(&Utc.from_utc_datetime(&datetime))
}

/// Builds a calendar date from possibly out-of-range components.
pub(crate) fn date_from_components(year: i64, month: i64, day: i64) -> Result<NaiveDate> {
    let invalid = || TimeError::InvalidDate { year, month, day };
    let y = i32::try_from(year).map_err(|_| invalid())?;
    let m = u32::try_from(month).map_err(|_| invalid())?;
    let d = u32::try_from(day).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

/// Which of the two instants an ambiguous local time (clocks turned back)
/// resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ambiguity {
    /// The first occurrence, still on daylight-saving time
    Earlier,
    /// The second occurrence, back on standard time
    Later,
}

/// Places a naive local time in `tz`.
///
/// Ambiguous times pick their instant by `ambiguity`. Times that fall in a
/// gap (clocks turned forward) use the offset in effect before the
/// transition.
pub(crate) fn resolve_local<T: TimeZone>(
    tz: &T,
    naive: NaiveDateTime,
    ambiguity: Ambiguity,
) -> Result<DateTime<T>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => Ok(datetime),
        LocalResult::Ambiguous(earlier, later) => match ambiguity {
            Ambiguity::Earlier => Ok(earlier),
            Ambiguity::Later => Ok(later),
        },
        LocalResult::None => {
            let before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or(TimeError::DateOutOfRange)?;
            let offset = tz
                .from_local_datetime(&before)
                .earliest()
                .ok_or(TimeError::NonexistentLocalTime(naive))?
                .offset()
                .fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
                .ok_or(TimeError::DateOutOfRange)?;
            debug!("local time {naive} falls in a gap, resolved with offset {offset}");
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

/// Epoch seconds, dropping any sub-second part toward zero.
pub(crate) fn whole_seconds<T: TimeZone>(datetime: &DateTime<T>) -> i64 {
    let seconds = datetime.timestamp();
    if seconds < 0 && datetime.timestamp_subsec_nanos() > 0 {
        seconds + 1
    } else {
        seconds
    }
}
