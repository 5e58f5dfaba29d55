use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::{
    consts::DEFAULT_TIMESTAMP_FORMAT,
    dateint::Dateint,
    datetime::{
        date_from_components, datetime_to_dateint, localize_datetime, parse_timezone,
        Ambiguity, resolve_local, whole_seconds,
    },
    error::{Result, TimeError},
    format::format_datetime,
};

/// Epoch timestamp of a naive local time in `tz`, using the offset that
/// applies on that date. A local time that occurs twice takes the later,
/// standard-time instant.
pub(crate) fn zoned_timestamp<T: TimeZone>(tz: &T, local: NaiveDateTime) -> Result<i64> {
    Ok(whole_seconds(&resolve_local(tz, local, Ambiguity::Later)?))
}

/// Converts an epoch timestamp to local time in the named timezone.
///
/// # Errors
/// Returns `TimeError::TimestampOutOfRange` or `TimeError::UnknownTimezone`.
pub fn timestamp_to_local_time(timestamp: i64, timezone_name: &str) -> Result<DateTime<Tz>> {
    localize_datetime(timestamp_to_datetime(timestamp)?, timezone_name)
}

/// Formats an epoch timestamp as local time in the named timezone.
///
/// `pattern` uses the tokens of [`crate::format`] and defaults to
/// `"yyyy-MM-dd HH:mm:ss"`.
///
/// # Errors
/// Same as [`timestamp_to_local_time`], plus `TimeError::UnsupportedFormatToken`.
pub fn timestamp_to_local_time_str(
    timestamp: i64,
    timezone_name: &str,
    pattern: Option<&str>,
) -> Result<String> {
    let local = timestamp_to_local_time(timestamp, timezone_name)?;
    format_datetime(&local, pattern.unwrap_or(DEFAULT_TIMESTAMP_FORMAT))
}

/// Epoch timestamp of the given wall-clock time in the named timezone.
///
/// The zone's offset on that date is used, so daylight-saving time is
/// honoured. A wall-clock time repeated when clocks turn back resolves to
/// the standard-time instant.
///
/// # Errors
/// Returns `TimeError::UnknownTimezone`, `TimeError::InvalidDate` or
/// `TimeError::InvalidTime`.
pub fn get_timestamp(
    timezone_name: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<i64> {
    let tz = parse_timezone(timezone_name)?;
    let date = date_from_components(year.into(), month.into(), day.into())?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeError::InvalidTime {
        hour:   hour.into(),
        minute: minute.into(),
        second: 0,
    })?;
    zoned_timestamp(&tz, date.and_time(time))
}

/// Converts an epoch timestamp to a naive UTC-aligned datetime.
///
/// # Errors
/// Returns `TimeError::TimestampOutOfRange` if the timestamp cannot be represented.
pub fn timestamp_to_datetime(timestamp: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|datetime| datetime.naive_utc())
        .ok_or(TimeError::TimestampOutOfRange(timestamp))
}

/// Converts an epoch timestamp to a zone-aware datetime in the named timezone.
///
/// # Errors
/// Returns `TimeError::TimestampOutOfRange` or `TimeError::UnknownTimezone`.
pub fn tz_aware_dt_from_timestamp_and_tz(
    timestamp: i64,
    timezone_name: &str,
) -> Result<DateTime<Tz>> {
    let tz = parse_timezone(timezone_name)?;
    DateTime::from_timestamp(timestamp, 0)
        .map(|datetime| datetime.with_timezone(&tz))
        .ok_or(TimeError::TimestampOutOfRange(timestamp))
}

/// Converts an epoch timestamp to the dateint of its UTC day.
///
/// # Errors
/// Returns `TimeError::TimestampOutOfRange` if the timestamp cannot be represented.
pub fn timestamp_to_dateint(timestamp: i64) -> Result<Dateint> {
    Ok(datetime_to_dateint(&timestamp_to_datetime(timestamp)?))
}
