use chrono::NaiveTime;
use log::debug;

use crate::{
    consts::{SECONDS_IN_DAY, SECONDS_IN_HOUR, SECONDS_IN_MINUTE},
    error::{Result, TimeError},
};

/// Splits seconds since midnight into `(hour, minute, second)`.
///
/// A value of one full day or more is first reduced by one day, so exactly
/// `SECONDS_IN_DAY` decomposes to midnight.
///
/// # Errors
/// Returns `TimeError::NegativeSecondsInDay` if `seconds` is negative.
pub fn decompose_seconds_in_day(seconds: i64) -> Result<(i64, i64, i64)> {
    let seconds = if seconds >= SECONDS_IN_DAY { seconds - SECONDS_IN_DAY } else { seconds };
    if seconds < 0 {
        return Err(TimeError::NegativeSecondsInDay(seconds));
    }
    let hour = seconds / SECONDS_IN_HOUR;
    let leftover = seconds % SECONDS_IN_HOUR;
    Ok((hour, leftover / SECONDS_IN_MINUTE, leftover % SECONDS_IN_MINUTE))
}

/// Builds a time of day from possibly out-of-range components.
pub(crate) fn time_from_components(hour: i64, minute: i64, second: i64) -> Result<NaiveTime> {
    let invalid = || TimeError::InvalidTime {
        hour,
        minute,
        second,
    };
    let h = u32::try_from(hour).map_err(|_| invalid())?;
    let m = u32::try_from(minute).map_err(|_| invalid())?;
    let s = u32::try_from(second).map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(h, m, s).ok_or_else(invalid)
}

/// Converts seconds since midnight to a time of day.
///
/// ```
/// # use chrono::NaiveTime;
/// assert_eq!(
///     utilitime::seconds_in_day_to_time(23430).unwrap(),
///     NaiveTime::from_hms_opt(6, 30, 30).unwrap()
/// );
/// ```
///
/// # Errors
/// Returns `TimeError::NegativeSecondsInDay` for negative input and
/// `TimeError::InvalidTime` when the value spans two days or more.
pub fn seconds_in_day_to_time(seconds: i64) -> Result<NaiveTime> {
    let (hour, minute, second) = decompose_seconds_in_day(seconds)
        .inspect_err(|err| debug!("seconds in day {seconds} rejected: {err}"))?;
    time_from_components(hour, minute, second).inspect_err(|err| {
        debug!("seconds in day {seconds} decomposed to H={hour}, M={minute}, S={second}: {err}");
    })
}

/// Converts minutes since midnight to a time of day.
///
/// # Errors
/// Same as [`seconds_in_day_to_time`].
pub fn minutes_in_day_to_time(minutes: i64) -> Result<NaiveTime> {
    seconds_in_day_to_time(minutes.saturating_mul(SECONDS_IN_MINUTE))
}
