//! Calendar and clock conversion helpers.
//!
//! Functions are grouped by the representation they work on: dateints
//! (`20170223`), naive and zone-aware datetimes, epoch timestamps, seconds or
//! minutes since midnight, and weekday names. [`TimeInterval`] models a closed
//! interval between two datetimes.
//!
//! ```
//! use utilitime::{dateint_range, dateint_to_weekday_name, shift_dateint};
//!
//! assert_eq!(shift_dateint(20170228, 1).unwrap(), 20170301);
//! assert_eq!(dateint_to_weekday_name(20170213).unwrap(), "Monday");
//! assert_eq!(dateint_range(20170228, 20170301).unwrap(), [20170228, 20170301]);
//! ```

mod clock;
mod consts;
mod dateint;
mod datetime;
mod error;
pub mod format;
mod interval;
mod prelude;
mod timestamp;
mod weekday;

pub use clock::{decompose_seconds_in_day, minutes_in_day_to_time, seconds_in_day_to_time};
pub use consts::*;
pub use dateint::{
    Dateint, dateint_difference, dateint_range, dateint_to_date, dateint_to_datetime,
    dateint_to_timestamp, dateint_to_utc_timestamp, dateint_to_weekday, dateint_to_weekday_name,
    dateint_week_by_dateint, decompose_dateint, shift_dateint, today_int,
    tz_aware_dateint_to_timestamp,
};
pub use datetime::{
    datetime_to_dateint, epoch_datetime, local_datetime_to_timestamp, localize_datetime,
    parse_timezone, utc_datetime_to_timestamp, utc_offset_by_timezone, utc_offset_by_timezone_at,
    utc_time,
};
pub use error::{ErrorKind, Result, TimeError};
pub use interval::TimeInterval;
pub use timestamp::{
    get_timestamp, timestamp_to_dateint, timestamp_to_datetime, timestamp_to_local_time,
    timestamp_to_local_time_str, tz_aware_dt_from_timestamp_and_tz,
};
pub use weekday::{WeekOrdering, Weekday, next_weekday, prev_weekday, weekdays, workdays};
