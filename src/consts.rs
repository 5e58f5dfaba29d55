/// Seconds in one minute
pub const SECONDS_IN_MINUTE: i64 = 60;
/// Minutes in one hour
pub const MINUTES_IN_HOUR: i64 = 60;
/// Hours in one day
pub const HOURS_IN_DAY: i64 = 24;
/// Seconds in one hour
pub const SECONDS_IN_HOUR: i64 = MINUTES_IN_HOUR * SECONDS_IN_MINUTE;
/// Minutes in one day
pub const MINUTES_IN_DAY: i64 = HOURS_IN_DAY * MINUTES_IN_HOUR;
/// Seconds in one day
pub const SECONDS_IN_DAY: i64 = MINUTES_IN_DAY * SECONDS_IN_MINUTE;
/// Seconds in a 365-day year
pub const SECONDS_IN_COMMON_YEAR: i64 = 365 * SECONDS_IN_DAY;
/// Seconds in a 366-day year
pub const SECONDS_IN_LEAP_YEAR: i64 = 366 * SECONDS_IN_DAY;

/// Days in one week
pub const DAYS_IN_A_WEEK: usize = 7;
/// Length of a working week
pub const WORKDAYS_IN_A_WEEK: usize = 5;

/// Western weekday ordering, starting on Monday
pub const WEEKDAYS: [&str; DAYS_IN_A_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Jewish (Israeli) weekday ordering, starting on Sunday
pub const JEWISH_WEEKDAYS: [&str; DAYS_IN_A_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Monday through Friday
pub const WESTERN_WORKDAYS: [&str; WORKDAYS_IN_A_WEEK] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Sunday through Thursday
pub const JEWISH_WORKDAYS: [&str; WORKDAYS_IN_A_WEEK] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

/// First day of the week when none is given
pub const DEFAULT_FIRST_DAY: &str = "Monday";

/// Pattern used by `timestamp_to_local_time_str` when none is given
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

/// Number of decimal digits in a strictly validated dateint (YYYYMMDD)
pub const DATEINT_DIGITS: usize = 8;
/// Multiplier of the year component inside a dateint
pub const DATEINT_YEAR_FACTOR: i64 = 10_000;
/// Multiplier of the month component inside a dateint
pub const DATEINT_MONTH_FACTOR: i64 = 100;

/// IANA name of the UTC zone
pub const UTC_TIMEZONE: &str = "UTC";
