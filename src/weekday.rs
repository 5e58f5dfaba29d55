use std::{str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        DAYS_IN_A_WEEK, DEFAULT_FIRST_DAY, JEWISH_WEEKDAYS, JEWISH_WORKDAYS, WEEKDAYS,
        WESTERN_WORKDAYS, WORKDAYS_IN_A_WEEK,
    },
    error::{Result, TimeError},
    prelude::*,
};

/// Lower-cased weekday names, in Western order
static LOWER_WEEKDAYS: LazyLock<Vec<String>> =
    LazyLock::new(|| WEEKDAYS.iter().map(|day| day.to_lowercase()).collect());

/// Western ordering concatenated with itself, so any rotation is a plain slice
static DOUBLE_WEEKDAYS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| WEEKDAYS.iter().chain(WEEKDAYS.iter()).copied().collect());

/// A day of the week. Discriminants follow the Western ordering (Monday = 0).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in Western order
    pub const ALL: [Self; DAYS_IN_A_WEEK] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Position in the Western ordering (Monday = 0, Sunday = 6)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Weekday at the given position of the Western ordering, if any
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < DAYS_IN_A_WEEK {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Canonical capitalized name, e.g. `"Monday"`
    pub const fn name(self) -> &'static str {
        WEEKDAYS[self.index()]
    }

    /// Looks up a weekday by name, ignoring case.
    ///
    /// # Errors
    /// Returns `TimeError::UnknownWeekday` if `name` is not a weekday name.
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.to_lowercase();
        LOWER_WEEKDAYS
            .iter()
            .position(|day| *day == lowered)
            .and_then(Self::from_index)
            .ok_or_else(|| TimeError::UnknownWeekday(name.to_owned()))
    }

    /// Looks up a weekday by its exact canonical name.
    ///
    /// # Errors
    /// Returns `TimeError::UnknownWeekday` unless `name` matches a canonical name exactly.
    pub fn from_canonical_name(name: &str) -> Result<Self> {
        WEEKDAYS
            .iter()
            .position(|day| *day == name)
            .and_then(Self::from_index)
            .ok_or_else(|| TimeError::UnknownWeekday(name.to_owned()))
    }

    /// The following day, wrapping from Sunday to Monday
    pub const fn succ(self) -> Self {
        Self::ALL[(self.index() + 1) % DAYS_IN_A_WEEK]
    }

    /// The preceding day, wrapping from Monday to Sunday
    pub const fn pred(self) -> Self {
        Self::ALL[(self.index() + DAYS_IN_A_WEEK - 1) % DAYS_IN_A_WEEK]
    }
}

impl FromStr for Weekday {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
            Weekday::Sunday => Self::Sun,
        }
    }
}

/// The two supported orderings of a week.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum WeekOrdering {
    /// Monday-first week with a Monday to Friday workweek
    #[default]
    Western,
    /// Sunday-first week with a Sunday to Thursday workweek
    Jewish,
}

impl WeekOrdering {
    pub const fn first_day(self) -> Weekday {
        match self {
            Self::Western => Weekday::Monday,
            Self::Jewish => Weekday::Sunday,
        }
    }

    pub const fn days(self) -> &'static [&'static str; DAYS_IN_A_WEEK] {
        match self {
            Self::Western => &WEEKDAYS,
            Self::Jewish => &JEWISH_WEEKDAYS,
        }
    }

    pub const fn workdays(self) -> &'static [&'static str; WORKDAYS_IN_A_WEEK] {
        match self {
            Self::Western => &WESTERN_WORKDAYS,
            Self::Jewish => &JEWISH_WORKDAYS,
        }
    }
}

/// Returns the name of the weekday after the given one.
///
/// # Errors
/// Returns `TimeError::UnknownWeekday` unless `weekday` is a canonical name
/// (capitalized, e.g. `"Monday"`).
pub fn next_weekday(weekday: &str) -> Result<&'static str> {
    Ok(Weekday::from_canonical_name(weekday)?.succ().name())
}

/// Returns the name of the weekday before the given one.
///
/// # Errors
/// Returns `TimeError::UnknownWeekday` unless `weekday` is a canonical name.
pub fn prev_weekday(weekday: &str) -> Result<&'static str> {
    Ok(Weekday::from_canonical_name(weekday)?.pred().name())
}

fn rotated_week(first_day: Option<&str>, len: usize) -> Result<Vec<&'static str>> {
    let start = Weekday::from_name(first_day.unwrap_or(DEFAULT_FIRST_DAY))?.index();
    Ok(DOUBLE_WEEKDAYS[start..start + len].to_vec())
}

/// Returns the five workday names of a week starting on `first_day`
/// (Monday when `None`), matched case-insensitively.
///
/// # Errors
/// Returns `TimeError::UnknownWeekday` if `first_day` is not a weekday name.
pub fn workdays(first_day: Option<&str>) -> Result<Vec<&'static str>> {
    rotated_week(first_day, WORKDAYS_IN_A_WEEK)
}

/// Returns the seven weekday names of a week starting on `first_day`
/// (Monday when `None`), matched case-insensitively.
///
/// # Errors
/// Returns `TimeError::UnknownWeekday` if `first_day` is not a weekday name.
pub fn weekdays(first_day: Option<&str>) -> Result<Vec<&'static str>> {
    rotated_week(first_day, DAYS_IN_A_WEEK)
}
