//! UTC time values carried by [`Value`](crate::Value).
//!
//! All three types are offset-free: the marshalling layer fixes a UTC
//! policy, so a `CalendarDate` is a UTC calendar day, a `CivilDateTime` is
//! UTC wall-clock fields, and an `Instant` is an absolute point on the UTC
//! timeline at microsecond resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::DateTimeParseError;
use crate::util::datetime::{
    self, MICROS_PER_SECOND, days_in_month, format_fractional_micros,
};

/// A calendar date (year, month, day) with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date, validating month and day-in-month (leap years
    /// included). Returns `None` for impossible dates like 2023-02-29.
    pub fn new(year: i32, month: u8, day: u8) -> Option<CalendarDate> {
        if month < 1 || month > 12 {
            return None;
        }
        if day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(CalendarDate { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<CalendarDate, DateTimeParseError> {
        datetime::parse_date(s)
    }
}

/// Civil date and time-of-day fields (no offset), with sub-second
/// precision in microseconds.
///
/// The microsecond field exists so callers can observe the lossy epoch
/// round trip: marshalling to storage drops it, and reconstruction always
/// yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDateTime {
    date: CalendarDate,
    hour: u8,
    minute: u8,
    second: u8,
    micros: u32,
}

impl CivilDateTime {
    /// Creates a civil datetime with zero microseconds, validating each
    /// field range.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<CivilDateTime> {
        CivilDateTime::from_parts(CalendarDate::new(year, month, day)?, hour, minute, second)
    }

    /// Creates a civil datetime from an already-validated date.
    pub fn from_parts(
        date: CalendarDate,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<CivilDateTime> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(CivilDateTime {
            date,
            hour,
            minute,
            second,
            micros: 0,
        })
    }

    /// Replaces the sub-second component. Returns `None` when `micros`
    /// is a full second or more.
    pub fn with_micros(mut self, micros: u32) -> Option<CivilDateTime> {
        if micros as i64 >= MICROS_PER_SECOND {
            return None;
        }
        self.micros = micros;
        Some(self)
    }

    pub fn date(self) -> CalendarDate {
        self.date
    }

    pub fn year(self) -> i32 {
        self.date.year()
    }

    pub fn month(self) -> u8 {
        self.date.month()
    }

    pub fn day(self) -> u8 {
        self.date.day()
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn second(self) -> u8 {
        self.second
    }

    pub fn micros(self) -> u32 {
        self.micros
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}{}",
            self.date,
            self.hour,
            self.minute,
            self.second,
            format_fractional_micros(self.micros)
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<CivilDateTime, DateTimeParseError> {
        datetime::parse_datetime(s)
    }
}

/// An absolute instant: signed microseconds since the Unix epoch
/// (1970-01-01T00:00:00Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Instant {
    epoch_micros: i64,
}

impl Instant {
    pub const fn from_epoch_micros(epoch_micros: i64) -> Instant {
        Instant { epoch_micros }
    }

    /// Creates an instant from whole epoch seconds. Returns `None` when the
    /// value does not fit the microsecond timeline.
    pub fn from_epoch_seconds(seconds: i64) -> Option<Instant> {
        seconds
            .checked_mul(MICROS_PER_SECOND)
            .map(Instant::from_epoch_micros)
    }

    pub const fn epoch_micros(self) -> i64 {
        self.epoch_micros
    }

    /// Whole seconds since the epoch, flooring toward negative infinity
    /// (so sub-second instants before 1970 still truncate consistently).
    pub fn epoch_seconds(self) -> i64 {
        self.epoch_micros.div_euclid(MICROS_PER_SECOND)
    }

    /// The sub-second component in microseconds, always in `0..1_000_000`.
    pub fn subsec_micros(self) -> u32 {
        self.epoch_micros.rem_euclid(MICROS_PER_SECOND) as u32
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Seconds derived from an i64 microsecond timeline always fit the
        // civil calendar range, so reconstruction cannot fail here.
        match datetime::epoch_seconds_to_civil(self.epoch_seconds()) {
            Ok(civil) => write!(
                f,
                "{}{}Z",
                civil,
                format_fractional_micros(self.subsec_micros())
            ),
            Err(_) => write!(f, "@{}us", self.epoch_micros),
        }
    }
}

impl FromStr for Instant {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Instant, DateTimeParseError> {
        datetime::parse_instant(s)
    }
}
