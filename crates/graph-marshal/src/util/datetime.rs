//! Civil/epoch date-time arithmetic and RFC 3339 text conversion.
//!
//! The storage domain for time-like values is whole seconds since the Unix
//! epoch (1970-01-01T00:00:00Z), always UTC. This module converts between
//! that representation and the civil field types in [`crate::model::time`]:
//! - Date: days since epoch x 86,400 (midnight UTC)
//! - Civil datetime: fields read as UTC wall-clock
//!
//! Text conversion accepts `YYYY-MM-DD` and `YYYY-MM-DD[T ]HH:MM:SS[.ffffff][Z]`.

use crate::error::{ConvertError, DateTimeParseError};
use crate::model::time::{CalendarDate, CivilDateTime, Instant};

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;

/// Returns true if the given year is a leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calculates days since the Unix epoch for a civil date.
///
/// Howard Hinnant's algorithm, computed in i64 so the full i32 year range
/// is representable.
pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let m = month as i64;

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // year of era
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    era * 146_097 + doe - 719_468
}

/// Converts days since the Unix epoch to (year, month, day).
///
/// Returns `None` when the resulting year does not fit in i32 (possible
/// because an i64 day count reaches far beyond the calendar range).
pub(crate) fn civil_from_days(days: i64) -> Option<(i32, u8, u8)> {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // day of era
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // year of era
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year
    let mp = (5 * doy + 2) / 153; // month index
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;

    let year = i32::try_from(if m <= 2 { y + 1 } else { y }).ok()?;
    Some((year, m, d))
}

/// Epoch seconds of midnight UTC on the given date.
pub fn date_to_epoch_seconds(date: &CalendarDate) -> i64 {
    days_from_civil(date.year(), date.month(), date.day()) * SECONDS_PER_DAY
}

/// Truncates an epoch-seconds instant to its UTC calendar date.
pub fn epoch_seconds_to_date(seconds: i64) -> Result<CalendarDate, ConvertError> {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let (year, month, day) =
        civil_from_days(days).ok_or(ConvertError::EpochOutOfRange { seconds })?;
    CalendarDate::new(year, month, day).ok_or(ConvertError::EpochOutOfRange { seconds })
}

/// Epoch seconds of the civil fields read as UTC wall-clock.
///
/// The sub-second component is dropped (truncated, not rounded).
pub fn civil_to_epoch_seconds(civil: &CivilDateTime) -> i64 {
    days_from_civil(civil.year(), civil.month(), civil.day()) * SECONDS_PER_DAY
        + civil.hour() as i64 * SECONDS_PER_HOUR
        + civil.minute() as i64 * SECONDS_PER_MINUTE
        + civil.second() as i64
}

/// Reconstructs UTC civil fields from epoch seconds. The sub-second
/// component of the result is always zero.
pub fn epoch_seconds_to_civil(seconds: i64) -> Result<CivilDateTime, ConvertError> {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let secs_of_day = seconds.rem_euclid(SECONDS_PER_DAY);

    let (year, month, day) =
        civil_from_days(days).ok_or(ConvertError::EpochOutOfRange { seconds })?;
    let hour = (secs_of_day / SECONDS_PER_HOUR) as u8;
    let minute = (secs_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8;
    let second = (secs_of_day % SECONDS_PER_MINUTE) as u8;

    CalendarDate::new(year, month, day)
        .and_then(|date| CivilDateTime::from_parts(date, hour, minute, second))
        .ok_or(ConvertError::EpochOutOfRange { seconds })
}

/// Formats microseconds as a fractional-seconds suffix, omitting it when zero.
pub(crate) fn format_fractional_micros(micros: u32) -> String {
    if micros == 0 {
        return String::new();
    }

    let digits = format!("{:06}", micros);
    format!(".{}", digits.trim_end_matches('0'))
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<CalendarDate, DateTimeParseError> {
    parse_date_fields(s)
        .ok_or_else(|| DateTimeParseError::new(format!("invalid RFC 3339 date: {s}")))
}

fn parse_date_fields(s: &str) -> Option<CalendarDate> {
    if !s.is_ascii() || s.len() != 10 {
        return None;
    }
    let bytes = s.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let year: i32 = s[..4].parse().ok()?;
    let month: u8 = s[5..7].parse().ok()?;
    let day: u8 = s[8..10].parse().ok()?;
    CalendarDate::new(year, month, day)
}

/// Parses a `YYYY-MM-DD[T ]HH:MM:SS[.ffffff][Z]` civil datetime string.
///
/// A trailing `Z` is accepted (the fields are UTC either way); numeric
/// offsets are not, since `CivilDateTime` carries no offset to hold them.
pub fn parse_datetime(s: &str) -> Result<CivilDateTime, DateTimeParseError> {
    parse_datetime_fields(s)
        .ok_or_else(|| DateTimeParseError::new(format!("invalid RFC 3339 datetime: {s}")))
}

fn parse_datetime_fields(s: &str) -> Option<CivilDateTime> {
    if !s.is_ascii() || s.len() < 19 {
        return None;
    }
    let bytes = s.as_bytes();
    if bytes[10] != b'T' && bytes[10] != b' ' {
        return None;
    }
    if bytes[13] != b':' || bytes[16] != b':' {
        return None;
    }

    let date = parse_date_fields(&s[..10])?;
    let hour: u8 = s[11..13].parse().ok()?;
    let minute: u8 = s[14..16].parse().ok()?;
    let second: u8 = s[17..19].parse().ok()?;

    let rest = &s[19..];
    let (micros, rest) = match rest.strip_prefix('.') {
        Some(frac) => {
            let digits_end = frac
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(frac.len());
            if digits_end == 0 || digits_end > 6 {
                return None;
            }
            (parse_fractional_micros(&frac[..digits_end])?, &frac[digits_end..])
        }
        None => (0, rest),
    };
    if !(rest.is_empty() || rest == "Z" || rest == "z") {
        return None;
    }

    CivilDateTime::from_parts(date, hour, minute, second)?.with_micros(micros)
}

/// Parses fractional-second digits (at most 6) into microseconds.
fn parse_fractional_micros(digits: &str) -> Option<u32> {
    let mut micros: u32 = digits.parse().ok()?;
    for _ in digits.len()..6 {
        micros *= 10;
    }
    Some(micros)
}

/// Parses a civil datetime string as an absolute UTC instant.
pub fn parse_instant(s: &str) -> Result<Instant, DateTimeParseError> {
    let civil = parse_datetime(s)?;
    // Four-digit years keep this well inside the i64 microsecond timeline.
    let epoch_micros = civil_to_epoch_seconds(&civil) * MICROS_PER_SECOND + civil.micros() as i64;
    Ok(Instant::from_epoch_micros(epoch_micros))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_days_from_civil_known_values() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2024, 3, 15), 19797);
        assert_eq!(days_from_civil(2000, 2, 29), 11016);
    }

    #[test]
    fn test_civil_from_days_known_values() {
        assert_eq!(civil_from_days(0), Some((1970, 1, 1)));
        assert_eq!(civil_from_days(-1), Some((1969, 12, 31)));
        assert_eq!(civil_from_days(19797), Some((2024, 3, 15)));
    }

    #[test]
    fn test_civil_from_days_year_overflow() {
        assert_eq!(civil_from_days(i64::MAX / 86_400), None);
        assert_eq!(civil_from_days(i64::MIN / 86_400), None);
    }

    #[test]
    fn test_date_epoch_seconds() {
        let date = CalendarDate::new(2021, 3, 15).unwrap();
        assert_eq!(date_to_epoch_seconds(&date), 1_615_766_400);
        assert_eq!(epoch_seconds_to_date(1_615_766_400).unwrap(), date);

        // Any instant during the day truncates to the same date.
        assert_eq!(epoch_seconds_to_date(1_615_766_400 + 3_600).unwrap(), date);
        assert_eq!(epoch_seconds_to_date(1_615_766_400 + 86_399).unwrap(), date);
    }

    #[test]
    fn test_civil_epoch_seconds() {
        let civil = CivilDateTime::new(2021, 3, 15, 10, 30, 45).unwrap();
        assert_eq!(civil_to_epoch_seconds(&civil), 1_615_804_245);
        assert_eq!(epoch_seconds_to_civil(1_615_804_245).unwrap(), civil);
    }

    #[test]
    fn test_civil_epoch_drops_micros() {
        let civil = CivilDateTime::new(2021, 3, 15, 10, 30, 45)
            .unwrap()
            .with_micros(999_999)
            .unwrap();
        assert_eq!(civil_to_epoch_seconds(&civil), 1_615_804_245);
    }

    #[test]
    fn test_negative_epoch() {
        assert_eq!(
            epoch_seconds_to_civil(-1).unwrap(),
            CivilDateTime::new(1969, 12, 31, 23, 59, 59).unwrap()
        );
        let date = CalendarDate::new(1969, 12, 31).unwrap();
        assert_eq!(date_to_epoch_seconds(&date), -86_400);
        // A second before midnight still belongs to the earlier day.
        assert_eq!(epoch_seconds_to_date(-1).unwrap(), date);
    }

    #[test]
    fn test_epoch_out_of_range() {
        assert_eq!(
            epoch_seconds_to_date(i64::MAX),
            Err(ConvertError::EpochOutOfRange { seconds: i64::MAX })
        );
        assert_eq!(
            epoch_seconds_to_civil(i64::MIN),
            Err(ConvertError::EpochOutOfRange { seconds: i64::MIN })
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2021-03-15").unwrap(),
            CalendarDate::new(2021, 3, 15).unwrap()
        );
        assert!(parse_date("2021-13-01").is_err()); // invalid month
        assert!(parse_date("2023-02-29").is_err()); // not a leap year
        assert!(parse_date("2021-03-15Z").is_err()); // no offset suffix on dates
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_parse_datetime() {
        let expected = CivilDateTime::new(2021, 3, 15, 10, 30, 45).unwrap();
        assert_eq!(parse_datetime("2021-03-15T10:30:45").unwrap(), expected);
        assert_eq!(parse_datetime("2021-03-15 10:30:45").unwrap(), expected);
        assert_eq!(parse_datetime("2021-03-15T10:30:45Z").unwrap(), expected);
        assert_eq!(
            parse_datetime("2021-03-15T10:30:45.5Z").unwrap(),
            expected.with_micros(500_000).unwrap()
        );
        assert_eq!(
            parse_datetime("2021-03-15T10:30:45.123456").unwrap(),
            expected.with_micros(123_456).unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("2021-03-15T24:00:00").is_err()); // invalid hour
        assert!(parse_datetime("2021-03-15T10:60:00").is_err()); // invalid minute
        assert!(parse_datetime("2021-03-15T10:30:60").is_err()); // invalid second
        assert!(parse_datetime("2021-03-15T10:30:45.1234567").is_err()); // too much precision
        assert!(parse_datetime("2021-03-15T10:30:45.").is_err()); // empty fraction
        assert!(parse_datetime("2021-03-15T10:30:45+05:30").is_err()); // offsets unsupported
        assert!(parse_datetime("2021-03-15X10:30:45").is_err()); // bad separator
    }

    #[test]
    fn test_parse_instant() {
        let instant = parse_instant("2021-03-15T10:30:45Z").unwrap();
        assert_eq!(instant.epoch_seconds(), 1_615_804_245);
        assert_eq!(instant.subsec_micros(), 0);

        let fractional = parse_instant("2021-03-15T10:30:45.25Z").unwrap();
        assert_eq!(fractional.epoch_micros(), 1_615_804_245_250_000);
    }

    #[test]
    fn test_format_fractional_micros() {
        assert_eq!(format_fractional_micros(0), "");
        assert_eq!(format_fractional_micros(500_000), ".5");
        assert_eq!(format_fractional_micros(123_456), ".123456");
        assert_eq!(format_fractional_micros(1), ".000001");
    }

    proptest! {
        #[test]
        fn prop_civil_days_roundtrip(days in -100_000_000i64..100_000_000) {
            let (year, month, day) = civil_from_days(days).unwrap();
            prop_assert_eq!(days_from_civil(year, month, day), days);
        }

        #[test]
        fn prop_civil_fields_in_range(days in -100_000_000i64..100_000_000) {
            let (year, month, day) = civil_from_days(days).unwrap();
            prop_assert!((1..=12).contains(&month));
            prop_assert!(day >= 1 && day <= days_in_month(year, month));
        }

        #[test]
        fn prop_epoch_civil_roundtrip(seconds in -4_000_000_000_000i64..4_000_000_000_000) {
            let civil = epoch_seconds_to_civil(seconds).unwrap();
            prop_assert_eq!(civil_to_epoch_seconds(&civil), seconds);
        }

        #[test]
        fn prop_date_epoch_roundtrip(days in -100_000_000i64..100_000_000) {
            let (year, month, day) = civil_from_days(days).unwrap();
            let date = CalendarDate::new(year, month, day).unwrap();
            let seconds = date_to_epoch_seconds(&date);
            prop_assert_eq!(seconds.rem_euclid(SECONDS_PER_DAY), 0);
            prop_assert_eq!(epoch_seconds_to_date(seconds).unwrap(), date);
        }
    }
}
