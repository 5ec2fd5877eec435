//! Local contact time to UTC.
//!
//! HamLog stores the QSO date as `D/M/YYYY` and times of day as `HHMM` in the
//! station's local time, tagged with a timezone label. ADIF wants UTC
//! `YYYYMMDD` and `HHMM`.

use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::error::ConvertError;

/// The only timezone label HamLog exports that is understood.
pub const SUPPORTED_TIMEZONE: &str = "UTC+08:00";

/// `%z` rendering of [`SUPPORTED_TIMEZONE`].
const SUPPORTED_OFFSET: &str = "+0800";

/// Grammar of the composed `"<date> <time> <offset>"` string.
const LOCAL_FORMAT: &str = "%d/%m/%Y %H%M %z";

const UTC_DATE_FORMAT: &str = "%Y%m%d";
const UTC_TIME_FORMAT: &str = "%H%M";

/// Offset added to an end time that sorts before its start time.
pub fn rollover_offset() -> Duration {
    Duration::hours(24)
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// True if `date` is `D/M/YYYY` and `time` is `HHMM`, digits only.
///
/// chrono alone is looser: it skips leading spaces and takes years of any width.
fn is_local_grammar(date: &str, time: &str) -> bool {
    let mut parts = date.split('/');
    let shape_ok = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year), None) => {
            is_digits(day, 1, 2) && is_digits(month, 1, 2) && is_digits(year, 4, 4)
        }
        _ => false,
    };
    shape_ok && is_digits(time, 4, 4)
}

/// Parse a local date and time of day in timezone `tz`.
fn parse_local(date: &str, time: &str, tz: &str) -> Result<DateTime<FixedOffset>, ConvertError> {
    if tz != SUPPORTED_TIMEZONE {
        return Err(ConvertError::UnsupportedTimezone {
            label: tz.to_string(),
            supported: SUPPORTED_TIMEZONE,
        });
    }

    let composed = format!("{date} {time} {SUPPORTED_OFFSET}");
    if !is_local_grammar(date, time) {
        return Err(ConvertError::TimeGrammar {
            value: composed,
            source: None,
        });
    }
    DateTime::parse_from_str(&composed, LOCAL_FORMAT).map_err(|source| {
        ConvertError::TimeGrammar {
            value: composed,
            source: Some(source),
        }
    })
}

/// Convert a local date and time of day to UTC, after adding `offset`.
///
/// Returns the UTC date as `YYYYMMDD` and the UTC time as `HHMM`.
pub fn to_utc(
    date: &str,
    time: &str,
    tz: &str,
    offset: Duration,
) -> Result<(String, String), ConvertError> {
    let local = parse_local(date, time, tz)?;
    let utc = (local + offset).with_timezone(&Utc);
    Ok((
        utc.format(UTC_DATE_FORMAT).to_string(),
        utc.format(UTC_TIME_FORMAT).to_string(),
    ))
}

/// Offset to apply to an end time given the start time of the same contact.
///
/// Only a time of day is recorded for the end of a contact. An end time that
/// sorts before the start time is taken to be on the following day.
pub fn time_off_offset(time_on: &str, time_off: &str) -> Duration {
    if time_off < time_on {
        rollover_offset()
    } else {
        Duration::zero()
    }
}
