use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::{Error, Result};

/// Converts a UTC instant to the calendar day it falls on in the given timezone.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Parses an IANA timezone name such as `Europe/Moscow`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| Error::InvalidConfigValue(format!("timezone '{}': {}", name, e)))
}

/// Signed number of whole calendar days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Inclusive day count of the span `[start, end]`. Zero or negative when
/// `end` is before `start`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    days_between(start, end) + 1
}

/// The day before `date`, if representable.
pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.pred_opt()
}

pub fn is_same_year(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year()
}
