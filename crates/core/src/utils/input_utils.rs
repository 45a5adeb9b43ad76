//! Parsing helpers for raw form input.

use std::str::FromStr;

use chrono::NaiveDate;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};

/// Converts a float coming from the UI into a `Decimal`.
///
/// Returns `None` for NaN and infinities; those never make a valid amount.
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Parses a user-typed amount such as `"1 500,50"` or `"1500.5"`.
///
/// Group separators (plain and non-breaking spaces) are ignored and a comma is
/// accepted as the decimal separator.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::MissingField("amount".to_string()).into());
    }

    Decimal::from_str(&cleaned).map_err(|e| Error::Validation(ValidationError::DecimalParse(e)))
}

/// Parses an ISO `YYYY-MM-DD` date field. A blank field yields `None`.
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(ValidationError::DateTimeParse)?;
    Ok(Some(date))
}
