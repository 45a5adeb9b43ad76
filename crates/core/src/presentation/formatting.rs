use chrono::{Datelike, NaiveDate};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::locale::DisplayLocale;
use crate::constants::PERCENT_DISPLAY_PRECISION;
use crate::utils::time_utils::{is_same_year, previous_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Day and abbreviated month: `5 янв`.
    Short,
    /// Day, full month and year: `5 января 2024`.
    Long,
}

/// Rounds to the nearest integer, halves going up (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: Decimal) -> Decimal {
    value
        .checked_add(dec!(0.5))
        .map_or_else(|| value.floor(), |v| v.floor())
}

fn group_digits(value: u128, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-unit amount with locale thousands grouping: `1234567.6 -> "1 234 568"`.
///
/// The sign follows the unrounded value, so a small shortfall reads `-0`.
pub fn format_amount(value: Decimal, locale: DisplayLocale) -> String {
    let rounded = round_half_up(value).to_i128().unwrap_or_default();
    let grouped = group_digits(rounded.unsigned_abs(), locale.group_separator());
    if value < Decimal::ZERO {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_money(value: Decimal, locale: DisplayLocale, currency_symbol: &str) -> String {
    format!("{} {}", format_amount(value, locale), currency_symbol)
}

/// Money with an explicit `+` for zero and positive values.
pub fn format_signed_money(value: Decimal, locale: DisplayLocale, currency_symbol: &str) -> String {
    if value >= Decimal::ZERO {
        format!("+{}", format_money(value, locale, currency_symbol))
    } else {
        format_money(value, locale, currency_symbol)
    }
}

/// Percentage with one decimal place: `42.5%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        PERCENT_DISPLAY_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.1}%", rounded)
}

pub fn format_date(date: NaiveDate, style: DateStyle, locale: DisplayLocale) -> String {
    match style {
        DateStyle::Short => format!("{} {}", date.day(), locale.short_month(date.month0())),
        DateStyle::Long => format!(
            "{} {} {}",
            date.day(),
            locale.long_month(date.month0()),
            date.year()
        ),
    }
}

/// Label for a history row: "today" / "yesterday" for the last two days,
/// otherwise day and full month, with the year only when it is not the
/// current one.
pub fn history_label(date: NaiveDate, today: NaiveDate, locale: DisplayLocale) -> String {
    if date == today {
        return locale.today_label().to_string();
    }
    if previous_day(today) == Some(date) {
        return locale.yesterday_label().to_string();
    }
    if is_same_year(date, today) {
        format!("{} {}", date.day(), locale.long_month(date.month0()))
    } else {
        format_date(date, DateStyle::Long, locale)
    }
}
