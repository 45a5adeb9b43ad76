use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

const RU_SHORT_MONTHS: [&str; 12] = [
    "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];

const RU_LONG_MONTHS: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

const EN_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const EN_LONG_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Language and number conventions used for display strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLocale {
    #[default]
    Ru,
    En,
}

impl DisplayLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayLocale::Ru => "ru",
            DisplayLocale::En => "en",
        }
    }

    /// Thousands separator. Russian groups with a non-breaking space.
    pub fn group_separator(&self) -> char {
        match self {
            DisplayLocale::Ru => '\u{a0}',
            DisplayLocale::En => ',',
        }
    }

    /// Abbreviated month name; `month0` is zero-based.
    pub fn short_month(&self, month0: u32) -> &'static str {
        let names = match self {
            DisplayLocale::Ru => &RU_SHORT_MONTHS,
            DisplayLocale::En => &EN_SHORT_MONTHS,
        };
        names[(month0 % 12) as usize]
    }

    /// Full month name in the form used after a day number.
    pub fn long_month(&self, month0: u32) -> &'static str {
        let names = match self {
            DisplayLocale::Ru => &RU_LONG_MONTHS,
            DisplayLocale::En => &EN_LONG_MONTHS,
        };
        names[(month0 % 12) as usize]
    }

    pub fn today_label(&self) -> &'static str {
        match self {
            DisplayLocale::Ru => "Сегодня",
            DisplayLocale::En => "Today",
        }
    }

    pub fn yesterday_label(&self) -> &'static str {
        match self {
            DisplayLocale::Ru => "Вчера",
            DisplayLocale::En => "Yesterday",
        }
    }

    pub fn goal_not_set_label(&self) -> &'static str {
        match self {
            DisplayLocale::Ru => "не установлена",
            DisplayLocale::En => "not set",
        }
    }

    pub fn empty_history_label(&self) -> &'static str {
        match self {
            DisplayLocale::Ru => "Нет операций",
            DisplayLocale::En => "No contributions yet",
        }
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayLocale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(DisplayLocale::Ru),
            "en" | "en-us" | "en-gb" => Ok(DisplayLocale::En),
            other => Err(Error::InvalidConfigValue(format!("unknown locale '{}'", other))),
        }
    }
}
