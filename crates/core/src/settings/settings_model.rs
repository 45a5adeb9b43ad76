//! Tracker configuration models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_TIMEZONE};
use crate::errors::Error;
use crate::presentation::DisplayLocale;

pub const PACING_POLICY_KEY: &str = "pacing_policy";
pub const LOCALE_KEY: &str = "locale";
pub const CURRENCY_SYMBOL_KEY: &str = "currency_symbol";
pub const TIMEZONE_KEY: &str = "timezone";

/// How the goal window and the plan are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingPolicy {
    /// The goal has a start date; contributions carry their own attribution
    /// date, which must fall inside the goal window.
    #[default]
    WithExplicitStart,
    /// Only a target date is tracked; the window runs from today and
    /// contributions are attributed to the day they are entered.
    TargetOnly,
}

impl PacingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PacingPolicy::WithExplicitStart => "with_explicit_start",
            PacingPolicy::TargetOnly => "target_only",
        }
    }

    pub fn tracks_start_date(&self) -> bool {
        matches!(self, PacingPolicy::WithExplicitStart)
    }
}

impl fmt::Display for PacingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PacingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "with_explicit_start" => Ok(PacingPolicy::WithExplicitStart),
            "target_only" => Ok(PacingPolicy::TargetOnly),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown pacing policy '{}'",
                other
            ))),
        }
    }
}

/// Tracker settings. Missing keys fall back to `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSettings {
    pub pacing_policy: PacingPolicy,
    pub locale: DisplayLocale,
    pub currency_symbol: String,
    pub timezone: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            pacing_policy: PacingPolicy::default(),
            locale: DisplayLocale::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl TrackerSettings {
    /// Applies one stored key/value pair. Unknown keys are ignored and values
    /// that fail to parse leave the current value in place.
    pub fn apply_stored_value(&mut self, key: &str, value: &str) {
        match key {
            PACING_POLICY_KEY => {
                if let Ok(policy) = value.parse() {
                    self.pacing_policy = policy;
                }
            }
            LOCALE_KEY => {
                if let Ok(locale) = value.parse() {
                    self.locale = locale;
                }
            }
            CURRENCY_SYMBOL_KEY => self.currency_symbol = value.to_string(),
            TIMEZONE_KEY => self.timezone = value.to_string(),
            _ => {}
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSettingsUpdate {
    pub pacing_policy: Option<PacingPolicy>,
    pub locale: Option<DisplayLocale>,
    pub currency_symbol: Option<String>,
    pub timezone: Option<String>,
}

impl TrackerSettingsUpdate {
    /// Key/value pairs to persist, in a stable order.
    pub fn stored_values(&self) -> Vec<(&'static str, String)> {
        let mut values = Vec::new();
        if let Some(policy) = self.pacing_policy {
            values.push((PACING_POLICY_KEY, policy.as_str().to_string()));
        }
        if let Some(locale) = self.locale {
            values.push((LOCALE_KEY, locale.as_str().to_string()));
        }
        if let Some(ref symbol) = self.currency_symbol {
            values.push((CURRENCY_SYMBOL_KEY, symbol.clone()));
        }
        if let Some(ref timezone) = self.timezone {
            values.push((TIMEZONE_KEY, timezone.clone()));
        }
        values
    }
}
