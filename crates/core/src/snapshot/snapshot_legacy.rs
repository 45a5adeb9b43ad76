//! Reader for the flat snapshot layout written by earlier releases.
//!
//! That layout kept the goal fields at the top level (`startDate`,
//! `targetDate`, `dailyGoal`), stored the history under `history` with an
//! `addedAt` timestamp per entry, and used `null` / `0` for an unset goal.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::snapshot_model::Snapshot;
use crate::contributions::Contribution;
use crate::errors::{DatabaseError, Result};
use crate::goals::GoalDefinition;
use crate::utils::input_utils::decimal_from_f64;

pub(super) fn is_legacy_payload(value: &serde_json::Value) -> bool {
    value.get("history").is_some() || value.get("dailyGoal").is_some()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LegacySnapshot {
    start_date: Option<String>,
    target_date: Option<String>,
    #[serde(default)]
    daily_goal: f64,
    #[serde(default)]
    history: Vec<LegacyEntry>,
    #[serde(default)]
    total_collected: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyEntry {
    date: NaiveDate,
    amount: f64,
    added_at: DateTime<Utc>,
}

fn legacy_decimal(value: f64, field: &str) -> Result<Decimal> {
    decimal_from_f64(value).ok_or_else(|| {
        DatabaseError::ReadFailed(format!("legacy field '{}' is not a number", field)).into()
    })
}

fn legacy_date(value: Option<&str>) -> Option<NaiveDate> {
    value
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

impl LegacySnapshot {
    /// Converts to the current model. A goal exists only if both a target
    /// date and a positive daily amount were stored.
    pub(super) fn into_snapshot(self) -> Result<Snapshot> {
        let target_date = legacy_date(self.target_date.as_deref());
        let daily_goal = legacy_decimal(self.daily_goal, "dailyGoal")?;

        let goal = match target_date {
            Some(target_date) if daily_goal > Decimal::ZERO => Some(GoalDefinition {
                start_date: legacy_date(self.start_date.as_deref()),
                target_date,
                daily_goal,
            }),
            _ => None,
        };

        let contributions = self
            .history
            .into_iter()
            .map(|entry| {
                Ok(Contribution {
                    date: entry.date,
                    amount: legacy_decimal(entry.amount, "amount")?,
                    recorded_at: entry.added_at,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Snapshot {
            goal,
            contributions,
            total_collected: legacy_decimal(self.total_collected, "totalCollected")?,
        })
    }
}
