//! Snapshot domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::snapshot_legacy::{is_legacy_payload, LegacySnapshot};
use crate::constants::MAX_HISTORY_ENTRIES;
use crate::contributions::Contribution;
use crate::errors::{DatabaseError, Error, Result};
use crate::goals::GoalDefinition;

/// Complete persisted state: the goal plus the contribution history.
///
/// `contributions` is ordered most-recent-insertion first and holds at most
/// [`MAX_HISTORY_ENTRIES`] entries. `total_collected` is a running sum kept
/// incrementally; once older entries have been dropped from the history it
/// is larger than the sum of what is left.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub goal: Option<GoalDefinition>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
    #[serde(default, with = "crate::utils::decimal_serde")]
    pub total_collected: Decimal,
}

/// Outcome of comparing the running total with the retained history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub retained_sum: Decimal,
    pub total_collected: Decimal,
    /// `total_collected - retained_sum`. Positive once history was truncated.
    pub drift: Decimal,
}

impl Reconciliation {
    pub fn is_balanced(&self) -> bool {
        self.drift.is_zero()
    }
}

impl Snapshot {
    /// The state of a first run: no goal, no history, nothing collected.
    pub fn empty() -> Self {
        Snapshot::default()
    }

    pub fn has_goal(&self) -> bool {
        self.goal.is_some()
    }

    /// Decodes a stored payload.
    ///
    /// Accepts the current layout and the flat layout written by earlier
    /// versions of the app (`startDate`/`targetDate`/`dailyGoal`/`history`).
    /// The decoded value must pass [`Snapshot::validate`].
    pub fn from_json(payload: &str) -> Result<Snapshot> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        let snapshot = if is_legacy_payload(&value) {
            let legacy: LegacySnapshot = serde_json::from_value(value)?;
            legacy.into_snapshot()?
        } else {
            serde_json::from_value(value)?
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::Database(DatabaseError::WriteFailed(e.to_string())))
    }

    /// Structural checks a stored snapshot must satisfy to be usable.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| -> Result<()> {
            Err(DatabaseError::ReadFailed(reason.to_string()).into())
        };

        if self.contributions.len() > MAX_HISTORY_ENTRIES {
            return invalid("contribution history exceeds the retained window");
        }
        if self.contributions.iter().any(|c| c.amount <= Decimal::ZERO) {
            return invalid("contribution with a non-positive amount");
        }
        if self.total_collected < Decimal::ZERO {
            return invalid("negative collected total");
        }
        if let Some(goal) = &self.goal {
            if goal.daily_goal <= Decimal::ZERO {
                return invalid("goal with a non-positive daily amount");
            }
        }
        Ok(())
    }

    /// Compares the running total with the sum of the retained history.
    /// Informational only; nothing is corrected.
    pub fn reconcile(&self) -> Reconciliation {
        let retained_sum: Decimal = self.contributions.iter().map(|c| c.amount).sum();
        Reconciliation {
            retained_sum,
            total_collected: self.total_collected,
            drift: self.total_collected - retained_sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sample() -> Snapshot {
        Snapshot {
            goal: Some(GoalDefinition {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                target_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
                daily_goal: dec!(1000),
            }),
            contributions: vec![Contribution {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                amount: dec!(2500.50),
                recorded_at: Utc.with_ymd_and_hms(2024, 1, 5, 18, 0, 0).unwrap(),
            }],
            total_collected: dec!(2500.50),
        }
    }

    #[test]
    fn test_json_layout() {
        let json: serde_json::Value =
            serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["goal"]["startDate"], "2024-01-01");
        assert_eq!(json["goal"]["targetDate"], "2024-03-31");
        assert_eq!(json["goal"]["dailyGoal"], "1000");
        assert_eq!(json["contributions"][0]["date"], "2024-01-05");
        assert_eq!(json["contributions"][0]["recordedAt"], "2024-01-05T18:00:00Z");
        assert_eq!(json["contributions"][0]["amount"], "2500.50");
        assert_eq!(json["totalCollected"], "2500.50");
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = sample();
        let restored = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);

        let empty = Snapshot::empty();
        assert_eq!(Snapshot::from_json(&empty.to_json().unwrap()).unwrap(), empty);
    }

    #[test]
    fn test_round_trip_keeps_digits_beyond_f64() {
        let mut snapshot = sample();
        snapshot.contributions[0].amount = dec!(0.5);
        snapshot.total_collected = dec!(9000000000000001.5);

        let restored = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored.total_collected, dec!(9000000000000001.5));
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_numeric_amounts_still_load() {
        let snapshot = Snapshot::from_json(
            r#"{"goal":{"targetDate":"2024-03-31","dailyGoal":100},"contributions":[{"date":"2024-03-02","amount":12.5,"recordedAt":"2024-03-02T08:00:00Z"}],"totalCollected":12.5}"#,
        )
        .unwrap();
        assert_eq!(snapshot.goal.unwrap().daily_goal, dec!(100));
        assert_eq!(snapshot.contributions[0].amount, dec!(12.5));
        assert_eq!(snapshot.total_collected, dec!(12.5));
    }

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        assert_eq!(Snapshot::from_json("{}").unwrap(), Snapshot::empty());
        assert_eq!(
            Snapshot::from_json(r#"{"goal":null}"#).unwrap(),
            Snapshot::empty()
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(Snapshot::from_json("not json").is_err());
        assert!(Snapshot::from_json(r#"{"contributions": 5}"#).is_err());
        assert!(Snapshot::from_json(
            r#"{"goal":null,"contributions":[{"date":"2024-01-01","amount":-5,"recordedAt":"2024-01-01T00:00:00Z"}],"totalCollected":0}"#
        )
        .is_err());
    }

    #[test]
    fn test_reconcile_reports_drift() {
        let mut snapshot = sample();
        assert!(snapshot.reconcile().is_balanced());

        snapshot.total_collected = dec!(4000.50);
        let report = snapshot.reconcile();
        assert_eq!(report.retained_sum, dec!(2500.50));
        assert_eq!(report.drift, dec!(1500));
        assert!(!report.is_balanced());
    }
}
