#[cfg(test)]
mod tests {
    use crate::constants::MAX_HISTORY_ENTRIES;
    use crate::contributions::{
        clear_history, history_by_date, record_contribution, Contribution, ContributionError,
        NewContribution,
    };
    use crate::goals::GoalDefinition;
    use crate::settings::PacingPolicy;
    use crate::snapshot::Snapshot;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 5, 20)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 12, 30, 0).unwrap()
    }

    fn goal_snapshot() -> Snapshot {
        Snapshot {
            goal: Some(GoalDefinition {
                start_date: Some(date(2024, 5, 1)),
                target_date: date(2024, 5, 31),
                daily_goal: dec!(1000),
            }),
            contributions: Vec::new(),
            total_collected: Decimal::ZERO,
        }
    }

    fn record(
        snapshot: &Snapshot,
        amount: f64,
        on: Option<NaiveDate>,
    ) -> Result<Snapshot, ContributionError> {
        record_contribution(
            snapshot,
            &NewContribution::new(amount, on),
            PacingPolicy::WithExplicitStart,
            today(),
            now(),
        )
    }

    #[test]
    fn test_record_prepends_and_adds_to_total() {
        let first = record(&goal_snapshot(), 700.0, Some(date(2024, 5, 2))).unwrap();
        let second = record(&first, 250.5, Some(date(2024, 5, 19))).unwrap();

        assert_eq!(second.total_collected, dec!(950.5));
        assert_eq!(second.contributions.len(), 2);
        assert_eq!(second.contributions[0].amount, dec!(250.5));
        assert_eq!(second.contributions[0].date, date(2024, 5, 19));
        assert_eq!(second.contributions[0].recorded_at, now());
        assert_eq!(second.contributions[1].amount, dec!(700));
        assert_eq!(second.goal, goal_snapshot().goal);
    }

    #[test]
    fn test_non_positive_amount_rejected_and_snapshot_untouched() {
        let snapshot = record(&goal_snapshot(), 100.0, Some(today())).unwrap();
        let before = snapshot.clone();

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                record(&snapshot, bad, Some(today())),
                Err(ContributionError::InvalidAmount(_))
            ));
        }
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_amount_checked_before_goal() {
        assert!(matches!(
            record(&Snapshot::empty(), -5.0, Some(today())),
            Err(ContributionError::InvalidAmount(_))
        ));
        assert_eq!(
            record(&Snapshot::empty(), 5.0, None),
            Err(ContributionError::DateMissing)
        );
        assert_eq!(
            record(&Snapshot::empty(), 5.0, Some(today())),
            Err(ContributionError::GoalNotConfigured)
        );
    }

    #[test]
    fn test_date_must_be_inside_goal_window() {
        let snapshot = goal_snapshot();
        assert_eq!(
            record(&snapshot, 10.0, Some(date(2024, 4, 30))),
            Err(ContributionError::DateOutOfRange {
                date: date(2024, 4, 30),
                start: date(2024, 5, 1),
                target: date(2024, 5, 31),
            })
        );
        assert!(matches!(
            record(&snapshot, 10.0, Some(date(2024, 6, 1))),
            Err(ContributionError::DateOutOfRange { .. })
        ));
        // Both ends are inclusive.
        assert!(record(&snapshot, 10.0, Some(date(2024, 5, 1))).is_ok());
        assert!(record(&snapshot, 10.0, Some(date(2024, 5, 31))).is_ok());
    }

    #[test]
    fn test_explicit_policy_needs_goal_start() {
        let mut snapshot = goal_snapshot();
        if let Some(goal) = snapshot.goal.as_mut() {
            goal.start_date = None;
        }
        assert_eq!(
            record(&snapshot, 10.0, Some(today())),
            Err(ContributionError::GoalNotConfigured)
        );
    }

    #[test]
    fn test_target_only_uses_entry_day() {
        let mut snapshot = goal_snapshot();
        if let Some(goal) = snapshot.goal.as_mut() {
            goal.start_date = None;
        }
        let updated = record_contribution(
            &snapshot,
            &NewContribution::new(300.0, Some(date(2020, 1, 1))),
            PacingPolicy::TargetOnly,
            today(),
            now(),
        )
        .unwrap();
        assert_eq!(updated.contributions[0].date, today());
        assert_eq!(updated.total_collected, dec!(300));

        let without_date = record_contribution(
            &updated,
            &NewContribution::new(1.0, None),
            PacingPolicy::TargetOnly,
            today(),
            now(),
        );
        assert!(without_date.is_ok());
    }

    #[test]
    fn test_history_capped_but_total_keeps_everything() {
        let mut snapshot = goal_snapshot();
        for i in 1..=MAX_HISTORY_ENTRIES as u32 {
            snapshot = record(&snapshot, f64::from(i), Some(today())).unwrap();
        }
        assert_eq!(snapshot.contributions.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(snapshot.total_collected, dec!(1275));

        let snapshot = record(&snapshot, 1000.0, Some(today())).unwrap();
        assert_eq!(snapshot.contributions.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(snapshot.contributions[0].amount, dec!(1000));
        // The very first entry (amount 1) fell off; the second survives at the end.
        assert_eq!(
            snapshot.contributions[MAX_HISTORY_ENTRIES - 1].amount,
            dec!(2)
        );
        assert!(!snapshot.contributions.iter().any(|c| c.amount == dec!(1)));
        assert_eq!(snapshot.total_collected, dec!(2275));

        let report = snapshot.reconcile();
        assert_eq!(report.drift, dec!(1));
    }

    #[test]
    fn test_clear_history_keeps_goal() {
        let snapshot = record(&goal_snapshot(), 500.0, Some(today())).unwrap();
        let cleared = clear_history(&snapshot);
        assert!(cleared.contributions.is_empty());
        assert_eq!(cleared.total_collected, Decimal::ZERO);
        assert_eq!(cleared.goal, snapshot.goal);
    }

    #[test]
    fn test_history_by_date_orders_by_attribution_day() {
        let at = now();
        let entry = |d: NaiveDate, amount: Decimal| Contribution {
            date: d,
            amount,
            recorded_at: at,
        };
        let snapshot = Snapshot {
            goal: None,
            contributions: vec![
                entry(date(2024, 5, 3), dec!(3)),
                entry(date(2024, 5, 10), dec!(10)),
                entry(date(2024, 5, 3), dec!(33)),
                entry(date(2024, 5, 7), dec!(7)),
            ],
            total_collected: dec!(53),
        };

        let amounts: Vec<Decimal> = history_by_date(&snapshot)
            .into_iter()
            .map(|c| c.amount)
            .collect();
        assert_eq!(amounts, vec![dec!(10), dec!(7), dec!(3), dec!(33)]);
    }
}
