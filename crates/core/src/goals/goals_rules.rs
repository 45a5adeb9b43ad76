use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::goals_errors::GoalError;
use super::goals_model::{GoalDefinition, NewGoalDefinition};
use crate::settings::PacingPolicy;
use crate::utils::input_utils::decimal_from_f64;
use crate::utils::time_utils::inclusive_days;

/// Validates form input and builds the goal that replaces the current one.
///
/// Checks run in a fixed order: blank fields, then the date range, then the
/// daily amount. The target must lie after the start date (when the policy
/// tracks one) and after `today`. Under [`PacingPolicy::TargetOnly`] a
/// supplied start date is dropped.
pub fn define_goal(
    input: &NewGoalDefinition,
    policy: PacingPolicy,
    today: NaiveDate,
) -> Result<GoalDefinition, GoalError> {
    let start_date = match policy {
        PacingPolicy::WithExplicitStart => {
            Some(input.start_date.ok_or(GoalError::MissingField("startDate"))?)
        }
        PacingPolicy::TargetOnly => None,
    };
    let target_date = input
        .target_date
        .ok_or(GoalError::MissingField("targetDate"))?;
    let raw_daily_goal = input
        .daily_goal
        .ok_or(GoalError::MissingField("dailyGoal"))?;

    if let Some(start) = start_date {
        if target_date <= start {
            return Err(GoalError::InvalidRange {
                target: target_date,
                after: start,
            });
        }
    }
    if target_date <= today {
        return Err(GoalError::InvalidRange {
            target: target_date,
            after: today,
        });
    }

    // The whole-window target must be representable, or projection overflows.
    let window_days = inclusive_days(start_date.unwrap_or(today), target_date);
    let daily_goal = decimal_from_f64(raw_daily_goal)
        .filter(|d| *d > Decimal::ZERO)
        .filter(|d| d.checked_mul(Decimal::from(window_days)).is_some())
        .ok_or_else(|| GoalError::InvalidGoal(raw_daily_goal.to_string()))?;

    debug!(
        "Goal defined: start={:?} target={} daily={}",
        start_date, target_date, daily_goal
    );

    Ok(GoalDefinition {
        start_date,
        target_date,
        daily_goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 10)
    }

    #[test]
    fn test_define_goal_with_explicit_start() {
        let input = NewGoalDefinition::new(Some(date(2024, 6, 1)), date(2024, 6, 30), 1500.0);
        let goal = define_goal(&input, PacingPolicy::WithExplicitStart, today()).unwrap();
        assert_eq!(goal.start_date, Some(date(2024, 6, 1)));
        assert_eq!(goal.target_date, date(2024, 6, 30));
        assert_eq!(goal.daily_goal, dec!(1500));
    }

    #[test]
    fn test_target_only_drops_start_date() {
        let input = NewGoalDefinition::new(Some(date(2024, 6, 1)), date(2024, 6, 30), 250.5);
        let goal = define_goal(&input, PacingPolicy::TargetOnly, today()).unwrap();
        assert_eq!(goal.start_date, None);
        assert_eq!(goal.daily_goal, dec!(250.5));
    }

    #[test]
    fn test_missing_fields_reported_first() {
        let blank = NewGoalDefinition::default();
        assert_eq!(
            define_goal(&blank, PacingPolicy::WithExplicitStart, today()),
            Err(GoalError::MissingField("startDate"))
        );
        assert_eq!(
            define_goal(&blank, PacingPolicy::TargetOnly, today()),
            Err(GoalError::MissingField("targetDate"))
        );

        let no_amount = NewGoalDefinition {
            start_date: Some(date(2024, 6, 1)),
            target_date: Some(date(2024, 5, 1)),
            daily_goal: None,
        };
        // Blank beats an inverted range.
        assert_eq!(
            define_goal(&no_amount, PacingPolicy::WithExplicitStart, today()),
            Err(GoalError::MissingField("dailyGoal"))
        );
    }

    #[test]
    fn test_target_must_follow_start() {
        let same_day = NewGoalDefinition::new(Some(date(2024, 6, 20)), date(2024, 6, 20), 10.0);
        assert_eq!(
            define_goal(&same_day, PacingPolicy::WithExplicitStart, today()),
            Err(GoalError::InvalidRange {
                target: date(2024, 6, 20),
                after: date(2024, 6, 20),
            })
        );
    }

    #[test]
    fn test_target_must_be_after_today() {
        let input = NewGoalDefinition::new(None, today(), 10.0);
        assert_eq!(
            define_goal(&input, PacingPolicy::TargetOnly, today()),
            Err(GoalError::InvalidRange {
                target: today(),
                after: today(),
            })
        );
    }

    #[test]
    fn test_daily_goal_must_be_positive_and_finite() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let input = NewGoalDefinition::new(None, date(2024, 7, 1), bad);
            assert!(matches!(
                define_goal(&input, PacingPolicy::TargetOnly, today()),
                Err(GoalError::InvalidGoal(_))
            ));
        }
    }

    #[test]
    fn test_daily_goal_too_large_for_window() {
        let input = NewGoalDefinition::new(Some(date(2024, 6, 9)), date(2024, 9, 18), 1e27);
        assert!(matches!(
            define_goal(&input, PacingPolicy::WithExplicitStart, today()),
            Err(GoalError::InvalidGoal(_))
        ));

        // Fits for a short window.
        let short = NewGoalDefinition::new(Some(date(2024, 6, 9)), date(2024, 6, 11), 1e27);
        assert!(define_goal(&short, PacingPolicy::WithExplicitStart, today()).is_ok());
    }
}
