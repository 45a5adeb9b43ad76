use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::projection_model::{Metrics, Projection};
use crate::goals::GoalDefinition;
use crate::settings::PacingPolicy;
use crate::snapshot::Snapshot;
use crate::utils::time_utils::{days_between, inclusive_days};

/// Computes progress metrics for `snapshot` as of `today`.
///
/// Pure: the snapshot is only read and the result depends on nothing but the
/// arguments. Under [`PacingPolicy::WithExplicitStart`] a goal without a start
/// date counts as not set.
///
/// Day counts are whole calendar days. With an explicit start the window is
/// `[start, target]`. In target-only mode it is `[today, target]`, so it
/// shrinks every day and nothing is prescribed until the target date passes.
pub fn project(snapshot: &Snapshot, today: NaiveDate, policy: PacingPolicy) -> Projection {
    let Some(goal) = snapshot.goal.as_ref() else {
        return Projection::GoalNotSet;
    };

    let window = match policy {
        PacingPolicy::WithExplicitStart => match goal.start_date {
            Some(start) => explicit_start_window(start, goal.target_date, today),
            None => return Projection::GoalNotSet,
        },
        PacingPolicy::TargetOnly => target_only_window(goal.target_date, today),
    };

    Projection::Progress(compute_metrics(
        goal,
        snapshot.total_collected,
        window,
        policy,
    ))
}

/// Day counts of the goal window, before any money is involved.
struct Window {
    total_days: i64,
    days_passed: Option<i64>,
    days_left: i64,
    /// Days the plan expects to have been funded by today.
    prescribed_days: i64,
}

fn explicit_start_window(start: NaiveDate, target: NaiveDate, today: NaiveDate) -> Window {
    let total_days = inclusive_days(start, target);
    let days_passed = days_between(start, today).max(0);
    Window {
        total_days,
        days_passed: Some(days_passed),
        days_left: inclusive_days(today, target).max(0),
        prescribed_days: days_passed.min(total_days),
    }
}

fn target_only_window(target: NaiveDate, today: NaiveDate) -> Window {
    let total_days = inclusive_days(today, target);
    let days_left = total_days.max(0);
    Window {
        total_days,
        days_passed: None,
        days_left,
        prescribed_days: total_days - days_left,
    }
}

fn compute_metrics(
    goal: &GoalDefinition,
    total_collected: Decimal,
    window: Window,
    policy: PacingPolicy,
) -> Metrics {
    // Saturating: a stored goal may be out of range.
    let total_target = saturating_mul(goal.daily_goal, Decimal::from(window.total_days));
    let should_have_by_now = saturating_mul(goal.daily_goal, Decimal::from(window.prescribed_days));
    let plan_delta = saturating_sub(total_collected, should_have_by_now);
    let remaining_amount = saturating_sub(total_target, total_collected).max(Decimal::ZERO);

    let daily_required = if window.days_left > 0 {
        remaining_amount / Decimal::from(window.days_left)
    } else {
        Decimal::ZERO
    };

    let progress_percent = if total_target > Decimal::ZERO {
        // An overflowing ratio is far beyond the target anyway.
        total_collected
            .checked_div(total_target)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .unwrap_or(dec!(100))
            .clamp(Decimal::ZERO, dec!(100))
    } else {
        Decimal::ZERO
    };

    Metrics {
        policy,
        total_days: window.total_days,
        days_passed: window.days_passed,
        days_left: window.days_left,
        total_target,
        should_have_by_now,
        plan_delta,
        remaining_amount,
        daily_required,
        progress_percent,
        total_collected,
    }
}

fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or(if a.is_sign_negative() == b.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or(if a > b { Decimal::MAX } else { Decimal::MIN })
}
