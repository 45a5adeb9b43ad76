//! Projection result models.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::settings::PacingPolicy;

/// Whether collection is keeping up with the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanStatus {
    /// Collected at least what the plan prescribes by today.
    Ahead,
    Behind,
}

/// Progress figures for one goal as of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub policy: PacingPolicy,
    /// Inclusive length of the goal window in days.
    pub total_days: i64,
    /// Days elapsed since the start date. Only known when a start date is
    /// tracked.
    pub days_passed: Option<i64>,
    pub days_left: i64,
    pub total_target: Decimal,
    pub should_have_by_now: Decimal,
    /// `total_collected - should_have_by_now`; negative means behind plan.
    pub plan_delta: Decimal,
    pub remaining_amount: Decimal,
    pub daily_required: Decimal,
    /// Always within `[0, 100]`.
    pub progress_percent: Decimal,
    pub total_collected: Decimal,
}

impl Metrics {
    pub fn plan_status(&self) -> PlanStatus {
        if self.plan_delta >= Decimal::ZERO {
            PlanStatus::Ahead
        } else {
            PlanStatus::Behind
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_amount.is_zero()
    }
}

/// Result of projecting a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "metrics", rename_all = "camelCase")]
pub enum Projection {
    /// No usable goal; the UI shows placeholders.
    GoalNotSet,
    Progress(Metrics),
}

impl Projection {
    pub fn metrics(&self) -> Option<&Metrics> {
        match self {
            Projection::GoalNotSet => None,
            Projection::Progress(metrics) => Some(metrics),
        }
    }
}
