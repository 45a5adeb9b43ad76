use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::contributions_errors::ContributionError;
use super::contributions_model::{Contribution, NewContribution};
use crate::constants::MAX_HISTORY_ENTRIES;
use crate::settings::PacingPolicy;
use crate::snapshot::Snapshot;
use crate::utils::input_utils::decimal_from_f64;

/// Validates a contribution and returns the snapshot with it applied.
///
/// The input snapshot is never modified. On success the new entry is placed
/// at the front of the history, `total_collected` grows by the amount and the
/// history is cut back to the newest [`MAX_HISTORY_ENTRIES`]. Entries that
/// fall off the end stay counted in `total_collected`.
///
/// Under [`PacingPolicy::TargetOnly`] the contribution is attributed to
/// `today` and any supplied date is ignored.
pub fn record_contribution(
    snapshot: &Snapshot,
    input: &NewContribution,
    policy: PacingPolicy,
    today: NaiveDate,
    recorded_at: DateTime<Utc>,
) -> Result<Snapshot, ContributionError> {
    let amount = decimal_from_f64(input.amount)
        .filter(|a| *a > Decimal::ZERO)
        .ok_or_else(|| ContributionError::InvalidAmount(input.amount.to_string()))?;

    let date = match policy {
        PacingPolicy::WithExplicitStart => input.date.ok_or(ContributionError::DateMissing)?,
        PacingPolicy::TargetOnly => today,
    };

    let goal = snapshot
        .goal
        .as_ref()
        .ok_or(ContributionError::GoalNotConfigured)?;

    if policy.tracks_start_date() {
        let start = goal.start_date.ok_or(ContributionError::GoalNotConfigured)?;
        if date < start || date > goal.target_date {
            return Err(ContributionError::DateOutOfRange {
                date,
                start,
                target: goal.target_date,
            });
        }
    }

    let total_collected = snapshot
        .total_collected
        .checked_add(amount)
        .ok_or_else(|| ContributionError::InvalidAmount(input.amount.to_string()))?;

    let mut contributions = Vec::with_capacity(MAX_HISTORY_ENTRIES);
    contributions.push(Contribution {
        date,
        amount,
        recorded_at,
    });
    contributions.extend(
        snapshot
            .contributions
            .iter()
            .take(MAX_HISTORY_ENTRIES - 1)
            .cloned(),
    );

    debug!(
        "Recorded contribution of {} for {}; total collected now {}",
        amount, date, total_collected
    );

    Ok(Snapshot {
        goal: snapshot.goal.clone(),
        contributions,
        total_collected,
    })
}

/// Drops the whole contribution history and resets the collected total.
/// The goal itself is kept.
pub fn clear_history(snapshot: &Snapshot) -> Snapshot {
    Snapshot {
        goal: snapshot.goal.clone(),
        contributions: Vec::new(),
        total_collected: Decimal::ZERO,
    }
}

/// Contributions ordered by attribution date, newest first. Entries sharing
/// a date keep their insertion order (most recent first).
pub fn history_by_date(snapshot: &Snapshot) -> Vec<&Contribution> {
    let mut entries: Vec<&Contribution> = snapshot.contributions.iter().collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}
