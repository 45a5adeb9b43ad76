use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use log::{debug, warn};

use super::tracker_traits::TrackerServiceTrait;
use crate::contributions::{self, NewContribution};
use crate::errors::Result;
use crate::goals::{self, NewGoalDefinition};
use crate::presentation::ProgressSummary;
use crate::projection::{self, Projection};
use crate::settings::TrackerSettings;
use crate::snapshot::{Reconciliation, Snapshot, SnapshotRepositoryTrait};
use crate::utils::time_utils::{local_date_from_utc, parse_timezone};

pub struct TrackerService {
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    settings: TrackerSettings,
    timezone: Tz,
}

impl TrackerService {
    /// Fails only when the configured timezone is not a known IANA name.
    pub fn new(
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
        settings: TrackerSettings,
    ) -> Result<Self> {
        let timezone = parse_timezone(&settings.timezone)?;
        Ok(TrackerService {
            snapshot_repository,
            settings,
            timezone,
        })
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        local_date_from_utc(now, self.timezone)
    }

    fn persist(&self, snapshot: Snapshot) -> Result<Snapshot> {
        self.snapshot_repository.save_snapshot(&snapshot)?;
        Ok(snapshot)
    }
}

impl TrackerServiceTrait for TrackerService {
    fn get_snapshot(&self) -> Snapshot {
        self.snapshot_repository.load_snapshot()
    }

    fn define_goal(&self, input: NewGoalDefinition, now: DateTime<Utc>) -> Result<Snapshot> {
        let goal = goals::define_goal(&input, self.settings.pacing_policy, self.today(now))?;

        let mut snapshot = self.snapshot_repository.load_snapshot();
        snapshot.goal = Some(goal);
        self.persist(snapshot)
    }

    fn record_contribution(&self, input: NewContribution, now: DateTime<Utc>) -> Result<Snapshot> {
        let current = self.snapshot_repository.load_snapshot();
        let updated = contributions::record_contribution(
            &current,
            &input,
            self.settings.pacing_policy,
            self.today(now),
            now,
        )?;

        let report = updated.reconcile();
        if !report.is_balanced() {
            debug!(
                "Collected total {} exceeds retained history sum {} by {}",
                report.total_collected, report.retained_sum, report.drift
            );
        }
        self.persist(updated)
    }

    fn clear_history(&self) -> Result<Snapshot> {
        let current = self.snapshot_repository.load_snapshot();
        self.persist(contributions::clear_history(&current))
    }

    fn get_progress(&self, now: DateTime<Utc>) -> Projection {
        let snapshot = self.snapshot_repository.load_snapshot();
        projection::project(&snapshot, self.today(now), self.settings.pacing_policy)
    }

    fn get_summary(&self, now: DateTime<Utc>) -> ProgressSummary {
        let snapshot = self.snapshot_repository.load_snapshot();
        ProgressSummary::build(&snapshot, self.today(now), &self.settings)
    }

    fn reconcile(&self) -> Reconciliation {
        let report = self.snapshot_repository.load_snapshot().reconcile();
        if !report.is_balanced() {
            warn!(
                "Collected total {} differs from retained history sum {} by {}",
                report.total_collected, report.retained_sum, report.drift
            );
        }
        report
    }
}
