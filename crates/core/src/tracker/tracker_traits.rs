use chrono::{DateTime, Utc};

use crate::contributions::NewContribution;
use crate::errors::Result;
use crate::goals::NewGoalDefinition;
use crate::presentation::ProgressSummary;
use crate::projection::Projection;
use crate::snapshot::{Reconciliation, Snapshot};

/// Operations offered to the UI. Every method takes the current instant
/// explicitly; nothing reads the clock internally.
///
/// Mutating methods persist only on success and return the snapshot that was
/// saved. A rejected input leaves the stored snapshot untouched.
pub trait TrackerServiceTrait: Send + Sync {
    fn get_snapshot(&self) -> Snapshot;

    fn define_goal(&self, input: NewGoalDefinition, now: DateTime<Utc>) -> Result<Snapshot>;

    fn record_contribution(&self, input: NewContribution, now: DateTime<Utc>) -> Result<Snapshot>;

    fn clear_history(&self) -> Result<Snapshot>;

    fn get_progress(&self, now: DateTime<Utc>) -> Projection;

    fn get_summary(&self, now: DateTime<Utc>) -> ProgressSummary;

    fn reconcile(&self) -> Reconciliation;
}
