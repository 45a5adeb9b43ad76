use crate::errors::Result;
use crate::snapshot::Snapshot;

/// Durable single-slot storage for one [`Snapshot`].
///
/// There is no partial mutation API: callers load, change the value in
/// memory, and save the whole thing back.
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Returns the stored snapshot, or [`Snapshot::empty`] when nothing is
    /// stored or the stored data cannot be read. Never fails.
    fn load_snapshot(&self) -> Snapshot;

    /// Replaces the stored snapshot. Either the whole snapshot is written or
    /// nothing is, and a failure is always returned to the caller.
    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()>;
}
