//! Snapshot module - the persisted aggregate and its repository trait.

mod snapshot_legacy;
mod snapshot_model;
mod snapshot_traits;

pub use snapshot_model::{Reconciliation, Snapshot};
pub use snapshot_traits::SnapshotRepositoryTrait;
