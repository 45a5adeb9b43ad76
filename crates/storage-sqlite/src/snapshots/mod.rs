//! SQLite storage implementation for the tracker snapshot.

mod model;
mod repository;

pub use model::SnapshotDB;
pub use repository::SnapshotRepository;

// Re-export trait from core for convenience
pub use goalpace_core::snapshot::SnapshotRepositoryTrait;
