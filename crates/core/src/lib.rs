//! Goalpace Core - savings goal domain, pacing projection and services.
//!
//! This crate holds the logic of the tracker: defining a goal, recording
//! contributions, and projecting progress against a daily plan. It is
//! storage-agnostic and defines the repository traits that the
//! `storage-sqlite` crate implements.
//!
//! ```text
//! UI ──► TrackerService ──► goals / contributions (validation)
//!             │                      │
//!             │                      ▼
//!             │                  Snapshot ◄──► SnapshotRepositoryTrait
//!             ▼
//!        projection ──► presentation (display strings)
//! ```

pub mod constants;
pub mod contributions;
pub mod errors;
pub mod goals;
pub mod presentation;
pub mod projection;
pub mod settings;
pub mod snapshot;
pub mod tracker;
pub mod utils;

// Re-export the types most callers need
pub use contributions::{Contribution, NewContribution};
pub use goals::{GoalDefinition, NewGoalDefinition};
pub use projection::{project, Metrics, Projection};
pub use settings::{PacingPolicy, TrackerSettings};
pub use snapshot::{Snapshot, SnapshotRepositoryTrait};
pub use tracker::{TrackerService, TrackerServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
