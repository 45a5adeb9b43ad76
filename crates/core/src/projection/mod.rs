//! Projection module - progress and pacing metrics derived from a snapshot.

mod projection_engine;
mod projection_model;


pub use projection_engine::project;
pub use projection_model::{Metrics, PlanStatus, Projection};
