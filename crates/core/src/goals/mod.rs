//! Goals module - goal definition model, validation and errors.

mod goals_errors;
mod goals_model;
mod goals_rules;

pub use goals_errors::GoalError;
pub use goals_model::{GoalDefinition, NewGoalDefinition};
pub use goals_rules::define_goal;
