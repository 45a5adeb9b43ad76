use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a goal definition is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    #[error("Required field '{0}' is blank")]
    MissingField(&'static str),

    #[error("Target date {target} must be after {after}")]
    InvalidRange { target: NaiveDate, after: NaiveDate },

    #[error("Daily goal must be a positive number: {0}")]
    InvalidGoal(String),
}
