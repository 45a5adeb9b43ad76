use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a contribution is refused. A refused contribution never touches
/// the snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContributionError {
    #[error("Amount must be a positive number: {0}")]
    InvalidAmount(String),

    #[error("Contribution date is missing")]
    DateMissing,

    #[error("No goal is configured yet")]
    GoalNotConfigured,

    #[error("Date {date} is outside the goal window {start}..={target}")]
    DateOutOfRange {
        date: NaiveDate,
        start: NaiveDate,
        target: NaiveDate,
    },
}
