//! Contributions module - contribution model, recording rules and history views.

mod contributions_errors;
mod contributions_model;
mod contributions_rules;

#[cfg(test)]
mod contributions_rules_tests;

pub use contributions_errors::ContributionError;
pub use contributions_model::{Contribution, NewContribution};
pub use contributions_rules::{clear_history, history_by_date, record_contribution};
