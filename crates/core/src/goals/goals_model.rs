//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated savings goal.
///
/// `start_date` is only tracked under the explicit-start pacing policy. A goal
/// is always replaced as a whole; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub target_date: NaiveDate,
    #[serde(with = "crate::utils::decimal_serde")]
    pub daily_goal: Decimal,
}

/// Input model for defining a goal, as received from the settings form.
///
/// Every field is optional so that a blank field can be reported as such
/// instead of failing at deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDefinition {
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub daily_goal: Option<f64>,
}

impl NewGoalDefinition {
    pub fn new(start_date: Option<NaiveDate>, target_date: NaiveDate, daily_goal: f64) -> Self {
        NewGoalDefinition {
            start_date,
            target_date: Some(target_date),
            daily_goal: Some(daily_goal),
        }
    }
}
