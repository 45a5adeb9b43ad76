//! Contribution domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recorded contribution.
///
/// `date` is the calendar day the money counts for; `recorded_at` is when the
/// entry was made and is kept for auditing only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub date: NaiveDate,
    #[serde(with = "crate::utils::decimal_serde")]
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

/// Input model for recording a contribution.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub amount: f64,
    pub date: Option<NaiveDate>,
}

impl NewContribution {
    pub fn new(amount: f64, date: Option<NaiveDate>) -> Self {
        NewContribution { amount, date }
    }
}
