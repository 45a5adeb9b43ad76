pub mod decimal_serde;
pub mod input_utils;
pub mod time_utils;

pub use input_utils::{decimal_from_f64, parse_amount, parse_date};
pub use time_utils::{days_between, inclusive_days, local_date_from_utc, parse_timezone};
