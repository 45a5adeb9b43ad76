//! Presentation module - turns metrics and history into display strings.

mod formatting;
mod locale;
mod summary;

pub use formatting::{
    format_amount, format_date, format_money, format_percent, format_signed_money,
    history_label, round_half_up, DateStyle,
};
pub use locale::DisplayLocale;
pub use summary::{HistoryEntryView, PlanTone, ProgressSummary};
