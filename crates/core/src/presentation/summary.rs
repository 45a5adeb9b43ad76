//! Display-ready view of a snapshot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::formatting::{
    format_amount, format_date, format_money, format_percent, format_signed_money,
    history_label, DateStyle,
};
use crate::constants::PLACEHOLDER_DASH;
use crate::contributions::history_by_date;
use crate::projection::{project, PlanStatus, Projection};
use crate::settings::TrackerSettings;
use crate::snapshot::Snapshot;

/// Colour hint for the plan status figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanTone {
    Positive,
    Negative,
}

impl From<PlanStatus> for PlanTone {
    fn from(status: PlanStatus) -> Self {
        match status {
            PlanStatus::Ahead => PlanTone::Positive,
            PlanStatus::Behind => PlanTone::Negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryView {
    pub label: String,
    pub amount: String,
}

/// Every figure of the progress screen, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub goal_set: bool,
    pub start_date: String,
    pub target_date: String,
    pub total_target: String,
    pub total_collected: String,
    pub days_left: String,
    pub daily_required: String,
    pub plan_status: String,
    pub plan_tone: Option<PlanTone>,
    pub progress_percent: String,
    pub progress_bar_width: String,
    pub history: Vec<HistoryEntryView>,
    /// Shown instead of the list when there is no history.
    pub empty_history_label: Option<String>,
}

impl ProgressSummary {
    pub fn build(snapshot: &Snapshot, today: NaiveDate, settings: &TrackerSettings) -> Self {
        let locale = settings.locale;
        let symbol = settings.currency_symbol.as_str();

        let history = history_views(snapshot, today, settings);
        let empty_history_label = history
            .is_empty()
            .then(|| locale.empty_history_label().to_string());

        let projection = project(snapshot, today, settings.pacing_policy);
        let (Projection::Progress(metrics), Some(goal)) = (projection, snapshot.goal.as_ref())
        else {
            return ProgressSummary {
                goal_set: false,
                start_date: PLACEHOLDER_DASH.to_string(),
                target_date: locale.goal_not_set_label().to_string(),
                total_target: "0".to_string(),
                total_collected: format_money(Decimal::ZERO, locale, symbol),
                days_left: PLACEHOLDER_DASH.to_string(),
                daily_required: format!("{} {}", PLACEHOLDER_DASH, symbol),
                plan_status: PLACEHOLDER_DASH.to_string(),
                plan_tone: None,
                progress_percent: "0%".to_string(),
                progress_bar_width: "0%".to_string(),
                history,
                empty_history_label,
            };
        };

        let start_date = goal
            .start_date
            .map(|d| format_date(d, DateStyle::Short, locale))
            .unwrap_or_else(|| PLACEHOLDER_DASH.to_string());

        ProgressSummary {
            goal_set: true,
            start_date,
            target_date: format_date(goal.target_date, DateStyle::Short, locale),
            total_target: format_amount(metrics.total_target, locale),
            total_collected: format_money(metrics.total_collected, locale, symbol),
            days_left: metrics.days_left.to_string(),
            daily_required: format_money(metrics.daily_required, locale, symbol),
            plan_status: format_signed_money(metrics.plan_delta, locale, symbol),
            plan_tone: Some(metrics.plan_status().into()),
            progress_percent: format_percent(metrics.progress_percent),
            progress_bar_width: format!("{}%", metrics.progress_percent.round_dp(2).normalize()),
            history,
            empty_history_label,
        }
    }
}

fn history_views(
    snapshot: &Snapshot,
    today: NaiveDate,
    settings: &TrackerSettings,
) -> Vec<HistoryEntryView> {
    history_by_date(snapshot)
        .into_iter()
        .map(|entry| HistoryEntryView {
            label: history_label(entry.date, today, settings.locale),
            amount: format!(
                "+{}",
                format_money(entry.amount, settings.locale, &settings.currency_symbol)
            ),
        })
        .collect()
}
