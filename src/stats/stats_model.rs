use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Plan lifecycle status, derived fresh from current data on every
/// computation and never stored. Terminal states are not sticky: deleting
/// entries can move a completed plan back to active.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    None,
    Active,
    Completed,
    Expired,
}

/// Derived progress metrics for the current plan and log sequence.
///
/// Figures are kept at full precision; call [`Stats::rounded`] for the
/// display form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_read: Decimal,
    pub remaining: Decimal,
    pub progress_percent: Decimal,
    /// Days until the plan window closes, clamped at zero. `None` when no
    /// plan exists.
    pub days_left: Option<i64>,
    /// Required amount per remaining day to finish on schedule.
    pub daily_pace: Decimal,
    pub status: PlanStatus,
}

impl Stats {
    /// Copy of these stats with every decimal figure rounded for display.
    pub fn rounded(&self) -> Stats {
        Stats {
            total_read: self.total_read.round_dp(DISPLAY_DECIMAL_PRECISION),
            remaining: self.remaining.round_dp(DISPLAY_DECIMAL_PRECISION),
            progress_percent: self.progress_percent.round_dp(DISPLAY_DECIMAL_PRECISION),
            daily_pace: self.daily_pace.round_dp(DISPLAY_DECIMAL_PRECISION),
            ..self.clone()
        }
    }
}

/// Total amount logged on one calendar day of the weekly summary window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub total: Decimal,
}
