use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::stats_model::{DailyTotal, PlanStatus, Stats};
use crate::constants::{DEFAULT_TARGET_UNITS, WEEKLY_SUMMARY_DAYS};
use crate::plans::Plan;
use crate::readings::ReadingLog;
use crate::utils::time_utils;

/// Derives progress metrics from the plan and log sequence.
///
/// Pure function of its inputs; `today` is the caller's calendar day so
/// results are reproducible under test. Without a plan it returns the
/// zero-progress sentinel rather than an error.
pub fn compute_stats(plan: Option<&Plan>, logs: &[ReadingLog], today: NaiveDate) -> Stats {
    let plan = match plan {
        Some(plan) => plan,
        None => {
            return Stats {
                total_read: Decimal::ZERO,
                remaining: DEFAULT_TARGET_UNITS,
                progress_percent: Decimal::ZERO,
                days_left: None,
                daily_pace: Decimal::ZERO,
                status: PlanStatus::None,
            }
        }
    };

    let total_read: Decimal = logs.iter().map(|log| log.amount).sum();
    let remaining = (plan.target_units - total_read).max(Decimal::ZERO);
    let progress_percent = if plan.target_units.is_zero() {
        Decimal::ZERO
    } else {
        (total_read / plan.target_units * dec!(100)).min(dec!(100))
    };

    let elapsed_days = (today - time_utils::local_day(plan.started_at)).num_days();
    let remaining_days = plan.duration_days - elapsed_days;
    // The pace divisor never drops below one day; the reported days_left
    // still bottoms out at zero.
    let safe_remaining_days = remaining_days.max(1);
    let daily_pace = remaining / Decimal::from(safe_remaining_days);

    let status = if progress_percent >= dec!(100) {
        PlanStatus::Completed
    } else if remaining_days <= 0 {
        PlanStatus::Expired
    } else {
        PlanStatus::Active
    };

    Stats {
        total_read,
        remaining,
        progress_percent,
        days_left: Some(remaining_days.max(0)),
        daily_pace,
        status,
    }
}

/// Per-day totals for the trailing week, oldest day first. Days without
/// entries are zero-filled so the summary always spans the full window.
pub fn weekly_totals(logs: &[ReadingLog], today: NaiveDate) -> Vec<DailyTotal> {
    let window_start = today - Duration::days(WEEKLY_SUMMARY_DAYS - 1);

    time_utils::get_days_between(window_start, today)
        .into_iter()
        .map(|day| {
            let total = logs
                .iter()
                .filter(|log| time_utils::local_day(log.logged_at) == day)
                .map(|log| log.amount)
                .sum();
            DailyTotal { day, total }
        })
        .collect()
}
