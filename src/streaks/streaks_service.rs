use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::streaks_model::StreakSummary;
use crate::readings::ReadingLog;
use crate::utils::time_utils;

/// Recomputes the consecutive-day streak from the full log sequence.
///
/// Entries are bucketed into unique local calendar days; the streak is the
/// run of consecutive days ending at `today` or yesterday. Recomputing from
/// scratch on every mutation keeps the value drift-free regardless of entry
/// order or deletions. `previous_longest` is the persisted high-water mark,
/// returned unchanged or raised to the new current.
pub fn compute_streak(
    logs: &[ReadingLog],
    today: NaiveDate,
    previous_longest: u32,
) -> StreakSummary {
    let day_keys: BTreeSet<NaiveDate> = logs
        .iter()
        .map(|log| time_utils::local_day(log.logged_at))
        .collect();

    let current = current_run(&day_keys, today);

    StreakSummary {
        current,
        longest: previous_longest.max(current),
    }
}

fn current_run(day_keys: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut recent_first = day_keys.iter().rev();

    let latest = match recent_first.next() {
        Some(latest) => *latest,
        None => return 0,
    };

    // A streak survives overnight: it counts when the latest entry is from
    // today or yesterday, and is broken by any longer inactivity.
    let yesterday = today.pred_opt().unwrap_or(today);
    if latest != today && latest != yesterday {
        return 0;
    }

    let mut run = 1;
    let mut anchor = latest;
    for &day in recent_first {
        match anchor.pred_opt() {
            Some(previous) if day == previous => {
                run += 1;
                anchor = day;
            }
            _ => break,
        }
    }

    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Local, TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::readings::NewReading;

    fn local_noon(day: NaiveDate) -> DateTime<Utc> {
        Local
            .from_local_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn create_test_log(day: NaiveDate) -> ReadingLog {
        ReadingLog::from_new(
            NewReading {
                amount: dec!(1),
                notes: String::new(),
            },
            local_noon(day),
        )
    }

    fn test_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_empty_logs_have_no_streak() {
        let summary = compute_streak(&[], test_today(), 4);
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 4);
    }

    #[test]
    fn test_single_entry_today_starts_streak() {
        let logs = vec![create_test_log(test_today())];
        let summary = compute_streak(&logs, test_today(), 0);
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 1);
    }

    #[test]
    fn test_consecutive_days_count_through_first_gap() {
        let today = test_today();
        let logs = vec![
            create_test_log(today),
            create_test_log(today - Duration::days(1)),
            create_test_log(today - Duration::days(2)),
            // Gap at three days back, then an older island.
            create_test_log(today - Duration::days(4)),
            create_test_log(today - Duration::days(5)),
        ];

        let summary = compute_streak(&logs, today, 0);
        assert_eq!(summary.current, 3);
    }

    #[test]
    fn test_streak_survives_one_missed_day_anchor() {
        let today = test_today();
        let logs = vec![
            create_test_log(today - Duration::days(1)),
            create_test_log(today - Duration::days(2)),
        ];

        let summary = compute_streak(&logs, today, 0);
        assert_eq!(summary.current, 2);
    }

    #[test]
    fn test_stale_entries_break_streak() {
        let today = test_today();
        let logs = vec![
            create_test_log(today - Duration::days(3)),
            create_test_log(today - Duration::days(4)),
        ];

        let summary = compute_streak(&logs, today, 5);
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 5);
    }

    #[test]
    fn test_multiple_entries_per_day_collapse() {
        let today = test_today();
        let logs = vec![
            create_test_log(today),
            create_test_log(today),
            create_test_log(today - Duration::days(1)),
        ];

        let summary = compute_streak(&logs, today, 0);
        assert_eq!(summary.current, 2);
    }

    #[test]
    fn test_longest_ratchets_up_never_down() {
        let today = test_today();
        let week: Vec<ReadingLog> = (0..7)
            .map(|offset| create_test_log(today - Duration::days(offset)))
            .collect();

        let summary = compute_streak(&week, today, 2);
        assert_eq!(summary.current, 7);
        assert_eq!(summary.longest, 7);

        // A later recompute with fewer active days keeps the ratchet.
        let summary = compute_streak(&week[..1], today, summary.longest);
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 7);
    }

    #[test]
    fn test_insertion_order_is_irrelevant() {
        let today = test_today();
        let mut logs = vec![
            create_test_log(today - Duration::days(2)),
            create_test_log(today),
            create_test_log(today - Duration::days(1)),
        ];

        let forward = compute_streak(&logs, today, 0);
        logs.reverse();
        let backward = compute_streak(&logs, today, 0);

        assert_eq!(forward.current, 3);
        assert_eq!(backward.current, 3);
    }
}
