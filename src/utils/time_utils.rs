use chrono::{DateTime, Local, NaiveDate, Utc};

/// Projects an instant onto the calendar day it falls in, in the local timezone.
///
/// All day-based arithmetic (streaks, elapsed days, daily totals) buckets
/// entries by this projection rather than by the raw UTC date.
pub fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            // Should not happen for typical date ranges
            break;
        }
    }
    days
}
