use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::readings_errors::ReadingError;
use crate::utils::time_utils;

/// One recorded progress increment. Immutable once created; entries are
/// append-only and removable only as a whole, by id.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReadingLog {
    pub id: String,
    /// Authoritative instant for all date arithmetic.
    pub logged_at: DateTime<Utc>,
    /// Calendar-date string for display only, never used for computation.
    pub display_date: String,
    pub amount: Decimal,
    #[serde(default)]
    pub notes: String,
}

/// User input for recording a reading.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewReading {
    pub amount: Decimal,
    #[serde(default)]
    pub notes: String,
}

impl NewReading {
    pub fn validate(&self) -> Result<(), ReadingError> {
        if self.amount <= Decimal::ZERO {
            return Err(ReadingError::InvalidAmount);
        }
        Ok(())
    }
}

impl ReadingLog {
    /// Materializes a log entry from validated input, stamped with a fresh
    /// id and the given instant.
    pub fn from_new(new_reading: NewReading, now: DateTime<Utc>) -> ReadingLog {
        ReadingLog {
            id: Uuid::new_v4().to_string(),
            logged_at: now,
            display_date: time_utils::local_day(now).format("%Y-%m-%d").to_string(),
            amount: new_reading.amount,
            notes: new_reading.notes.trim().to_string(),
        }
    }
}

/// Date window for narrowing the log view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReadingWindow {
    #[default]
    All,
    Today,
    Week,
    Month,
}

/// Search and date criteria applied to the log view.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReadingFilter {
    pub search: Option<String>,
    #[serde(default)]
    pub window: ReadingWindow,
}

impl ReadingFilter {
    /// Returns the entries matching this filter, most recent first.
    pub fn apply(&self, logs: &[ReadingLog], today: NaiveDate) -> Vec<ReadingLog> {
        let term = self
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|term| !term.is_empty());

        let mut filtered: Vec<ReadingLog> = logs
            .iter()
            .filter(|log| match &term {
                Some(term) => {
                    log.display_date.contains(term.as_str())
                        || log.notes.to_lowercase().contains(term.as_str())
                        || log.amount.to_string().contains(term.as_str())
                }
                None => true,
            })
            .filter(|log| self.window.contains(time_utils::local_day(log.logged_at), today))
            .cloned()
            .collect();

        filtered.reverse();
        filtered
    }
}

impl ReadingWindow {
    fn contains(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ReadingWindow::All => true,
            ReadingWindow::Today => day == today,
            ReadingWindow::Week => day >= today - Duration::days(7),
            ReadingWindow::Month => {
                day >= today
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(NaiveDate::MIN)
            }
        }
    }
}
