use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plans::Plan;
use crate::readings::ReadingLog;
use crate::streaks::StreakSummary;

/// Default display theme applied when none has been stored.
pub const DEFAULT_THEME: &str = "light";

/// The canonical tracker state: plan parameters, the ordered log sequence,
/// unlocked achievement ids, and the streak counters. One instance exists
/// per service and is persisted wholesale on every mutation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub plan: Option<Plan>,
    /// Insertion-ordered, most recent last.
    pub logs: Vec<ReadingLog>,
    pub theme: String,
    /// Unlocked achievement ids in unlock order. Grows monotonically;
    /// cleared only by a full reset.
    pub unlocked_achievements: Vec<String>,
    pub streak: StreakSummary,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            plan: None,
            logs: Vec::new(),
            theme: DEFAULT_THEME.to_string(),
            unlocked_achievements: Vec::new(),
            streak: StreakSummary::default(),
        }
    }
}

/// Self-describing backup document for download and restore. Mirrors the
/// persisted shape minus the theme, plus the generation timestamp.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSnapshot {
    pub plan: Option<Plan>,
    pub logs: Vec<ReadingLog>,
    pub achievements: Vec<String>,
    pub streak: u32,
    pub longest_streak: u32,
    pub export_date: DateTime<Utc>,
}
