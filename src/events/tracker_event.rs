//! Tracker event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by the tracker service after successful mutations.
///
/// Each event carries the facts of one state change; `Display` renders a
/// short status line for notification surfaces that want ready-made text.
/// Embedding layers needing richer presentation read the fields instead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackerEvent {
    /// A new plan was created.
    PlanSaved {
        target_units: Decimal,
        duration_days: i64,
    },

    /// A reading log entry was recorded.
    ReadingAdded { log_id: String, amount: Decimal },

    /// A reading log entry was deleted.
    ReadingDeleted { log_id: String },

    /// All reading log entries were removed at once.
    ReadingsCleared { removed: usize },

    /// The plan and all tracking state were reset.
    PlanReset,

    /// One or more achievements were unlocked, in catalog order.
    AchievementsUnlocked { achievement_ids: Vec<String> },

    /// State was replaced from an exported snapshot.
    SnapshotRestored,
}

impl TrackerEvent {
    /// Creates a PlanSaved event.
    pub fn plan_saved(target_units: Decimal, duration_days: i64) -> Self {
        Self::PlanSaved {
            target_units,
            duration_days,
        }
    }

    /// Creates a ReadingAdded event.
    pub fn reading_added(log_id: String, amount: Decimal) -> Self {
        Self::ReadingAdded { log_id, amount }
    }

    /// Creates a ReadingDeleted event.
    pub fn reading_deleted(log_id: String) -> Self {
        Self::ReadingDeleted { log_id }
    }

    /// Creates a ReadingsCleared event.
    pub fn readings_cleared(removed: usize) -> Self {
        Self::ReadingsCleared { removed }
    }

    /// Creates a PlanReset event.
    pub fn plan_reset() -> Self {
        Self::PlanReset
    }

    /// Creates an AchievementsUnlocked event.
    pub fn achievements_unlocked(achievement_ids: Vec<String>) -> Self {
        Self::AchievementsUnlocked { achievement_ids }
    }

    /// Creates a SnapshotRestored event.
    pub fn snapshot_restored() -> Self {
        Self::SnapshotRestored
    }
}

impl fmt::Display for TrackerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerEvent::PlanSaved {
                target_units,
                duration_days,
            } => write!(
                f,
                "Plan saved: {} units over {} days",
                target_units, duration_days
            ),
            TrackerEvent::ReadingAdded { amount, .. } => {
                write!(f, "Reading added: {} units", amount)
            }
            TrackerEvent::ReadingDeleted { .. } => write!(f, "Reading log entry deleted"),
            TrackerEvent::ReadingsCleared { removed } => {
                write!(f, "Cleared {} reading log entries", removed)
            }
            TrackerEvent::PlanReset => write!(f, "Plan and tracking data reset"),
            TrackerEvent::AchievementsUnlocked { achievement_ids } => {
                if achievement_ids.len() == 1 {
                    write!(f, "New achievement unlocked")
                } else {
                    write!(f, "{} new achievements unlocked", achievement_ids.len())
                }
            }
            TrackerEvent::SnapshotRestored => write!(f, "Tracker state restored from backup"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tracker_event_serialization() {
        let event = TrackerEvent::reading_added("log-1".to_string(), dec!(2.5));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("reading_added"));

        let deserialized: TrackerEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            TrackerEvent::ReadingAdded { log_id, amount } => {
                assert_eq!(log_id, "log-1");
                assert_eq!(amount, dec!(2.5));
            }
            _ => panic!("Expected ReadingAdded"),
        }
    }

    #[test]
    fn test_display_renders_status_lines() {
        let event = TrackerEvent::plan_saved(dec!(30), 30);
        assert_eq!(event.to_string(), "Plan saved: 30 units over 30 days");

        let event = TrackerEvent::readings_cleared(3);
        assert_eq!(event.to_string(), "Cleared 3 reading log entries");

        let event = TrackerEvent::achievements_unlocked(vec!["first_read".to_string()]);
        assert_eq!(event.to_string(), "New achievement unlocked");

        let event = TrackerEvent::achievements_unlocked(vec![
            "first_read".to_string(),
            "five_units".to_string(),
        ]);
        assert_eq!(event.to_string(), "2 new achievements unlocked");
    }

    #[test]
    fn test_achievements_unlocked_preserves_order() {
        let event = TrackerEvent::achievements_unlocked(vec![
            "first_read".to_string(),
            "five_units".to_string(),
        ]);

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TrackerEvent = serde_json::from_str(&json).unwrap();

        match deserialized {
            TrackerEvent::AchievementsUnlocked { achievement_ids } => {
                assert_eq!(achievement_ids, vec!["first_read", "five_units"]);
            }
            _ => panic!("Expected AchievementsUnlocked"),
        }
    }
}
