use rust_decimal::Decimal;

use super::tracker_model::{TrackerSnapshot, TrackerState};
use crate::achievements::AchievementStatus;
use crate::errors::Result;
use crate::plans::{NewPlan, Plan};
use crate::readings::{NewReading, ReadingFilter, ReadingLog};
use crate::stats::{DailyTotal, Stats};
use crate::streaks::StreakSummary;

/// Persistence contract for the tracker state.
///
/// The state is read back wholesale on startup and written wholesale on
/// every mutation; there is exactly one writer. Implementations must fall
/// back to defaults for any stored field that fails to parse instead of
/// failing the whole load.
pub trait TrackerStateRepositoryTrait: Send + Sync {
    fn load(&self) -> Result<TrackerState>;
    fn save(&self, state: &TrackerState) -> Result<()>;
    /// Removes everything except the display theme.
    fn clear_tracking_state(&self) -> Result<()>;
}

/// Operations offered by the tracker service.
pub trait TrackerServiceTrait: Send + Sync {
    // Mutations
    fn save_plan(&self, new_plan: NewPlan) -> Result<Plan>;
    fn add_reading(&self, new_reading: NewReading) -> Result<ReadingLog>;
    fn quick_add(&self, amount: Decimal) -> Result<ReadingLog>;
    fn delete_reading(&self, log_id: &str) -> Result<ReadingLog>;
    fn clear_readings(&self) -> Result<usize>;
    fn reset_plan(&self) -> Result<()>;
    fn set_theme(&self, theme: &str) -> Result<()>;
    fn toggle_theme(&self) -> Result<String>;
    fn restore_snapshot(&self, snapshot: TrackerSnapshot) -> Result<()>;

    // Queries
    fn get_plan(&self) -> Result<Option<Plan>>;
    fn get_logs(&self) -> Result<Vec<ReadingLog>>;
    fn filter_readings(&self, filter: &ReadingFilter) -> Result<Vec<ReadingLog>>;
    fn get_stats(&self) -> Result<Stats>;
    fn get_streak(&self) -> Result<StreakSummary>;
    fn weekly_totals(&self) -> Result<Vec<DailyTotal>>;
    fn unlocked_achievements(&self) -> Result<Vec<String>>;
    fn achievement_statuses(&self) -> Result<Vec<AchievementStatus>>;
    fn theme(&self) -> Result<String>;
    fn export_snapshot(&self) -> Result<TrackerSnapshot>;
}
