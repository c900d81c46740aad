use rust_decimal::Decimal;
use serde::Serialize;

/// Threshold kind an achievement is measured against.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Total units read across all log entries.
    CumulativeUnits,
    /// Length of the current consecutive-day streak.
    StreakDays,
}

/// One milestone of the static catalog. Definitions are configuration:
/// the unlock engine never special-cases individual ids, so new milestones
/// only need a catalog entry.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: Decimal,
    pub kind: AchievementKind,
}

/// Outcome of an unlock evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementCheck {
    /// Ids unlocked by this evaluation, in catalog order.
    pub newly_unlocked: Vec<String>,
    /// Full unlocked set including the new ids.
    pub unlocked_ids: Vec<String>,
}

/// One catalog entry together with its unlock flag; the plain data behind a
/// badges view.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    #[serde(flatten)]
    pub definition: AchievementDefinition,
    pub unlocked: bool,
}
