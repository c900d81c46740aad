use rust_decimal_macros::dec;

use super::achievements_model::{AchievementDefinition, AchievementKind};

/// Achievement ids
pub const ACHIEVEMENT_FIRST_READ: &str = "first_read";
pub const ACHIEVEMENT_FIVE_UNITS: &str = "five_units";
pub const ACHIEVEMENT_TEN_UNITS: &str = "ten_units";
pub const ACHIEVEMENT_FIFTEEN_UNITS: &str = "fifteen_units";
pub const ACHIEVEMENT_THIRTY_UNITS: &str = "thirty_units";
pub const ACHIEVEMENT_WEEK_STREAK: &str = "week_streak";
pub const ACHIEVEMENT_MONTH_STREAK: &str = "month_streak";

/// Fixed milestone catalog. Unlock checks walk it in this order, which
/// also fixes the notification order when several unlock at once.
pub const ACHIEVEMENT_CATALOG: [AchievementDefinition; 7] = [
    AchievementDefinition {
        id: ACHIEVEMENT_FIRST_READ,
        title: "First Steps",
        description: "Log your first reading",
        icon: "🌟",
        requirement: dec!(1),
        kind: AchievementKind::CumulativeUnits,
    },
    AchievementDefinition {
        id: ACHIEVEMENT_FIVE_UNITS,
        title: "Warming Up",
        description: "Read 5 units in total",
        icon: "📖",
        requirement: dec!(5),
        kind: AchievementKind::CumulativeUnits,
    },
    AchievementDefinition {
        id: ACHIEVEMENT_TEN_UNITS,
        title: "Dedicated",
        description: "Read 10 units in total",
        icon: "📚",
        requirement: dec!(10),
        kind: AchievementKind::CumulativeUnits,
    },
    AchievementDefinition {
        id: ACHIEVEMENT_FIFTEEN_UNITS,
        title: "Halfway There",
        description: "Read 15 units in total",
        icon: "⭐",
        requirement: dec!(15),
        kind: AchievementKind::CumulativeUnits,
    },
    AchievementDefinition {
        id: ACHIEVEMENT_THIRTY_UNITS,
        title: "Finisher",
        description: "Read 30 units in total",
        icon: "🏆",
        requirement: dec!(30),
        kind: AchievementKind::CumulativeUnits,
    },
    AchievementDefinition {
        id: ACHIEVEMENT_WEEK_STREAK,
        title: "A Full Week",
        description: "Read 7 days in a row",
        icon: "🔥",
        requirement: dec!(7),
        kind: AchievementKind::StreakDays,
    },
    AchievementDefinition {
        id: ACHIEVEMENT_MONTH_STREAK,
        title: "A Full Month",
        description: "Read 30 days in a row",
        icon: "💎",
        requirement: dec!(30),
        kind: AchievementKind::StreakDays,
    },
];
