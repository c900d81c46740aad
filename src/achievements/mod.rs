pub mod achievements_constants;
pub mod achievements_model;
pub mod achievements_service;

pub use achievements_constants::ACHIEVEMENT_CATALOG;
pub use achievements_model::{
    AchievementCheck, AchievementDefinition, AchievementKind, AchievementStatus,
};
pub use achievements_service::{achievement_statuses, check_achievements};
