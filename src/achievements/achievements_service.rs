use rust_decimal::Decimal;

use super::achievements_model::{
    AchievementCheck, AchievementDefinition, AchievementKind, AchievementStatus,
};

/// Evaluates the catalog against current totals and returns the ids that
/// newly unlocked plus the grown unlocked set.
///
/// Already-unlocked ids are skipped, so re-running after any mutation is
/// idempotent: an achievement unlocks exactly once. The unlocked set only
/// grows; nothing here ever revokes an id.
pub fn check_achievements(
    catalog: &[AchievementDefinition],
    unlocked_ids: &[String],
    total_read: Decimal,
    current_streak: u32,
) -> AchievementCheck {
    let mut unlocked: Vec<String> = unlocked_ids.to_vec();
    let mut newly_unlocked = Vec::new();

    for definition in catalog {
        if unlocked.iter().any(|id| id == definition.id) {
            continue;
        }

        let reached = match definition.kind {
            AchievementKind::CumulativeUnits => total_read >= definition.requirement,
            AchievementKind::StreakDays => {
                Decimal::from(current_streak) >= definition.requirement
            }
        };

        if reached {
            newly_unlocked.push(definition.id.to_string());
            unlocked.push(definition.id.to_string());
        }
    }

    AchievementCheck {
        newly_unlocked,
        unlocked_ids: unlocked,
    }
}

/// Zips the catalog with the unlocked set, preserving catalog order.
pub fn achievement_statuses(
    catalog: &[AchievementDefinition],
    unlocked_ids: &[String],
) -> Vec<AchievementStatus> {
    catalog
        .iter()
        .map(|definition| AchievementStatus {
            definition: definition.clone(),
            unlocked: unlocked_ids.iter().any(|id| id == definition.id),
        })
        .collect()
}
