use serde::{Deserialize, Serialize};

/// Consecutive-day reading streak together with its all-time high-water
/// mark. `longest` only ratchets upward; a full reset is the one exception.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}
