use diesel::prelude::*;
use log::warn;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::tracker_model::TrackerState;
use super::tracker_traits::TrackerStateRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::plans::Plan;
use crate::schema::state_entries::dsl::*;

const PLAN_KEY: &str = "plan";
const LOGS_KEY: &str = "logs";
const THEME_KEY: &str = "theme";
const ACHIEVEMENTS_KEY: &str = "achievements";
const STREAK_KEY: &str = "streak";
const LONGEST_STREAK_KEY: &str = "longestStreak";

/// Keys owned by the tracking lifecycle; the theme deliberately survives a
/// full reset.
const TRACKING_KEYS: [&str; 5] = [
    PLAN_KEY,
    LOGS_KEY,
    ACHIEVEMENTS_KEY,
    STREAK_KEY,
    LONGEST_STREAK_KEY,
];

#[derive(Queryable, Insertable, Debug)]
#[diesel(table_name = crate::schema::state_entries)]
pub struct StateEntry {
    pub entry_key: String,
    pub entry_value: String,
}

pub struct TrackerStateRepository {
    pool: Arc<DbPool>,
}

impl TrackerStateRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        TrackerStateRepository { pool }
    }
}

impl TrackerStateRepositoryTrait for TrackerStateRepository {
    fn load(&self) -> Result<TrackerState> {
        let mut conn = get_connection(&self.pool)?;
        let all_entries: Vec<(String, String)> = state_entries
            .select((entry_key, entry_value))
            .load::<(String, String)>(&mut conn)
            .map_err(Error::from)?;

        let mut state = TrackerState::default();

        for (key, value) in all_entries {
            match key.as_str() {
                PLAN_KEY => {
                    state.plan = parse_entry::<Plan>(PLAN_KEY, &value).filter(|plan| {
                        if plan.is_well_formed() {
                            true
                        } else {
                            warn!("Discarding stored plan with out-of-range values");
                            false
                        }
                    });
                }
                LOGS_KEY => {
                    state.logs = parse_entry(LOGS_KEY, &value).unwrap_or_default();
                }
                THEME_KEY => state.theme = value,
                ACHIEVEMENTS_KEY => {
                    state.unlocked_achievements =
                        parse_entry(ACHIEVEMENTS_KEY, &value).unwrap_or_default();
                }
                STREAK_KEY => {
                    state.streak.current = value.parse().unwrap_or(0);
                }
                LONGEST_STREAK_KEY => {
                    state.streak.longest = value.parse().unwrap_or(0);
                }
                _ => {} // Ignore unknown entries
            }
        }

        Ok(state)
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<_, Error, _>(|conn| {
            match &state.plan {
                Some(plan) => {
                    diesel::replace_into(state_entries)
                        .values(&StateEntry {
                            entry_key: PLAN_KEY.to_string(),
                            entry_value: serde_json::to_string(plan)?,
                        })
                        .execute(conn)?;
                }
                None => {
                    diesel::delete(state_entries.filter(entry_key.eq(PLAN_KEY)))
                        .execute(conn)?;
                }
            }

            diesel::replace_into(state_entries)
                .values(&StateEntry {
                    entry_key: LOGS_KEY.to_string(),
                    entry_value: serde_json::to_string(&state.logs)?,
                })
                .execute(conn)?;

            diesel::replace_into(state_entries)
                .values(&StateEntry {
                    entry_key: THEME_KEY.to_string(),
                    entry_value: state.theme.clone(),
                })
                .execute(conn)?;

            diesel::replace_into(state_entries)
                .values(&StateEntry {
                    entry_key: ACHIEVEMENTS_KEY.to_string(),
                    entry_value: serde_json::to_string(&state.unlocked_achievements)?,
                })
                .execute(conn)?;

            diesel::replace_into(state_entries)
                .values(&StateEntry {
                    entry_key: STREAK_KEY.to_string(),
                    entry_value: state.streak.current.to_string(),
                })
                .execute(conn)?;

            diesel::replace_into(state_entries)
                .values(&StateEntry {
                    entry_key: LONGEST_STREAK_KEY.to_string(),
                    entry_value: state.streak.longest.to_string(),
                })
                .execute(conn)?;

            Ok(())
        })
    }

    fn clear_tracking_state(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(state_entries.filter(entry_key.eq_any(TRACKING_KEYS)))
            .execute(&mut conn)
            .map_err(Error::from)?;
        Ok(())
    }
}

fn parse_entry<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding unreadable state entry '{}': {}", key, e);
            None
        }
    }
}
