use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::tracker_model::{TrackerSnapshot, TrackerState};
use super::tracker_traits::{TrackerServiceTrait, TrackerStateRepositoryTrait};
use crate::achievements::{
    achievement_statuses, check_achievements, AchievementStatus, ACHIEVEMENT_CATALOG,
};
use crate::clock::Clock;
use crate::errors::{Error, Result};
use crate::events::{TrackerEvent, TrackerEventSink};
use crate::plans::{NewPlan, Plan, PlanError};
use crate::readings::{NewReading, ReadingError, ReadingFilter, ReadingLog};
use crate::stats::{self, compute_stats, DailyTotal, Stats};
use crate::streaks::{compute_streak, StreakSummary};

/// Owns the canonical tracker state and runs every user action to
/// completion: mutate, recompute derived values, persist, then notify the
/// event sink. Mutations take the write lock for their full duration, so
/// recomputation always sees the state it just changed.
pub struct TrackerService {
    state: RwLock<TrackerState>,
    repository: Arc<dyn TrackerStateRepositoryTrait>,
    event_sink: Arc<dyn TrackerEventSink>,
    clock: Arc<dyn Clock>,
}

impl TrackerService {
    /// Loads persisted state and brings the streak up to date; days may
    /// have passed since the last run.
    pub fn new(
        repository: Arc<dyn TrackerStateRepositoryTrait>,
        event_sink: Arc<dyn TrackerEventSink>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let mut state = repository.load()?;
        state.streak = compute_streak(&state.logs, clock.today(), state.streak.longest);
        info!(
            "Tracker state loaded: {} log entries, current streak {}",
            state.logs.len(),
            state.streak.current
        );

        Ok(Self {
            state: RwLock::new(state),
            repository,
            event_sink,
            clock,
        })
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, TrackerState>> {
        self.state.read().map_err(|e| Error::State(e.to_string()))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, TrackerState>> {
        self.state.write().map_err(|e| Error::State(e.to_string()))
    }
}

impl TrackerServiceTrait for TrackerService {
    fn save_plan(&self, new_plan: NewPlan) -> Result<Plan> {
        let mut state = self.write_state()?;
        if state.plan.is_some() {
            return Err(PlanError::AlreadyActive.into());
        }

        let plan = Plan::from_new(new_plan, self.clock.now(), self.clock.today())?;
        state.plan = Some(plan.clone());
        self.repository.save(&state)?;

        debug!(
            "Plan saved: {} units over {} days",
            plan.target_units, plan.duration_days
        );
        self.event_sink
            .emit(TrackerEvent::plan_saved(plan.target_units, plan.duration_days));

        Ok(plan)
    }

    fn add_reading(&self, new_reading: NewReading) -> Result<ReadingLog> {
        new_reading.validate()?;

        let mut state = self.write_state()?;
        if state.plan.is_none() {
            return Err(ReadingError::NoActivePlan.into());
        }

        let log = ReadingLog::from_new(new_reading, self.clock.now());
        state.logs.push(log.clone());

        state.streak = compute_streak(&state.logs, self.clock.today(), state.streak.longest);

        let total_read: Decimal = state.logs.iter().map(|entry| entry.amount).sum();
        let check = check_achievements(
            &ACHIEVEMENT_CATALOG,
            &state.unlocked_achievements,
            total_read,
            state.streak.current,
        );
        state.unlocked_achievements = check.unlocked_ids;

        self.repository.save(&state)?;

        debug!("Reading added: {} units (log {})", log.amount, log.id);
        let mut events = vec![TrackerEvent::reading_added(log.id.clone(), log.amount)];
        if !check.newly_unlocked.is_empty() {
            events.push(TrackerEvent::achievements_unlocked(check.newly_unlocked));
        }
        self.event_sink.emit_batch(events);

        Ok(log)
    }

    fn quick_add(&self, amount: Decimal) -> Result<ReadingLog> {
        self.add_reading(NewReading {
            amount,
            notes: String::new(),
        })
    }

    fn delete_reading(&self, log_id: &str) -> Result<ReadingLog> {
        let mut state = self.write_state()?;
        let position = state
            .logs
            .iter()
            .position(|log| log.id == log_id)
            .ok_or_else(|| ReadingError::NotFound(log_id.to_string()))?;
        let removed = state.logs.remove(position);

        state.streak = compute_streak(&state.logs, self.clock.today(), state.streak.longest);
        self.repository.save(&state)?;

        debug!("Reading log {} deleted", removed.id);
        self.event_sink
            .emit(TrackerEvent::reading_deleted(removed.id.clone()));

        Ok(removed)
    }

    fn clear_readings(&self) -> Result<usize> {
        let mut state = self.write_state()?;
        let removed = state.logs.len();
        state.logs.clear();

        // The current run drops to zero but the longest streak and the
        // unlocked achievements survive; only a full reset clears those.
        state.streak = compute_streak(&state.logs, self.clock.today(), state.streak.longest);
        self.repository.save(&state)?;

        info!("Cleared {} reading log entries", removed);
        self.event_sink.emit(TrackerEvent::readings_cleared(removed));

        Ok(removed)
    }

    fn reset_plan(&self) -> Result<()> {
        let mut state = self.write_state()?;
        let theme = state.theme.clone();
        *state = TrackerState {
            theme,
            ..TrackerState::default()
        };
        self.repository.clear_tracking_state()?;

        info!("Plan and tracking state reset");
        self.event_sink.emit(TrackerEvent::plan_reset());

        Ok(())
    }

    fn set_theme(&self, theme: &str) -> Result<()> {
        let mut state = self.write_state()?;
        state.theme = theme.to_string();
        self.repository.save(&state)?;
        Ok(())
    }

    fn toggle_theme(&self) -> Result<String> {
        let mut state = self.write_state()?;
        state.theme = if state.theme == "dark" {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        self.repository.save(&state)?;
        Ok(state.theme.clone())
    }

    fn restore_snapshot(&self, snapshot: TrackerSnapshot) -> Result<()> {
        let mut state = self.write_state()?;
        state.plan = snapshot.plan.filter(|plan| {
            if plan.is_well_formed() {
                true
            } else {
                warn!("Snapshot plan has out-of-range values; restoring without it");
                false
            }
        });
        state.logs = snapshot.logs;
        state.unlocked_achievements = snapshot.achievements;
        state.streak = StreakSummary {
            current: snapshot.streak,
            longest: snapshot.longest_streak,
        };
        self.repository.save(&state)?;

        info!(
            "Tracker state restored from snapshot ({} log entries)",
            state.logs.len()
        );
        self.event_sink.emit(TrackerEvent::snapshot_restored());

        Ok(())
    }

    fn get_plan(&self) -> Result<Option<Plan>> {
        Ok(self.read_state()?.plan.clone())
    }

    fn get_logs(&self) -> Result<Vec<ReadingLog>> {
        Ok(self.read_state()?.logs.clone())
    }

    fn filter_readings(&self, filter: &ReadingFilter) -> Result<Vec<ReadingLog>> {
        let state = self.read_state()?;
        Ok(filter.apply(&state.logs, self.clock.today()))
    }

    fn get_stats(&self) -> Result<Stats> {
        let state = self.read_state()?;
        Ok(compute_stats(
            state.plan.as_ref(),
            &state.logs,
            self.clock.today(),
        ))
    }

    fn get_streak(&self) -> Result<StreakSummary> {
        // Recomputed against the current day: a run lapses once a full day
        // passes with no log, even if nothing else changed the state.
        let state = self.read_state()?;
        Ok(compute_streak(
            &state.logs,
            self.clock.today(),
            state.streak.longest,
        ))
    }

    fn weekly_totals(&self) -> Result<Vec<DailyTotal>> {
        let state = self.read_state()?;
        Ok(stats::weekly_totals(&state.logs, self.clock.today()))
    }

    fn unlocked_achievements(&self) -> Result<Vec<String>> {
        Ok(self.read_state()?.unlocked_achievements.clone())
    }

    fn achievement_statuses(&self) -> Result<Vec<AchievementStatus>> {
        let state = self.read_state()?;
        Ok(achievement_statuses(
            &ACHIEVEMENT_CATALOG,
            &state.unlocked_achievements,
        ))
    }

    fn theme(&self) -> Result<String> {
        Ok(self.read_state()?.theme.clone())
    }

    fn export_snapshot(&self) -> Result<TrackerSnapshot> {
        let state = self.read_state()?;
        Ok(TrackerSnapshot {
            plan: state.plan.clone(),
            logs: state.logs.clone(),
            achievements: state.unlocked_achievements.clone(),
            streak: state.streak.current,
            longest_streak: state.streak.longest,
            export_date: self.clock.now(),
        })
    }
}
