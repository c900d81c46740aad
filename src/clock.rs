//! Time source abstraction.
//!
//! Streak and stats computations depend on "today", so services never read
//! the wall clock directly. They go through a [`Clock`] so tests can pin or
//! advance time deterministically.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::sync::Mutex;

use crate::utils::time_utils;

/// Source of the current instant.
/// Abstracted for testing purposes.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day of `now()` in the local timezone.
    fn today(&self) -> NaiveDate {
        time_utils::local_day(self.now())
    }
}

/// Wall-clock implementation used in production.
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, settable and advanceable from tests.
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Replaces the pinned instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().unwrap() = instant;
    }

    /// Moves the pinned instant forward (or backward for negative durations).
    pub fn advance(&self, duration: Duration) {
        let mut instant = self.instant.lock().unwrap();
        *instant += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap()
    }
}
