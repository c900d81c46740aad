//! Tracker event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::TrackerEvent;

/// Trait for receiving tracker events.
///
/// Implementations translate events into platform-specific actions (toasts,
/// view refreshes). The tracker service emits events through this trait
/// after successful mutations.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Failure to emit must not affect tracker operations (best-effort)
pub trait TrackerEventSink: Send + Sync {
    /// Emit a single tracker event.
    fn emit(&self, event: TrackerEvent);

    /// Emit multiple tracker events.
    ///
    /// Default implementation calls `emit()` for each event.
    /// Implementations may override for batch optimization.
    fn emit_batch(&self, events: Vec<TrackerEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpTrackerEventSink;

impl TrackerEventSink for NoOpTrackerEventSink {
    fn emit(&self, _event: TrackerEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockTrackerEventSink {
    events: Arc<Mutex<Vec<TrackerEvent>>>,
}

impl MockTrackerEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<TrackerEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl TrackerEventSink for MockTrackerEventSink {
    fn emit(&self, event: TrackerEvent) {
        self.events.lock().unwrap().push(event);
    }
}
