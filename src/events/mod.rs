//! Tracker events module.
//!
//! Provides event types and the sink trait for notifying collaborators
//! after successful state mutations. The embedding UI implements the sink
//! to translate events into toasts, re-renders, or other reactions.

mod sink;
mod tracker_event;

pub use sink::*;
pub use tracker_event::*;
