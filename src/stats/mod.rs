pub mod stats_model;
pub mod stats_service;

pub use stats_model::{DailyTotal, PlanStatus, Stats};
pub use stats_service::{compute_stats, weekly_totals};
