use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    #[error("Reading amount must be a positive number")]
    InvalidAmount,

    #[error("No active plan; create a plan before logging readings")]
    NoActivePlan,

    #[error("Reading log entry not found: {0}")]
    NotFound(String),
}
