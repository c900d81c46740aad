use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Day count must be at least 1")]
    InvalidDayCount,

    #[error("Target units must be a positive number")]
    InvalidTargetUnits,

    #[error("An end date is required when fixed end mode is enabled")]
    MissingEndDate,

    #[error("A plan is already active; reset it before saving a new one")]
    AlreadyActive,
}
