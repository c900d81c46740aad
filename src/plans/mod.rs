pub mod plans_errors;
pub mod plans_model;

pub use plans_errors::PlanError;
pub use plans_model::{NewPlan, Plan};
