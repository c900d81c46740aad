pub mod readings_errors;
pub mod readings_model;

pub use readings_errors::ReadingError;
pub use readings_model::{NewReading, ReadingFilter, ReadingLog, ReadingWindow};
