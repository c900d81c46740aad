pub mod db;

pub mod achievements;
pub mod plans;
pub mod readings;
pub mod stats;
pub mod streaks;
pub mod tracker;

pub mod clock;
pub mod constants;
pub mod errors;
pub mod events;
pub mod schema;
pub mod utils;

pub use tracker::*;
