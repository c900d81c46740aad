pub mod tracker_model;
pub mod tracker_repository;
pub mod tracker_service;
pub mod tracker_traits;

pub use tracker_model::{TrackerSnapshot, TrackerState};
pub use tracker_repository::TrackerStateRepository;
pub use tracker_service::TrackerService;
pub use tracker_traits::{TrackerServiceTrait, TrackerStateRepositoryTrait};
