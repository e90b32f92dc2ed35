//! Time-slot availability ledger: one row per (resource, block) pair with
//! ownership-checked block/release/disable transitions.

pub mod events;
pub mod facade;
pub mod repository;
pub mod resource_availability;

pub use events::ResourceTakenOver;
pub use facade::AvailabilityFacade;
pub use repository::AvailabilityRepository;
pub use resource_availability::{ResourceAvailability, ResourceStatus};
