//! Shared value objects and error types.

pub mod error;
pub mod ids;
pub mod time_slot;

pub use error::{AppResult, LedgerError};
pub use ids::{AllocatableCapabilityId, Capability, Owner, ProjectId, ResourceId};
pub use time_slot::TimeSlot;
