//! Project allocation facts, demands, and the per-project aggregate.

pub mod capabilities;
pub mod cashflow;
pub mod demands;
pub mod events;
pub mod facade;
pub mod project_allocations;
pub mod repository;

pub use capabilities::{AllocatedCapability, Allocations};
pub use cashflow::{Earnings, EarningsRecalculated};
pub use demands::{Demand, Demands};
pub use events::{
    AllocationEvent, CapabilitiesAllocated, CapabilityReleased, EventPublisher,
    ProjectAllocationScheduled, ProjectAllocationsDemandsScheduled,
};
pub use facade::{AllocationFacade, CapabilityFinder};
pub use project_allocations::ProjectAllocations;
pub use repository::ProjectAllocationsRepository;
