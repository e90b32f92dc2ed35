//! Facts emitted by the project allocation aggregate and its facade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::cashflow::EarningsRecalculated;
use crate::allocation::demands::Demands;
use crate::core::{ProjectId, TimeSlot};

/// A capability was allocated to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitiesAllocated {
    /// Identifier of the new allocation fact.
    pub allocated_capability_id: Uuid,
    /// The project that received the allocation.
    pub project_id: ProjectId,
    /// Missing-demand snapshot after the allocation.
    pub missing_demands: Demands,
    /// When the allocation was recorded.
    pub occurred_at: DateTime<Utc>,
}

/// A previously allocated capability was released from a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReleased {
    /// The project that released the capability.
    pub project_id: ProjectId,
    /// Missing-demand snapshot after the release.
    pub missing_demands: Demands,
    /// When the release was recorded.
    pub occurred_at: DateTime<Utc>,
}

/// New demands were scheduled for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAllocationsDemandsScheduled {
    /// The project whose demands changed.
    pub project_id: ProjectId,
    /// Missing-demand snapshot after the merge.
    pub missing_demands: Demands,
    /// When the demands were scheduled.
    pub occurred_at: DateTime<Utc>,
}

/// A project's declared time slot was defined or redefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAllocationScheduled {
    /// The project whose slot changed.
    pub project_id: ProjectId,
    /// The newly declared slot.
    pub from_to: TimeSlot,
    /// When the slot was declared.
    pub occurred_at: DateTime<Utc>,
}

/// Closed union of allocation-side facts handed to the event sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationEvent {
    /// See [`CapabilitiesAllocated`].
    CapabilitiesAllocated(CapabilitiesAllocated),
    /// See [`CapabilityReleased`].
    CapabilityReleased(CapabilityReleased),
    /// See [`ProjectAllocationsDemandsScheduled`].
    ProjectAllocationsDemandsScheduled(ProjectAllocationsDemandsScheduled),
    /// See [`ProjectAllocationScheduled`].
    ProjectAllocationScheduled(ProjectAllocationScheduled),
    /// See [`EarningsRecalculated`].
    EarningsRecalculated(EarningsRecalculated),
}

/// Sink for emitted facts. The core only hands facts over; routing them to
/// saga instances and other subscribers is an external concern.
pub trait EventPublisher: Send + Sync {
    /// Publish one fact.
    fn publish(&self, event: AllocationEvent);
}

impl<T: EventPublisher + ?Sized> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: AllocationEvent) {
        (**self).publish(event);
    }
}
