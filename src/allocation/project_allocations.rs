//! Per-project allocation aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::capabilities::{AllocatedCapability, Allocations};
use crate::allocation::demands::Demands;
use crate::allocation::events::{
    CapabilitiesAllocated, CapabilityReleased, ProjectAllocationScheduled,
    ProjectAllocationsDemandsScheduled,
};
use crate::core::{AllocatableCapabilityId, Capability, ProjectId, TimeSlot};

/// A project's allocation state: its declared time slot, current allocations,
/// and outstanding demands.
///
/// Mutated exclusively through [`allocate`](Self::allocate),
/// [`release`](Self::release), [`add_demands`](Self::add_demands), and
/// [`define_slot`](Self::define_slot). The missing-demand view is always
/// recomputed from (demands, allocations), never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAllocations {
    project_id: ProjectId,
    allocations: Allocations,
    demands: Demands,
    slot: TimeSlot,
}

impl ProjectAllocations {
    /// Aggregate with explicit initial state.
    #[must_use]
    pub const fn new(
        project_id: ProjectId,
        allocations: Allocations,
        demands: Demands,
        slot: TimeSlot,
    ) -> Self {
        Self {
            project_id,
            allocations,
            demands,
            slot,
        }
    }

    /// Aggregate with no demands, no allocations, and no declared slot.
    #[must_use]
    pub fn empty(project_id: ProjectId) -> Self {
        Self::new(
            project_id,
            Allocations::none(),
            Demands::none(),
            TimeSlot::empty(),
        )
    }

    /// Aggregate with initial demands and no declared slot.
    #[must_use]
    pub fn with_demands(project_id: ProjectId, demands: Demands) -> Self {
        Self::new(project_id, Allocations::none(), demands, TimeSlot::empty())
    }

    /// The owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Current allocation facts.
    #[must_use]
    pub const fn allocations(&self) -> &Allocations {
        &self.allocations
    }

    /// Current demand set.
    #[must_use]
    pub const fn demands(&self) -> &Demands {
        &self.demands
    }

    /// The declared project slot; the empty sentinel when undeclared.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Whether the project has declared a time slot.
    #[must_use]
    pub fn has_time_slot(&self) -> bool {
        !self.slot.is_empty()
    }

    /// Derived missing-demand view.
    #[must_use]
    pub fn missing_demands(&self) -> Demands {
        self.demands.missing_demands(&self.allocations)
    }

    /// Record an allocation. Returns `None` (and changes nothing) when the
    /// same fact already exists or when `requested_slot` falls outside a
    /// declared project slot.
    pub fn allocate(
        &mut self,
        id: AllocatableCapabilityId,
        capability: Capability,
        requested_slot: TimeSlot,
        when: DateTime<Utc>,
    ) -> Option<CapabilitiesAllocated> {
        let allocated = AllocatedCapability::new(id, capability, requested_slot);
        let new_allocations = self.allocations.add(allocated.clone());

        if new_allocations == self.allocations || !self.within_project_slot(&requested_slot) {
            return None;
        }

        self.allocations = new_allocations;
        Some(CapabilitiesAllocated {
            allocated_capability_id: allocated.allocated_capability_id,
            project_id: self.project_id,
            missing_demands: self.missing_demands(),
            occurred_at: when,
        })
    }

    /// Remove an allocation matching exactly (id, slot). Returns `None` when
    /// nothing matched.
    pub fn release(
        &mut self,
        allocated_capability_id: Uuid,
        slot: &TimeSlot,
        when: DateTime<Utc>,
    ) -> Option<CapabilityReleased> {
        let new_allocations = self.allocations.remove(allocated_capability_id, slot);
        if new_allocations == self.allocations {
            return None;
        }

        self.allocations = new_allocations;
        Some(CapabilityReleased {
            project_id: self.project_id,
            missing_demands: self.missing_demands(),
            occurred_at: when,
        })
    }

    /// Merge new demands into the demand set.
    pub fn add_demands(
        &mut self,
        new_demands: &Demands,
        when: DateTime<Utc>,
    ) -> ProjectAllocationsDemandsScheduled {
        self.demands = self.demands.with_new(new_demands);
        ProjectAllocationsDemandsScheduled {
            project_id: self.project_id,
            missing_demands: self.missing_demands(),
            occurred_at: when,
        }
    }

    /// Replace the declared project slot. Existing allocations are not
    /// re-validated against the new slot.
    pub fn define_slot(
        &mut self,
        new_slot: TimeSlot,
        when: DateTime<Utc>,
    ) -> ProjectAllocationScheduled {
        self.slot = new_slot;
        ProjectAllocationScheduled {
            project_id: self.project_id,
            from_to: new_slot,
            occurred_at: when,
        }
    }

    fn within_project_slot(&self, requested_slot: &TimeSlot) -> bool {
        !self.has_time_slot() || requested_slot.within(&self.slot)
    }
}
